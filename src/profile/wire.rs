use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileEnvelope {
    pub(crate) fund_profile: RawProfile,
}

// Every field arrives as a string, numbers and dates included.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProfile {
    pub(crate) expense_ratio: String,
    pub(crate) expense_ratio_as_of_date: String,
    pub(crate) inception_date: String,
    pub(crate) long_name: String,
    pub(crate) ticker: String,
}
