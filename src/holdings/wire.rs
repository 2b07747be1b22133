use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct HoldingsEnvelope {
    pub(crate) fund: RawFund,
    /// Total number of holdings in the category, independent of `start`/`count`.
    pub(crate) size: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFund {
    #[serde(default)]
    pub(crate) entity: Vec<RawHolding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawHolding {
    pub(crate) as_of_date: String,
    pub(crate) shares_held: String,
    pub(crate) ticker: String,
    // Absent for some categories (e.g. short-term reserves)
    pub(crate) market_value: Option<String>,
    pub(crate) long_name: Option<String>,
}
