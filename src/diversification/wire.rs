use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DiversificationEnvelope {
    pub(crate) sector: RawDiversification,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDiversification {
    pub(crate) current_as_of_date: String,
    pub(crate) benchmark_as_of_date: String,
    /// Sector entries are nested one level down; only the first wrapper is used.
    #[serde(rename = "long")]
    pub(crate) sectors: Vec<RawSectorGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSectorGroup {
    #[serde(rename = "item", default)]
    pub(crate) items: Vec<RawSector>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSector {
    pub(crate) name: String,
    // Empty when the benchmark does not report the sector
    #[serde(rename = "bnkCurrYrPct", default)]
    pub(crate) benchmark_pct: String,
    #[serde(rename = "currYrPct")]
    pub(crate) current_pct: String,
}
