use chrono::{DateTime, Utc};
use serde::Serialize;

/// Static facts about a fund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Annual expense ratio as a fraction (e.g. `0.0003` for 0.03%).
    pub expense_ratio: f64,
    /// When the expense ratio was recorded.
    pub expense_ratio_as_of: DateTime<Utc>,
    /// The fund's inception date.
    pub inception_date: DateTime<Utc>,
    /// Long display name (e.g. "Vanguard S&P 500 ETF").
    pub long_name: String,
    /// Ticker symbol as reported by the API.
    pub symbol: String,
}
