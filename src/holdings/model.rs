use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::VgError;

/// Selects which holdings sub-resource of a fund is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoldingCategory {
    /// Equity holdings.
    Stock,
    /// Fixed income holdings.
    Bond,
    /// Cash and cash-equivalent reserves.
    ShortTermReserve,
}

impl HoldingCategory {
    /// All categories, in wire order.
    pub const ALL: [Self; 3] = [Self::Stock, Self::Bond, Self::ShortTermReserve];

    /// The wire spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Bond => "bond",
            Self::ShortTermReserve => "short-term-reserve",
        }
    }

    /// Resource path below the fund, e.g. `portfolio-holding/stock`.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Stock => "portfolio-holding/stock",
            Self::Bond => "portfolio-holding/bond",
            Self::ShortTermReserve => "portfolio-holding/short-term-reserve",
        }
    }
}

impl fmt::Display for HoldingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoldingCategory {
    type Err = VgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VgError::InvalidParams(format!("unknown holding category: {s}")))
    }
}

/// One constituent security of a fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holding {
    /// When the position was reported.
    pub as_of: DateTime<Utc>,
    /// Number of shares held.
    pub shares: u64,
    /// Market value of the position, when the category reports one.
    pub market_value: Option<u64>,
    /// Ticker of the held security.
    pub symbol: String,
    /// Long name of the held security, if provided.
    pub long_name: Option<String>,
}
