use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Weight of one sector in the fund and in its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorPercentage {
    /// Fund weight as a fraction in `[0, 1]`.
    pub current_weight: f64,
    /// Benchmark weight as a fraction; `0.0` when the benchmark reports none.
    pub benchmark_weight: f64,
}

/// Sector breakdown of a fund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversificationInfo {
    /// Weights keyed by sector name.
    pub sectors: HashMap<String, SectorPercentage>,
    /// When the benchmark weights were recorded.
    pub benchmark_as_of: DateTime<Utc>,
    /// When the fund weights were recorded.
    pub current_as_of: DateTime<Utc>,
}
