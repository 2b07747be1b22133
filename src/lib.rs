//! vanguard-rs: async client for the Vanguard fund-data API.
//!
//! Retrieves ETF profiles, complete holdings lists (fetched in pages of up to
//! [`HOLDINGS_PAGE_SIZE`] items) and sector diversification by ticker symbol.
//! The API's string-encoded numbers and dates are validated and converted into
//! strict types; any malformed field fails the whole call.
//!
//! ```no_run
//! # use vanguard_rs::{Fund, VgClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), vanguard_rs::VgError> {
//! let client = VgClient::builder().debug(false).build()?;
//! let fund = Fund::new(&client, "VOO")?;
//! let sectors = fund.diversification().await?;
//! for (name, w) in &sectors.sectors {
//!     println!("{name}: {:.2}% (benchmark {:.2}%)", w.current_weight * 100.0, w.benchmark_weight * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod diversification;
pub mod fund;
pub mod holdings;
pub mod profile;

pub use crate::core::{FundService, VgClient, VgClientBuilder, VgError};
pub use diversification::{DiversificationInfo, SectorPercentage, fetch_diversification};
pub use fund::Fund;
pub use holdings::{HOLDINGS_PAGE_SIZE, Holding, HoldingCategory, fetch_holdings};
pub use profile::{Profile, fetch_profile};
