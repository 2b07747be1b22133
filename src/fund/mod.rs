use crate::core::{VgClient, VgError, symbol::normalize_symbol};
use crate::diversification::{self, DiversificationInfo};
use crate::holdings::{self, Holding, HoldingCategory};
use crate::profile::{self, Profile};

/// A high-level handle for a single fund, the primary entry point of the crate.
///
/// A `Fund` pairs a [`VgClient`] with a ticker symbol and exposes the profile,
/// holdings and diversification resources of that fund. Every call is a fresh,
/// independent request sequence; nothing is cached between calls.
///
/// # Example
///
/// ```no_run
/// # use vanguard_rs::{Fund, HoldingCategory, VgClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VgClient::default();
/// let fund = Fund::new(&client, "VOO")?;
///
/// let profile = fund.profile().await?;
/// println!("{} costs {:.2}%", profile.long_name, profile.expense_ratio * 100.0);
///
/// let stocks = fund.holdings(HoldingCategory::Stock).await?;
/// println!("{} stock holdings", stocks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fund {
    client: VgClient,
    symbol: String,
}

impl Fund {
    /// Creates a handle without touching the network.
    ///
    /// The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `VgError::InvalidParams` if the symbol is empty or contains
    /// characters other than ASCII letters, digits, `.` and `-`.
    pub fn new(client: &VgClient, symbol: impl AsRef<str>) -> Result<Self, VgError> {
        Ok(Self {
            client: client.clone(),
            symbol: normalize_symbol(symbol.as_ref())?,
        })
    }

    /// Creates a handle after confirming the fund exists by fetching its profile.
    ///
    /// Use [`Fund::new`] followed by [`Fund::profile`] when the profile itself is
    /// needed, to avoid requesting it twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is invalid or the profile cannot be fetched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(client, symbol), err, fields(symbol = %symbol.as_ref())))]
    pub async fn load(client: &VgClient, symbol: impl AsRef<str>) -> Result<Self, VgError> {
        let fund = Self::new(client, symbol)?;
        fund.profile().await?;
        Ok(fund)
    }

    /// The normalized ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the fund's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any field cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn profile(&self) -> Result<Profile, VgError> {
        profile::fetch_profile(&self.client, &self.symbol).await
    }

    /// Fetches every holding in `category`, across as many pages as needed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any page; no partial list is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn holdings(&self, category: HoldingCategory) -> Result<Vec<Holding>, VgError> {
        holdings::fetch_holdings(&self.client, &self.symbol, category).await
    }

    /// Fetches the sector diversification of the fund and its benchmark.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the sector list is empty, or any
    /// field cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn diversification(&self) -> Result<DiversificationInfo, VgError> {
        diversification::fetch_diversification(&self.client, &self.symbol).await
    }
}
