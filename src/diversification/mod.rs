//! Sector diversification of a fund against its benchmark.

mod api;
mod model;
mod wire;

pub use model::{DiversificationInfo, SectorPercentage};

use crate::core::{FundService, VgError, symbol::normalize_symbol};

/// Fetches the sector weights of `symbol` and of its benchmark.
///
/// The symbol is trimmed and upper-cased; an empty symbol or one that
/// could alter the resource path is rejected with `VgError::InvalidParams`.
///
/// # Errors
///
/// Returns `VgError::EmptySectorData` when the response carries no sector group,
/// and the usual transport, decoding or field errors otherwise.
pub async fn fetch_diversification<S>(
    service: &S,
    symbol: &str,
) -> Result<DiversificationInfo, VgError>
where
    S: FundService + ?Sized,
{
    let symbol = normalize_symbol(symbol)?;
    api::fetch(service, &symbol).await
}
