//! Fund holdings, retrieved in pages of at most [`HOLDINGS_PAGE_SIZE`] items.

mod api;
mod model;
mod wire;

pub use api::HOLDINGS_PAGE_SIZE;
pub use model::{Holding, HoldingCategory};

use crate::core::{FundService, VgError, symbol::normalize_symbol};

/// Fetches every holding of `symbol` in `category`.
///
/// A single-item probe learns the total count first; the full list is then
/// requested in consecutive batches and concatenated in page order. Funds with
/// at most one holding are answered by the probe alone.
///
/// The symbol is trimmed and upper-cased; an empty symbol or one that
/// could alter the resource path is rejected with `VgError::InvalidParams`.
///
/// # Errors
///
/// Returns the first `VgError` raised by any page: transport, status, decoding,
/// or field normalization. No partial list is returned.
pub async fn fetch_holdings<S>(
    service: &S,
    symbol: &str,
    category: HoldingCategory,
) -> Result<Vec<Holding>, VgError>
where
    S: FundService + ?Sized,
{
    let symbol = normalize_symbol(symbol)?;
    api::fetch_all(service, &symbol, category).await
}
