//! Fund profile: expense ratio, inception date and display name.

mod api;
mod model;
mod wire;

pub use model::Profile;

use crate::core::{FundService, VgError, symbol::normalize_symbol};

/// Fetches and normalizes the profile of `symbol`.
///
/// The symbol is trimmed and upper-cased; an empty symbol or one that
/// could alter the resource path is rejected with `VgError::InvalidParams`.
///
/// # Errors
///
/// Returns `VgError` if the request fails, the body does not match the profile
/// envelope, or any numeric/date field cannot be parsed.
pub async fn fetch_profile<S>(service: &S, symbol: &str) -> Result<Profile, VgError>
where
    S: FundService + ?Sized,
{
    let symbol = normalize_symbol(symbol)?;
    api::fetch(service, &symbol).await
}
