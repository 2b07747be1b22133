use crate::core::VgError;

/// Trims and upper-cases a ticker, rejecting anything that could alter the
/// resource path (`/`, `?`, whitespace, ...).
pub(crate) fn normalize_symbol(symbol: &str) -> Result<String, VgError> {
    let s = symbol.trim();
    if s.is_empty() {
        return Err(VgError::InvalidParams("symbol must not be empty".into()));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(VgError::InvalidParams(format!("invalid symbol: {symbol:?}")));
    }
    Ok(s.to_ascii_uppercase())
}
