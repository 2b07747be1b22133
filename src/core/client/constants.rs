//! Centralized constants for the default endpoint, referer and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Vanguard API host root. Resource paths are joined onto it.
pub(crate) const DEFAULT_BASE_API: &str = "https://api.vanguard.com/";

/// Sent as `Referer` on every request. Not configurable.
pub(crate) const REFERER: &str = "https://api.vanguard.com";

/// Path prefix shared by every per-fund resource; the symbol is appended.
pub(crate) const FUND_PATH_PREFIX: &str = "rs/ire/01/ind/fund";

/// Wire format suffix of every resource.
pub(crate) const RESOURCE_FORMAT: &str = "json";
