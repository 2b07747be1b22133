//! Response recording for building offline test fixtures.
//! Compiled only when the `test-mode` feature is enabled.
//!
//! With `VG_RECORD=1`, every fund resource body is written to `VG_FIXDIR`
//! (default `tests/fixtures`) under the name the offline tests read it back by:
//! `{resource}[_{query}]_{SYMBOL}.json`, with `/`, `=` and `&` folded to `-`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::client::constants::RESOURCE_FORMAT;

pub(crate) fn recording_enabled() -> bool {
    env::var("VG_RECORD").ok().as_deref() == Some("1")
}

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("VG_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

// `portfolio-holding/stock` + `start=1&count=1` + `VOO`
//   -> `portfolio-holding-stock_start-1-count-1_VOO.json`
pub(crate) fn fixture_name(symbol: &str, resource: &str, query: Option<&str>) -> String {
    let clean = |s: &str| s.replace(|c: char| !c.is_alphanumeric() && c != '-', "-");
    match query {
        Some(q) if !q.is_empty() => {
            format!("{}_{}_{symbol}.{RESOURCE_FORMAT}", clean(resource), clean(q))
        }
        _ => format!("{}_{symbol}.{RESOURCE_FORMAT}", clean(resource)),
    }
}

/// Writes one response body into `dir`, returning the path written.
pub(crate) fn record_fixture_in(
    dir: &Path,
    symbol: &str,
    resource: &str,
    query: Option<&str>,
    body: &str,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture_name(symbol, resource, query));
    fs::write(&path, body)?;
    Ok(path)
}

/// Records the body when `VG_RECORD=1`. Failures are reported, never raised.
pub(crate) fn record_response(symbol: &str, resource: &str, query: Option<&str>, body: &str) {
    if !recording_enabled() {
        return;
    }
    match record_fixture_in(&fixture_dir(), symbol, resource, query, body) {
        Ok(path) => {
            if env::var("VG_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("VG_RECORD: wrote fixture to {}", path.display());
            }
        }
        Err(e) => eprintln!("VG_RECORD: failed to write fixture for {symbol}/{resource}: {e}"),
    }
}
