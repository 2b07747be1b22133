#![allow(dead_code)]

use httpmock::MockServer;
use std::{fs, path::Path};
use url::Url;
use vanguard_rs::VgClient;

pub const REFERER: &str = "https://api.vanguard.com";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn client_for(server: &MockServer) -> VgClient {
    VgClient::builder()
        .base_api(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn fund_path(symbol: &str, resource: &str) -> String {
    format!("/rs/ire/01/ind/fund/{symbol}/{resource}.json")
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Holdings envelope reporting `size` and carrying items `start..start+n`.
pub fn holdings_page(size: u64, start: u64, n: u64) -> String {
    let items: Vec<String> = (start..start + n)
        .map(|i| {
            format!(
                r#"{{"asOfDate":"2024-03-31T00:00:00-04:00","sharesHeld":"{}","ticker":"H{i}","marketValue":"{}","longName":"Holding {i}"}}"#,
                i * 3,
                i * 100
            )
        })
        .collect();
    format!(
        r#"{{"fund":{{"entity":[{}]}},"size":{size}}}"#,
        items.join(",")
    )
}
