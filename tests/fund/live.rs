use vanguard_rs::{Fund, HoldingCategory, VgClient};

fn live_enabled() -> bool {
    std::env::var("VG_LIVE").ok().as_deref() == Some("1")
        || std::env::var("VG_RECORD").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore = "exercise live Vanguard API"]
async fn live_voo_end_to_end() {
    if !live_enabled() {
        return;
    }
    let client = VgClient::default();
    let fund = Fund::load(&client, "VOO").await.unwrap();

    let p = fund.profile().await.unwrap();
    assert_eq!(p.symbol, "VOO");
    assert!(p.expense_ratio > 0.0);

    let h = fund.holdings(HoldingCategory::Stock).await.unwrap();
    assert!(!h.is_empty());

    let d = fund.diversification().await.unwrap();
    assert!(!d.sectors.is_empty());
}
