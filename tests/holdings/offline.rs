use crate::common::{client_for, fixture, fund_path, setup_server};
use httpmock::Method::GET;
use vanguard_rs::{Fund, HoldingCategory, VgError};

#[tokio::test]
async fn offline_short_term_reserve_single_item() {
    let server = setup_server();
    let probe = server.mock(|when, then| {
        when.method(GET)
            .path(fund_path("VOO", "portfolio-holding/short-term-reserve"))
            .query_param("start", "1")
            .query_param("count", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture(
                "portfolio-holding-short-term-reserve_start-1-count-1",
                "VOO",
                "json",
            ));
    });

    let client = client_for(&server);
    let fund = Fund::new(&client, "VOO").unwrap();
    let h = fund
        .holdings(HoldingCategory::ShortTermReserve)
        .await
        .unwrap();

    probe.assert_calls(1);
    assert_eq!(h.len(), 1);
    assert_eq!(h[0].shares, 3_118_421);
    assert_eq!(h[0].market_value, None);
    assert_eq!(
        h[0].long_name.as_deref(),
        Some("Vanguard Market Liquidity Fund")
    );
}

#[tokio::test]
async fn non_numeric_shares_surface_field_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path(fund_path("VOO", "portfolio-holding/stock"))
            .query_param("start", "1")
            .query_param("count", "1");
        then.status(200).body(
            r#"{"fund":{"entity":[{"asOfDate":"2024-03-31T00:00:00-04:00","sharesHeld":"abc","ticker":"AAPL"}]},"size":1}"#,
        );
    });

    let client = client_for(&server);
    let err = vanguard_rs::fetch_holdings(&client, "VOO", HoldingCategory::Stock)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        VgError::InvalidNumericField { field: "sharesHeld", .. }
    ));
}

#[tokio::test]
async fn bad_as_of_surfaces_timestamp_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path(fund_path("BND", "portfolio-holding/bond"))
            .query_param("start", "1")
            .query_param("count", "1");
        then.status(200).body(
            r#"{"fund":{"entity":[{"asOfDate":"2024-03-31","sharesHeld":"10","ticker":""}]},"size":1}"#,
        );
    });

    let client = client_for(&server);
    let err = vanguard_rs::fetch_holdings(&client, "BND", HoldingCategory::Bond)
        .await
        .unwrap_err();
    match err {
        VgError::InvalidTimestampField { field, value } => {
            assert_eq!(field, "asOfDate");
            assert_eq!(value, "2024-03-31");
        }
        other => panic!("expected InvalidTimestampField, got {other:?}"),
    }
}

#[tokio::test]
async fn free_function_normalizes_symbol_before_paging() {
    let server = setup_server();
    let probe = server.mock(|when, then| {
        when.method(GET)
            .path(fund_path("VOO", "portfolio-holding/short-term-reserve"))
            .query_param("start", "1")
            .query_param("count", "1");
        then.status(200).body(fixture(
            "portfolio-holding-short-term-reserve_start-1-count-1",
            "VOO",
            "json",
        ));
    });

    let client = client_for(&server);
    let h = vanguard_rs::fetch_holdings(&client, "voo", HoldingCategory::ShortTermReserve)
        .await
        .unwrap();
    probe.assert_calls(1);
    assert_eq!(h.len(), 1);

    let err = vanguard_rs::fetch_holdings(&client, "VOO?start=9", HoldingCategory::Stock)
        .await
        .unwrap_err();
    assert!(matches!(err, VgError::InvalidParams(_)), "got {err:?}");
}
