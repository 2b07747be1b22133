use crate::common::{REFERER, client_for, fixture, fund_path, setup_server};
use httpmock::Method::GET;
use vanguard_rs::{Fund, VgError};

#[tokio::test]
async fn offline_diversification_voo_from_fixture() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(fund_path("VOO", "diversification"))
            .header("referer", REFERER);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("diversification", "VOO", "json"));
    });

    let client = client_for(&server);
    let d = Fund::new(&client, "VOO")
        .unwrap()
        .diversification()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(d.sectors.len(), 4);
    let it = d.sectors["Information Technology"];
    assert!((it.current_weight - 0.296).abs() < 1e-12);
    assert!((it.benchmark_weight - 0.296).abs() < 1e-12);

    let re = d.sectors["Real Estate"];
    assert!((re.current_weight - 0.023).abs() < 1e-12);
    assert_eq!(re.benchmark_weight, 0.0);

    assert!(d.sectors.values().all(|s| (0.0..=1.0).contains(&s.current_weight)));
    assert_eq!(d.current_as_of, d.benchmark_as_of);
}

#[tokio::test]
async fn empty_sector_wrapper_is_reported() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path(fund_path("VGSH", "diversification"));
        then.status(200).body(
            r#"{"sector":{"currentAsOfDate":"2024-03-31T00:00:00-04:00","benchmarkAsOfDate":"2024-03-31T00:00:00-04:00","long":[]}}"#,
        );
    });

    let client = client_for(&server);
    let err = vanguard_rs::fetch_diversification(&client, "VGSH")
        .await
        .unwrap_err();
    assert!(matches!(err, VgError::EmptySectorData));
}

#[tokio::test]
async fn free_function_rejects_empty_symbol() {
    let server = setup_server();
    let client = client_for(&server);
    let err = vanguard_rs::fetch_diversification(&client, "  ")
        .await
        .unwrap_err();
    assert!(matches!(err, VgError::InvalidParams(_)), "got {err:?}");
}
