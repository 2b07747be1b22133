use std::time::Duration;
use vanguard_rs::{Fund, HoldingCategory, VgClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Usage: fund_overview [SYMBOL] [--debug]
    let mut symbol = "VOO".to_string();
    let mut debug = false;
    for arg in std::env::args().skip(1) {
        if arg == "--debug" {
            debug = true;
        } else {
            symbol = arg;
        }
    }

    let client = VgClient::builder()
        .timeout(Duration::from_secs(30))
        .debug(debug)
        .build()?;

    // 1. Profile; an unknown symbol fails here, before any holdings paging.
    let fund = Fund::new(&client, &symbol)?;
    let profile = fund.profile().await?;
    println!("--- {} ({}) ---", profile.long_name, profile.symbol);
    println!(
        "Expense ratio: {:.2}% (as of {})",
        profile.expense_ratio * 100.0,
        profile.expense_ratio_as_of.date_naive()
    );
    println!("Inception: {}", profile.inception_date.date_naive());
    println!();

    // 2. Holdings, all pages.
    let holdings = fund.holdings(HoldingCategory::Stock).await?;
    println!("Total stock holdings: {}", holdings.len());
    let mut top: Vec<_> = holdings.iter().filter(|h| h.market_value.is_some()).collect();
    top.sort_by_key(|h| std::cmp::Reverse(h.market_value));
    for h in top.iter().take(10) {
        println!(
            "  {:<8} {:>14} shares  ${}",
            h.symbol,
            h.shares,
            h.market_value.unwrap_or_default()
        );
    }
    println!();

    // 3. Sector weights.
    let div = fund.diversification().await?;
    println!("--- Sectors (as of {}) ---", div.current_as_of.date_naive());
    let mut sectors: Vec<_> = div.sectors.iter().collect();
    sectors.sort_by(|a, b| b.1.current_weight.total_cmp(&a.1.current_weight));
    for (name, w) in sectors {
        println!(
            "  {:<28} {:>6.2}%  (benchmark {:>6.2}%)",
            name,
            w.current_weight * 100.0,
            w.benchmark_weight * 100.0
        );
    }

    Ok(())
}
