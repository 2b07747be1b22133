use crate::core::{
    FundService, VgError,
    conversions::{non_empty, parse_optional_u64, parse_timestamp, parse_u64},
    net,
};

use super::wire::{HoldingsEnvelope, RawHolding};
use super::{Holding, HoldingCategory};

/// Largest page the API serves in one request.
pub const HOLDINGS_PAGE_SIZE: u64 = 5000;

/// Where the holdings retrieval currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    /// Asking for a single item to learn the total count.
    Probing,
    /// Requesting the batch beginning at the 1-based `start`.
    Fetching { start: u64 },
    Done,
}

/// Retrieves every holding of `category`, page by page, in ascending `start` order.
///
/// Pages are requested one after another; the first failing page aborts the
/// whole retrieval and nothing collected so far is returned.
pub(super) async fn fetch_all<S>(
    service: &S,
    symbol: &str,
    category: HoldingCategory,
) -> Result<Vec<Holding>, VgError>
where
    S: FundService + ?Sized,
{
    let resource = category.resource();
    let mut total = 0;
    let mut holdings = Vec::new();
    let mut state = PageState::Probing;

    while state != PageState::Done {
        state = match state {
            PageState::Probing => {
                let probe = fetch_page(service, symbol, resource, 1, 1).await?;
                total = probe.size;

                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, %category, total, "holdings size probe");

                if total <= 1 {
                    // The probe already carries the only holding, if any.
                    holdings = to_holdings(probe.fund.entity)?;
                    PageState::Done
                } else {
                    PageState::Fetching { start: 1 }
                }
            }
            PageState::Fetching { start } => {
                let page = fetch_page(service, symbol, resource, start, HOLDINGS_PAGE_SIZE).await?;

                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, %category, start, received = page.fund.entity.len(), "holdings page");

                holdings.extend(to_holdings(page.fund.entity)?);
                next_state(start, total)
            }
            PageState::Done => PageState::Done,
        };
    }

    #[cfg(feature = "tracing")]
    {
        if holdings.len() as u64 != total {
            tracing::warn!(
                symbol,
                %category,
                expected = total,
                received = holdings.len(),
                "holdings count differs from reported size"
            );
        }
    }

    Ok(holdings)
}

fn next_state(start: u64, total: u64) -> PageState {
    let next = start.saturating_add(HOLDINGS_PAGE_SIZE);
    if next > total {
        PageState::Done
    } else {
        PageState::Fetching { start: next }
    }
}

async fn fetch_page<S>(
    service: &S,
    symbol: &str,
    resource: &str,
    start: u64,
    count: u64,
) -> Result<HoldingsEnvelope, VgError>
where
    S: FundService + ?Sized,
{
    let query = format!("start={start}&count={count}");
    let text = service.fetch_resource(symbol, resource, Some(&query)).await?;
    net::decode(resource, &text)
}

fn to_holdings(raw: Vec<RawHolding>) -> Result<Vec<Holding>, VgError> {
    raw.into_iter().map(to_holding).collect()
}

fn to_holding(h: RawHolding) -> Result<Holding, VgError> {
    Ok(Holding {
        as_of: parse_timestamp("asOfDate", &h.as_of_date)?,
        shares: parse_u64("sharesHeld", &h.shares_held)?,
        market_value: parse_optional_u64("marketValue", h.market_value.as_deref())?,
        symbol: h.ticker,
        long_name: non_empty(h.long_name),
    })
}
