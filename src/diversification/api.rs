use std::collections::HashMap;

use crate::core::{
    FundService, VgError,
    conversions::{optional_percent_to_fraction, parse_timestamp, percent_to_fraction},
    net,
};

use super::wire::{DiversificationEnvelope, RawDiversification};
use super::{DiversificationInfo, SectorPercentage};

const DIVERSIFICATION_RESOURCE: &str = "diversification";

pub(super) async fn fetch<S>(service: &S, symbol: &str) -> Result<DiversificationInfo, VgError>
where
    S: FundService + ?Sized,
{
    let text = service
        .fetch_resource(symbol, DIVERSIFICATION_RESOURCE, None)
        .await?;
    let env: DiversificationEnvelope = net::decode(DIVERSIFICATION_RESOURCE, &text)?;
    to_diversification(env.sector)
}

fn to_diversification(raw: RawDiversification) -> Result<DiversificationInfo, VgError> {
    let group = raw
        .sectors
        .into_iter()
        .next()
        .ok_or(VgError::EmptySectorData)?;

    let benchmark_as_of = parse_timestamp("benchmarkAsOfDate", &raw.benchmark_as_of_date)?;
    let current_as_of = parse_timestamp("currentAsOfDate", &raw.current_as_of_date)?;

    let mut sectors = HashMap::with_capacity(group.items.len());
    for s in group.items {
        let weights = SectorPercentage {
            current_weight: percent_to_fraction("currYrPct", &s.current_pct)?,
            benchmark_weight: optional_percent_to_fraction("bnkCurrYrPct", &s.benchmark_pct)?,
        };
        sectors.insert(s.name, weights);
    }

    Ok(DiversificationInfo {
        sectors,
        benchmark_as_of,
        current_as_of,
    })
}
