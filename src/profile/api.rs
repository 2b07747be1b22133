use crate::core::{
    FundService, VgError,
    conversions::{parse_f64, parse_timestamp},
    net,
};

use super::Profile;
use super::wire::{ProfileEnvelope, RawProfile};

const PROFILE_RESOURCE: &str = "profile";

pub(super) async fn fetch<S>(service: &S, symbol: &str) -> Result<Profile, VgError>
where
    S: FundService + ?Sized,
{
    let text = service.fetch_resource(symbol, PROFILE_RESOURCE, None).await?;
    let env: ProfileEnvelope = net::decode(PROFILE_RESOURCE, &text)?;
    to_profile(env.fund_profile)
}

fn to_profile(raw: RawProfile) -> Result<Profile, VgError> {
    let expense_ratio = parse_f64("expenseRatio", &raw.expense_ratio)?;
    if expense_ratio < 0.0 {
        return Err(VgError::InvalidNumericField {
            field: "expenseRatio",
            value: raw.expense_ratio,
        });
    }

    Ok(Profile {
        expense_ratio,
        expense_ratio_as_of: parse_timestamp("expenseRatioAsOfDate", &raw.expense_ratio_as_of_date)?,
        inception_date: parse_timestamp("inceptionDate", &raw.inception_date)?,
        long_name: raw.long_name,
        symbol: raw.ticker,
    })
}
