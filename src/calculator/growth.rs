//! Systematic investment plan (SIP) projection

use log::debug;
use super::input::GrowthInput;
use super::result::GrowthResult;

/// Future value of `periods` equal contributions at a monthly rate
///
/// Contribution `i` (0-based) compounds for `periods - i` months: the first
/// compounds for the full horizon and the last for one month.
pub fn future_value(contribution: f64, monthly_rate: f64, periods: u64) -> f64 {
    let growth = 1.0 + monthly_rate;
    (0..periods)
        .map(|i| contribution * growth.powf((periods - i) as f64))
        .sum()
}

/// Project a recurring contribution plan
///
/// Returns invested, gain and total, rounded to 2 decimals. Zero periods give
/// an all-zero result; negative rates depreciate.
pub fn periodic_growth(input: &GrowthInput) -> GrowthResult {
    let periods = input.periods();
    let total = future_value(input.contribution, input.monthly_rate(), periods);
    let invested = input.contribution * input.period_count();

    debug!(
        "SIP: contribution={} rate={}% periods={} -> invested={:.4} total={:.4}",
        input.contribution, input.annual_rate_pct, periods, invested, total
    );

    GrowthResult::rounded(invested, total - invested, total)
}
