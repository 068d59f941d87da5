//! Single lump-sum compounding

use log::debug;
use super::input::LumpSumInput;
use super::result::GrowthResult;

/// Compound a principal annually, with `years` used as a real exponent
pub fn single_compound(input: &LumpSumInput) -> GrowthResult {
    let total = input.principal * (1.0 + input.annual_rate_pct / 100.0).powf(input.years);

    debug!(
        "Lump sum: principal={} rate={}% years={} -> total={:.4}",
        input.principal, input.annual_rate_pct, input.years, total
    );

    GrowthResult::rounded(input.principal, total - input.principal, total)
}
