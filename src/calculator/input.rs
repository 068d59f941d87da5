//! Input value objects for the three projection modes

use serde::{Deserialize, Serialize};
use super::CalculatorMode;

/// Periods per year for the two periodic formulas
pub const MONTHS_PER_YEAR: u32 = 12;

/// Whole monthly periods in a duration, floor(years * 12), as a float
///
/// Negative and NaN durations yield zero. Used for the nominal
/// `amount * periods` products so they stay exact for any horizon.
pub fn period_count(years: f64) -> f64 {
    let months = (years * MONTHS_PER_YEAR as f64).floor();
    if months > 0.0 {
        months
    } else {
        0.0
    }
}

/// Whole monthly periods in a duration as a loop bound
pub fn periods_for(years: f64) -> u64 {
    period_count(years) as u64
}

/// Monthly rate as a decimal from an annual percentage (12 -> 0.01)
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / MONTHS_PER_YEAR as f64 / 100.0
}

/// Recurring contribution plan (SIP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Amount contributed at the start of every month
    pub contribution: f64,
    /// Expected annual return in percent
    pub annual_rate_pct: f64,
    /// Plan duration in years (fractional years are truncated to whole months)
    pub years: f64,
}

impl GrowthInput {
    pub fn new(contribution: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self { contribution, annual_rate_pct, years }
    }

    pub fn periods(&self) -> u64 {
        periods_for(self.years)
    }

    pub fn period_count(&self) -> f64 {
        period_count(self.years)
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_pct)
    }
}

/// Recurring withdrawal plan (SWP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepletionInput {
    /// Balance at the start of the plan
    pub initial_balance: f64,
    /// Amount withdrawn at the end of every month
    pub withdrawal: f64,
    /// Expected annual return in percent
    pub annual_rate_pct: f64,
    /// Plan duration in years (fractional years are truncated to whole months)
    pub years: f64,
}

impl DepletionInput {
    pub fn new(initial_balance: f64, withdrawal: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self { initial_balance, withdrawal, annual_rate_pct, years }
    }

    pub fn periods(&self) -> u64 {
        periods_for(self.years)
    }

    pub fn period_count(&self) -> f64 {
        period_count(self.years)
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_pct)
    }
}

/// One-time investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpSumInput {
    pub principal: f64,
    /// Expected annual return in percent
    pub annual_rate_pct: f64,
    /// Used directly as the compounding exponent, fractional years allowed
    pub years: f64,
}

impl LumpSumInput {
    pub fn new(principal: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self { principal, annual_rate_pct, years }
    }
}

/// Input for any of the three modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProjectionInput {
    Sip(GrowthInput),
    Swp(DepletionInput),
    LumpSum(LumpSumInput),
}

impl ProjectionInput {
    pub fn mode(&self) -> CalculatorMode {
        match self {
            ProjectionInput::Sip(_) => CalculatorMode::Sip,
            ProjectionInput::Swp(_) => CalculatorMode::Swp,
            ProjectionInput::LumpSum(_) => CalculatorMode::LumpSum,
        }
    }

    pub fn annual_rate_pct(&self) -> f64 {
        match self {
            ProjectionInput::Sip(i) => i.annual_rate_pct,
            ProjectionInput::Swp(i) => i.annual_rate_pct,
            ProjectionInput::LumpSum(i) => i.annual_rate_pct,
        }
    }

    pub fn years(&self) -> f64 {
        match self {
            ProjectionInput::Sip(i) => i.years,
            ProjectionInput::Swp(i) => i.years,
            ProjectionInput::LumpSum(i) => i.years,
        }
    }

    /// Copy of this input with a different annual rate
    pub fn with_rate(&self, annual_rate_pct: f64) -> Self {
        let mut next = *self;
        match &mut next {
            ProjectionInput::Sip(i) => i.annual_rate_pct = annual_rate_pct,
            ProjectionInput::Swp(i) => i.annual_rate_pct = annual_rate_pct,
            ProjectionInput::LumpSum(i) => i.annual_rate_pct = annual_rate_pct,
        }
        next
    }

    /// Copy of this input with a different duration
    pub fn with_years(&self, years: f64) -> Self {
        let mut next = *self;
        match &mut next {
            ProjectionInput::Sip(i) => i.years = years,
            ProjectionInput::Swp(i) => i.years = years,
            ProjectionInput::LumpSum(i) => i.years = years,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_truncate() {
        assert_eq!(periods_for(1.0), 12);
        assert_eq!(periods_for(1.5), 18);
        // 1.99 years is 23.88 months
        assert_eq!(periods_for(1.99), 23);
        assert_eq!(periods_for(0.05), 0);
        assert_eq!(periods_for(-2.0), 0);
        assert_eq!(periods_for(f64::NAN), 0);
    }

    #[test]
    fn test_periods_beyond_u32() {
        // 1e9 years is 12e9 months, past u32::MAX
        assert_eq!(periods_for(1e9), 12_000_000_000);
        assert_eq!(period_count(1e9), 12e9);
        assert_eq!(period_count(-0.5), 0.0);
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(12.0), 0.01);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_with_rate_keeps_mode_and_amounts() {
        let base = ProjectionInput::Swp(DepletionInput::new(100_000.0, 5_000.0, 8.0, 3.0));
        let shifted = base.with_rate(10.0).with_years(4.0);

        assert_eq!(shifted.mode(), CalculatorMode::Swp);
        assert_eq!(shifted.annual_rate_pct(), 10.0);
        assert_eq!(shifted.years(), 4.0);
        match shifted {
            ProjectionInput::Swp(i) => {
                assert_eq!(i.initial_balance, 100_000.0);
                assert_eq!(i.withdrawal, 5_000.0);
            }
            other => panic!("unexpected input {:?}", other),
        }
    }
}
