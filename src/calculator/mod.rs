//! Projection functions for the three calculator modes
//!
//! - SIP: recurring monthly contributions compounded to the end of the plan
//! - SWP: a balance compounded monthly and drawn down by a fixed withdrawal
//! - Lump sum: one principal compounded annually over a real-valued horizon
//!
//! Every function is pure; amounts are rounded to 2 decimals on the way out.

mod input;
mod result;
mod growth;
mod depletion;
mod lump_sum;
pub mod schedule;

pub use input::{
    DepletionInput, GrowthInput, LumpSumInput, ProjectionInput,
    MONTHS_PER_YEAR, monthly_rate, period_count, periods_for,
};
pub use result::{DepletionResult, GrowthResult, ProjectionResult, round_money};
pub use growth::{future_value, periodic_growth};
pub use depletion::periodic_depletion;
pub use lump_sum::single_compound;
pub use schedule::{ScheduleRow, depletion_schedule, growth_schedule, write_schedule_csv};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Which calculator the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorMode {
    /// Systematic investment plan
    Sip,
    /// Systematic withdrawal plan
    Swp,
    LumpSum,
}

impl CalculatorMode {
    /// Heading used for the calculator section
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorMode::Sip => "SIP Calculator",
            CalculatorMode::Swp => "SWP Calculator",
            CalculatorMode::LumpSum => "Lump Sum Calculator",
        }
    }

    /// Whether the mode runs month by month and so has a schedule
    pub fn is_periodic(&self) -> bool {
        !matches!(self, CalculatorMode::LumpSum)
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculatorMode::Sip => "SIP",
            CalculatorMode::Swp => "SWP",
            CalculatorMode::LumpSum => "Lump Sum",
        };
        f.write_str(name)
    }
}

impl FromStr for CalculatorMode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sip" => Ok(CalculatorMode::Sip),
            "swp" => Ok(CalculatorMode::Swp),
            "lump_sum" | "lump-sum" | "lumpsum" | "lump sum" => Ok(CalculatorMode::LumpSum),
            _ => Err(CalculatorError::UnknownMode(s.to_string())),
        }
    }
}

/// Run the projection matching the input's mode
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    match input {
        ProjectionInput::Sip(i) => ProjectionResult::Growth(periodic_growth(i)),
        ProjectionInput::Swp(i) => ProjectionResult::Depletion(periodic_depletion(i)),
        ProjectionInput::LumpSum(i) => ProjectionResult::Growth(single_compound(i)),
    }
}
