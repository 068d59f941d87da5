//! Output value objects returned by the projection functions

use serde::{Deserialize, Serialize};

/// Round a monetary amount to 2 decimal places
///
/// Ties on the exact binary value go to the even digit (0.125 -> 0.12).
pub fn round_money(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Result of a growth projection (SIP or lump sum)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Amount put in: contributions for SIP, the principal for lump sum
    pub invested: f64,
    /// total - invested; negative under a negative rate
    pub gain: f64,
    /// Value at the end of the horizon
    pub total: f64,
}

impl GrowthResult {
    /// Build a result with every amount rounded for display
    pub fn rounded(invested: f64, gain: f64, total: f64) -> Self {
        Self {
            invested: round_money(invested),
            gain: round_money(gain),
            total: round_money(total),
        }
    }
}

/// Result of a withdrawal projection (SWP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepletionResult {
    /// Nominal schedule: withdrawal * periods, even when the balance ran out early
    pub withdrawn: f64,
    /// Balance when the loop ended, negative if it ran out (not clamped)
    pub remaining_balance: f64,
    /// Scheduled number of monthly periods
    pub periods: u64,
    /// 1-based period in which the balance first went negative
    pub depleted_after: Option<u64>,
}

impl DepletionResult {
    pub fn is_depleted(&self) -> bool {
        self.depleted_after.is_some()
    }
}

/// Result of any of the three modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionResult {
    Growth(GrowthResult),
    Depletion(DepletionResult),
}

impl ProjectionResult {
    /// The figure the UI leads with: total value, or remaining balance for SWP
    pub fn headline(&self) -> f64 {
        match self {
            ProjectionResult::Growth(r) => r.total,
            ProjectionResult::Depletion(r) => r.remaining_balance,
        }
    }

    pub fn as_growth(&self) -> Option<&GrowthResult> {
        match self {
            ProjectionResult::Growth(r) => Some(r),
            ProjectionResult::Depletion(_) => None,
        }
    }

    pub fn as_depletion(&self) -> Option<&DepletionResult> {
        match self {
            ProjectionResult::Depletion(r) => Some(r),
            ProjectionResult::Growth(_) => None,
        }
    }
}
