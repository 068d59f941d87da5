//! Systematic withdrawal plan (SWP) projection

use log::debug;
use super::input::DepletionInput;
use super::result::{round_money, DepletionResult};

/// Project a recurring withdrawal plan
///
/// Each month the balance earns the monthly rate and then the withdrawal is
/// taken. The loop stops in the first month the balance goes negative and
/// reports that negative balance as is. `withdrawn` always follows the
/// nominal schedule (withdrawal * periods), not the months actually run.
pub fn periodic_depletion(input: &DepletionInput) -> DepletionResult {
    let periods = input.periods();
    let growth = 1.0 + input.monthly_rate();

    let mut balance = input.initial_balance;
    let mut depleted_after = None;

    for period in 1..=periods {
        balance = balance * growth - input.withdrawal;
        if balance < 0.0 {
            depleted_after = Some(period);
            break;
        }
    }

    let withdrawn = input.withdrawal * input.period_count();

    match depleted_after {
        Some(period) => debug!(
            "SWP: balance {:.2} exhausted in period {} of {}",
            input.initial_balance, period, periods
        ),
        None => debug!(
            "SWP: balance {:.2} -> {:.4} after {} periods",
            input.initial_balance, balance, periods
        ),
    }

    DepletionResult {
        withdrawn: round_money(withdrawn),
        remaining_balance: round_money(balance),
        periods,
        depleted_after,
    }
}
