//! Month-by-month schedules for the two periodic plans

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use super::input::{DepletionInput, GrowthInput};

/// One month of a periodic plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based month number
    pub period: u64,
    /// Calendar date of the month, when the plan has a start date
    pub date: Option<NaiveDate>,
    pub opening_balance: f64,
    /// Cash in (+contribution) or out (-withdrawal) for the month
    pub flow: f64,
    pub interest: f64,
    pub closing_balance: f64,
}

fn period_date(start: Option<NaiveDate>, period: u64) -> Option<NaiveDate> {
    let offset = u32::try_from(period - 1).ok()?;
    start.and_then(|d| d.checked_add_months(Months::new(offset)))
}

/// SIP schedule: each contribution goes in at the start of the month and
/// the month's interest is earned on the new balance
pub fn growth_schedule(input: &GrowthInput, start: Option<NaiveDate>) -> Vec<ScheduleRow> {
    let growth = 1.0 + input.monthly_rate();
    let mut balance = 0.0;

    (1..=input.periods())
        .map(|period| {
            let opening = balance;
            let invested = opening + input.contribution;
            balance = invested * growth;

            ScheduleRow {
                period,
                date: period_date(start, period),
                opening_balance: opening,
                flow: input.contribution,
                interest: balance - invested,
                closing_balance: balance,
            }
        })
        .collect()
}

/// SWP schedule, ending in the month the balance goes negative
pub fn depletion_schedule(input: &DepletionInput, start: Option<NaiveDate>) -> Vec<ScheduleRow> {
    let growth = 1.0 + input.monthly_rate();
    let mut balance = input.initial_balance;
    let mut rows = Vec::new();

    for period in 1..=input.periods() {
        let opening = balance;
        balance = opening * growth - input.withdrawal;

        rows.push(ScheduleRow {
            period,
            date: period_date(start, period),
            opening_balance: opening,
            flow: -input.withdrawal,
            interest: opening * growth - opening,
            closing_balance: balance,
        });

        if balance < 0.0 {
            break;
        }
    }

    rows
}

/// Write a schedule as CSV with a header row
pub fn write_schedule_csv<W: Write>(rows: &[ScheduleRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
