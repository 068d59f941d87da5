//! Chart and table model handed to a renderer

use serde::Serialize;

use crate::calculator::{
    periodic_depletion, periodic_growth, single_compound, CalculatorMode, ProjectionInput,
    ProjectionResult,
};
use crate::config::DisplayConfig;
use super::format::{format_currency, format_rate, format_years};

/// One labelled slice of the proportion chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    /// Share of the chart in percent, over the sum of absolute values
    pub share_pct: f64,
}

/// Two-slice proportion chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub title: String,
    pub slices: [Slice; 2],
}

impl Breakdown {
    pub fn new(title: String, first: (&'static str, f64), second: (&'static str, f64)) -> Self {
        let total = first.1.abs() + second.1.abs();
        let share = |v: f64| if total > 0.0 { v.abs() / total * 100.0 } else { 0.0 };

        Self {
            title,
            slices: [
                Slice { label: first.0, value: first.1, share_pct: share(first.1) },
                Slice { label: second.0, value: second.1, share_pct: share(second.1) },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: &'static str,
    pub value: String,
}

/// Key/value summary of inputs and outputs
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryTable {
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    fn push(&mut self, label: &'static str, value: String) {
        self.rows.push(TableRow { label, value });
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value.as_str())
    }
}

/// Everything a renderer needs for one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: CalculatorMode,
    pub title: String,
    /// Lead line, e.g. "Total Value: ₹12,809.33"
    pub headline: String,
    /// Validated input the report was built from
    pub input: ProjectionInput,
    /// Rounded figures behind the chart and table
    pub result: ProjectionResult,
    pub breakdown: Breakdown,
    pub table: SummaryTable,
    /// Extra remark, set when a withdrawal plan runs out early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Report {
    /// Run the projection for `input` and lay it out for display
    pub fn build(input: &ProjectionInput, config: &DisplayConfig) -> Self {
        let money = |v: f64| format_currency(&config.currency_symbol, v);
        let mode = input.mode();
        let breakdown_title = format!("{} Breakdown", mode);
        let mut table = SummaryTable::default();
        let mut note = None;

        let (result, headline, breakdown) = match input {
            ProjectionInput::Sip(i) => {
                let r = periodic_growth(i);
                table.push("Monthly Investment", money(i.contribution));
                table.push("Expected Annual Return", format_rate(i.annual_rate_pct));
                table.push("Investment Duration", format_years(i.years));
                table.push("Invested Amount", money(r.invested));
                table.push("Estimated Returns", money(r.gain));
                table.push("Total Value", money(r.total));
                (
                    ProjectionResult::Growth(r),
                    format!("Total Value: {}", money(r.total)),
                    Breakdown::new(breakdown_title, ("Invested", r.invested), ("Returns", r.gain)),
                )
            }
            ProjectionInput::LumpSum(i) => {
                let r = single_compound(i);
                table.push("Principal Amount", money(i.principal));
                table.push("Expected Annual Return", format_rate(i.annual_rate_pct));
                table.push("Investment Duration", format_years(i.years));
                table.push("Estimated Returns", money(r.gain));
                table.push("Total Value", money(r.total));
                (
                    ProjectionResult::Growth(r),
                    format!("Total Value: {}", money(r.total)),
                    Breakdown::new(breakdown_title, ("Invested", r.invested), ("Returns", r.gain)),
                )
            }
            ProjectionInput::Swp(i) => {
                let r = periodic_depletion(i);
                table.push("Initial Investment", money(i.initial_balance));
                table.push("Monthly Withdrawal", money(i.withdrawal));
                table.push("Expected Annual Return", format_rate(i.annual_rate_pct));
                table.push("Withdrawal Duration", format_years(i.years));
                table.push("Total Withdrawn", money(r.withdrawn));
                table.push("Remaining Balance", money(r.remaining_balance));
                if let Some(period) = r.depleted_after {
                    note = Some(format!("Balance runs out in month {} of {}", period, r.periods));
                }
                (
                    ProjectionResult::Depletion(r),
                    format!("Remaining Balance: {}", money(r.remaining_balance)),
                    Breakdown::new(
                        breakdown_title,
                        ("Withdrawn", r.withdrawn),
                        ("Remaining", r.remaining_balance),
                    ),
                )
            }
        };

        Self {
            mode,
            title: format!("{} - {}", config.title, mode.title()),
            headline,
            input: *input,
            result,
            breakdown,
            table,
            note,
        }
    }
}
