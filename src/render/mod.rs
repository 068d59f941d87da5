//! Rendering of calculation reports
//!
//! A [`Report`] carries the headline, the two-slice breakdown chart and the
//! summary table for one calculation. Renderers turn it into terminal text
//! or JSON.

mod format;
mod report;
mod text;
mod json;

pub use format::{format_amount, format_currency, format_rate, format_years};
pub use report::{Breakdown, Report, Slice, SummaryTable, TableRow};
pub use text::TextRenderer;
pub use json::JsonRenderer;

use crate::error::Result;

/// Turns a report into displayable output
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<String>;
}
