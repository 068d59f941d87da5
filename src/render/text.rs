//! Plain-text renderer for terminals

use std::fmt::{self, Write};

use super::report::{Breakdown, Report, SummaryTable};
use super::Renderer;
use crate::error::Result;

/// Renders a headline, a bar chart and an aligned key/value table
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Characters for a 100% bar
    pub chart_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { chart_width: 40 }
    }
}

impl TextRenderer {
    pub fn new(chart_width: usize) -> Self {
        Self { chart_width }
    }

    fn write_chart(&self, out: &mut String, breakdown: &Breakdown) -> fmt::Result {
        let label_width = breakdown.slices.iter().map(|s| s.label.len()).max().unwrap_or(0);

        writeln!(out, "{}", breakdown.title)?;
        for slice in &breakdown.slices {
            let filled = (slice.share_pct / 100.0 * self.chart_width as f64).round() as usize;
            let bar: String = "#".repeat(filled.min(self.chart_width));
            writeln!(
                out,
                "  {:<lw$} |{:<cw$}| {:.1}%",
                slice.label,
                bar,
                slice.share_pct,
                lw = label_width,
                cw = self.chart_width,
            )?;
        }
        Ok(())
    }

    fn write_table(out: &mut String, table: &SummaryTable) -> fmt::Result {
        let label_width = table.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let value_width = table.rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);

        for row in &table.rows {
            writeln!(
                out,
                "  {:<lw$}  {:>vw$}",
                row.label,
                row.value,
                lw = label_width,
                vw = value_width,
            )?;
        }
        Ok(())
    }

    fn write_report(&self, out: &mut String, report: &Report) -> fmt::Result {
        writeln!(out, "{}", report.title)?;
        writeln!(out, "{}", "=".repeat(report.title.chars().count()))?;
        writeln!(out, "{}", report.headline)?;
        if let Some(note) = &report.note {
            writeln!(out, "Note: {}", note)?;
        }
        out.push('\n');

        self.write_chart(out, &report.breakdown)?;
        out.push('\n');
        Self::write_table(out, &report.table)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        self.write_report(&mut out, report)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{DepletionInput, LumpSumInput, ProjectionInput};
    use crate::config::DisplayConfig;

    #[test]
    fn test_text_report_layout() {
        let input = ProjectionInput::LumpSum(LumpSumInput::new(10_000.0, 10.0, 5.0));
        let report = Report::build(&input, &DisplayConfig::default().with_currency("$"));
        let text = TextRenderer::new(20).render(&report).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Financial Calculator - Lump Sum Calculator");
        assert_eq!(lines[2], "Total Value: $16,105.10");
        assert!(text.contains("Lump Sum Breakdown"));
        // 10000 / 16105.10 = 62.1%
        assert!(text.contains("| 62.1%"));
        assert!(text.contains("| 37.9%"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("  Total Value ") && l.ends_with("$16,105.10")));
    }

    #[test]
    fn test_note_line_for_depleted_plan() {
        let input = ProjectionInput::Swp(DepletionInput::new(10_000.0, 1_000.0, 12.0, 1.0));
        let report = Report::build(&input, &DisplayConfig::default());
        let text = TextRenderer::default().render(&report).unwrap();

        assert!(text.contains("Note: Balance runs out in month 11 of 12"));
    }

    #[test]
    fn test_table_rows_aligned() {
        let input = ProjectionInput::Swp(DepletionInput::new(100_000.0, 5_000.0, 8.0, 3.0));
        let report = Report::build(&input, &DisplayConfig::default());

        let mut out = String::new();
        TextRenderer::write_table(&mut out, &report.table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), report.table.rows.len());
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
