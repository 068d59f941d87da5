//! The calculate action shared by the CLI and the HTTP handler

use log::info;
use std::collections::HashMap;

use crate::calculator::CalculatorMode;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::form::{self, FormOutcome};
use crate::render::{JsonRenderer, Renderer, Report, TextRenderer};

/// What pressing "calculate" produced
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Calculated(Report),
    /// A field was left blank, so nothing was calculated
    Skipped { missing: Vec<&'static str> },
}

/// Output formats a shell can render to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Form -> projection -> report, with one display configuration
#[derive(Debug, Clone, Default)]
pub struct CalculatorShell {
    config: DisplayConfig,
}

impl CalculatorShell {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Validate the submitted fields and, if complete, build the report
    pub fn calculate(&self, mode: CalculatorMode, values: &HashMap<String, String>) -> Result<Submission> {
        match form::submit(mode, values)? {
            FormOutcome::Skipped { missing } => {
                info!("{} calculation skipped, missing: {}", mode, missing.join(", "));
                Ok(Submission::Skipped { missing })
            }
            FormOutcome::Ready(input) => {
                let report = Report::build(&input, &self.config);
                info!("{} calculated: {}", mode, report.headline);
                Ok(Submission::Calculated(report))
            }
        }
    }

    pub fn renderer(&self, format: OutputFormat) -> Box<dyn Renderer> {
        match format {
            OutputFormat::Text => Box::new(TextRenderer::new(self.config.chart_width)),
            OutputFormat::Json => Box::new(JsonRenderer { pretty: true }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_calculate_renders() {
        let shell = CalculatorShell::default();
        let submission = shell
            .calculate(
                CalculatorMode::Sip,
                &values(&[("contribution", "1000"), ("rate", "12"), ("years", "1")]),
            )
            .unwrap();

        let report = match submission {
            Submission::Calculated(report) => report,
            other => panic!("expected a report, got {:?}", other),
        };
        let text = shell.renderer(OutputFormat::Text).render(&report).unwrap();
        assert!(text.contains("Total Value: ₹12,809.33"));
    }

    #[test]
    fn test_calculate_skips_blank() {
        let shell = CalculatorShell::default();
        let submission = shell
            .calculate(CalculatorMode::LumpSum, &values(&[("principal", "10000")]))
            .unwrap();
        assert_eq!(submission, Submission::Skipped { missing: vec!["rate", "years"] });
    }

    #[test]
    fn test_calculate_surfaces_conversion_error() {
        let shell = CalculatorShell::default();
        let err = shell
            .calculate(
                CalculatorMode::Swp,
                &values(&[("initial", "1e5"), ("withdrawal", "5k"), ("rate", "8"), ("years", "3")]),
            )
            .unwrap_err();
        assert!(matches!(err, CalculatorError::Conversion { field: "withdrawal", .. }));
    }
}
