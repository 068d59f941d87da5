//! Sensitivity sweeps over rate or duration
//!
//! Runs one base input across many rates or durations in parallel. Each
//! point is an independent pure projection, so results come back in the
//! order the parameters were given.

use rayon::prelude::*;
use serde::Serialize;

use crate::calculator::{project, ProjectionInput, ProjectionResult};

/// Which input a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    Rate,
    Years,
}

impl SweepParameter {
    pub fn label(&self) -> &'static str {
        match self {
            SweepParameter::Rate => "Annual Return (%)",
            SweepParameter::Years => "Duration (Years)",
        }
    }
}

/// One point of a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioPoint {
    pub parameter: f64,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

/// Runs a base input across alternative parameters
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 10.0)));
/// for point in runner.run_rates(&[6.0, 8.0, 10.0]) {
///     println!("{}% -> {}", point.parameter, point.result.headline());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionInput,
}

impl ScenarioRunner {
    pub fn new(base: ProjectionInput) -> Self {
        Self { base }
    }

    /// Project the base input unchanged
    pub fn run(&self) -> ProjectionResult {
        project(&self.base)
    }

    /// Vary the annual rate (percent)
    pub fn run_rates(&self, rates: &[f64]) -> Vec<ScenarioPoint> {
        self.sweep(SweepParameter::Rate, rates)
    }

    /// Vary the duration (years)
    pub fn run_durations(&self, years: &[f64]) -> Vec<ScenarioPoint> {
        self.sweep(SweepParameter::Years, years)
    }

    pub fn sweep(&self, parameter: SweepParameter, values: &[f64]) -> Vec<ScenarioPoint> {
        values
            .par_iter()
            .map(|&value| {
                let input = match parameter {
                    SweepParameter::Rate => self.base.with_rate(value),
                    SweepParameter::Years => self.base.with_years(value),
                };
                ScenarioPoint { parameter: value, input, result: project(&input) }
            })
            .collect()
    }

    /// Project unrelated inputs in parallel
    pub fn run_batch(inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(project).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{DepletionInput, GrowthInput, LumpSumInput};

    #[test]
    fn test_rate_sweep_ordered_and_increasing() {
        let runner = ScenarioRunner::new(ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 10.0)));
        let points = runner.run_rates(&[4.0, 6.0, 8.0, 10.0, 12.0]);

        assert_eq!(points.len(), 5);
        let parameters: Vec<f64> = points.iter().map(|p| p.parameter).collect();
        assert_eq!(parameters, vec![4.0, 6.0, 8.0, 10.0, 12.0]);

        // Higher return should result in higher final value
        for pair in points.windows(2) {
            assert!(pair[1].result.headline() > pair[0].result.headline());
        }
        assert_eq!(points[4].result, runner.run());
    }

    #[test]
    fn test_duration_sweep_on_withdrawals() {
        let runner = ScenarioRunner::new(ProjectionInput::Swp(DepletionInput::new(
            100_000.0, 5_000.0, 8.0, 1.0,
        )));
        let points = runner.run_durations(&[1.0, 2.0, 3.0]);

        let withdrawn: Vec<f64> = points
            .iter()
            .map(|p| p.result.as_depletion().unwrap().withdrawn)
            .collect();
        assert_eq!(withdrawn, vec![60_000.0, 120_000.0, 180_000.0]);
        assert!(points[2].result.as_depletion().unwrap().is_depleted());
        assert!(!points[0].result.as_depletion().unwrap().is_depleted());
    }

    #[test]
    fn test_run_batch() {
        let inputs = [
            ProjectionInput::LumpSum(LumpSumInput::new(10_000.0, 10.0, 5.0)),
            ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 1.0)),
        ];
        let results = ScenarioRunner::run_batch(&inputs);
        assert_eq!(results[0].headline(), 16_105.1);
        assert_eq!(results[1].headline(), 12_809.33);
    }
}
