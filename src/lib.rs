//! Investment Calculator - SIP, SWP and lump-sum projections
//!
//! This library provides:
//! - The three projection functions (periodic growth, periodic depletion, single compounding)
//! - Month-by-month schedules for the periodic plans, with CSV export
//! - Free-text form validation shared by the front ends
//! - Report building and text/JSON rendering
//! - Parallel rate and duration sweeps

pub mod error;
pub mod config;
pub mod calculator;
pub mod form;
pub mod render;
pub mod scenario;
pub mod shell;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use config::DisplayConfig;
pub use calculator::{
    CalculatorMode, DepletionInput, DepletionResult, GrowthInput, GrowthResult, LumpSumInput,
    ProjectionInput, ProjectionResult, project,
};
pub use render::{Renderer, Report};
pub use scenario::ScenarioRunner;
pub use shell::{CalculatorShell, OutputFormat, Submission};
