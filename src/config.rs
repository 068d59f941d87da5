//! Display configuration for the rendering shell

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// Default currency symbol (Indian rupee)
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Default page title
pub const DEFAULT_TITLE: &str = "Financial Calculator";

/// How reports are labelled and formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for every currency amount
    pub currency_symbol: String,
    pub title: String,
    /// Width of the proportion bars in the text chart
    pub chart_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            chart_width: 40,
        }
    }
}

impl DisplayConfig {
    /// Load from a JSON file; keys left out keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Same config with a different currency symbol
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
