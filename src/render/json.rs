//! JSON renderer for machine consumers

use super::report::Report;
use super::Renderer;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{GrowthInput, ProjectionInput};
    use crate::config::DisplayConfig;

    #[test]
    fn test_json_shape() {
        let input = ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 1.0));
        let report = Report::build(&input, &DisplayConfig::default());
        let json = JsonRenderer::default().render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "sip");
        assert_eq!(value["result"]["kind"], "growth");
        assert_eq!(value["result"]["total"], 12809.33);
        assert_eq!(value["breakdown"]["slices"][1]["label"], "Returns");
        assert_eq!(value["table"]["rows"].as_array().unwrap().len(), 6);
        assert!(value.get("note").is_none());
    }
}
