//! Free-text form handling for the calculator front ends
//!
//! A submission is skipped when any field is missing or blank. Once every
//! field is present, each one must parse as a finite, non-negative number or
//! the submission fails with a conversion or validation error.

use log::warn;
use serde_json::Value;
use std::collections::HashMap;

use crate::calculator::{
    CalculatorMode, DepletionInput, GrowthInput, LumpSumInput, ProjectionInput,
};
use crate::error::{CalculatorError, Result};

/// An input field on a calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Key used by the CLI flags and the JSON request body
    pub name: &'static str,
    /// Label shown to the user
    pub label: &'static str,
}

const RATE: FormField = FormField { name: "rate", label: "Expected Annual Return (%)" };

const SIP_FIELDS: [FormField; 3] = [
    FormField { name: "contribution", label: "Monthly Investment" },
    RATE,
    FormField { name: "years", label: "Investment Duration (Years)" },
];

const SWP_FIELDS: [FormField; 4] = [
    FormField { name: "initial", label: "Initial Investment" },
    FormField { name: "withdrawal", label: "Monthly Withdrawal" },
    RATE,
    FormField { name: "years", label: "Withdrawal Duration (Years)" },
];

const LUMP_SUM_FIELDS: [FormField; 3] = [
    FormField { name: "principal", label: "Principal Amount" },
    RATE,
    FormField { name: "years", label: "Investment Duration (Years)" },
];

/// Fields shown for a mode, in display order
pub fn fields(mode: CalculatorMode) -> &'static [FormField] {
    match mode {
        CalculatorMode::Sip => &SIP_FIELDS,
        CalculatorMode::Swp => &SWP_FIELDS,
        CalculatorMode::LumpSum => &LUMP_SUM_FIELDS,
    }
}

/// What a submitted form turned into
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// All fields parsed
    Ready(ProjectionInput),
    /// At least one field was blank; nothing is calculated
    Skipped { missing: Vec<&'static str> },
}

/// Parse one field's text into a non-negative number
pub fn parse_field(field: &FormField, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| CalculatorError::Conversion {
            field: field.name,
            value: trimmed.to_string(),
        })?;

    if !value.is_finite() {
        return Err(CalculatorError::Conversion {
            field: field.name,
            value: trimmed.to_string(),
        });
    }

    if value < 0.0 {
        return Err(CalculatorError::Validation {
            field: field.name,
            message: format!("{} must not be negative (got {})", field.label, value),
        });
    }

    Ok(value)
}

/// Field text from a JSON value: null is a blank field, strings are taken as
/// typed and anything else by its JSON text (so `true` fails conversion)
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Form values from a JSON object of field name to value
pub fn fields_from_json(fields: &HashMap<String, Value>) -> HashMap<String, String> {
    fields
        .iter()
        .filter_map(|(name, value)| field_text(value).map(|text| (name.clone(), text)))
        .collect()
}

fn is_blank(text: Option<&String>) -> bool {
    text.map(|t| t.trim().is_empty()).unwrap_or(true)
}

/// Turn submitted field text into a projection input
///
/// Unknown keys in `values` are ignored.
pub fn submit(mode: CalculatorMode, values: &HashMap<String, String>) -> Result<FormOutcome> {
    let form = fields(mode);

    let missing: Vec<&'static str> = form
        .iter()
        .filter(|f| is_blank(values.get(f.name)))
        .map(|f| f.name)
        .collect();

    if !missing.is_empty() {
        return Ok(FormOutcome::Skipped { missing });
    }

    let parsed = form
        .iter()
        .map(|f| {
            let text = values.get(f.name).map(String::as_str).unwrap_or_default();
            parse_field(f, text).map_err(|e| {
                warn!("Rejected {} form: {}", mode, e);
                e
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let input = match mode {
        CalculatorMode::Sip => {
            ProjectionInput::Sip(GrowthInput::new(parsed[0], parsed[1], parsed[2]))
        }
        CalculatorMode::Swp => {
            ProjectionInput::Swp(DepletionInput::new(parsed[0], parsed[1], parsed[2], parsed[3]))
        }
        CalculatorMode::LumpSum => {
            ProjectionInput::LumpSum(LumpSumInput::new(parsed[0], parsed[1], parsed[2]))
        }
    };

    Ok(FormOutcome::Ready(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_complete_sip_form() {
        let outcome = submit(
            CalculatorMode::Sip,
            &values(&[("contribution", "1,000"), ("rate", " 12 "), ("years", "1")]),
        )
        .unwrap();

        assert_eq!(
            outcome,
            FormOutcome::Ready(ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 1.0)))
        );
    }

    #[test]
    fn test_blank_fields_skip() {
        let outcome = submit(
            CalculatorMode::Swp,
            &values(&[("initial", "100000"), ("withdrawal", "  "), ("rate", "8")]),
        )
        .unwrap();

        assert_eq!(outcome, FormOutcome::Skipped { missing: vec!["withdrawal", "years"] });
    }

    #[test]
    fn test_blank_wins_over_bad_text() {
        // Skipping happens before any conversion is attempted
        let outcome = submit(
            CalculatorMode::LumpSum,
            &values(&[("principal", "ten thousand"), ("rate", "")]),
        )
        .unwrap();

        assert!(matches!(outcome, FormOutcome::Skipped { .. }));
    }

    #[test]
    fn test_non_numeric_is_conversion_error() {
        let err = submit(
            CalculatorMode::LumpSum,
            &values(&[("principal", "10000"), ("rate", "ten"), ("years", "5")]),
        )
        .unwrap_err();

        match err {
            CalculatorError::Conversion { field, value } => {
                assert_eq!(field, "rate");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_negative_is_validation_error() {
        let err = submit(
            CalculatorMode::Sip,
            &values(&[("contribution", "-5"), ("rate", "12"), ("years", "1")]),
        )
        .unwrap_err();

        assert!(matches!(err, CalculatorError::Validation { field: "contribution", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            parse_field(&RATE, "inf"),
            Err(CalculatorError::Conversion { .. })
        ));
        assert!(matches!(
            parse_field(&RATE, "NaN"),
            Err(CalculatorError::Conversion { .. })
        ));
        assert_eq!(parse_field(&RATE, "7.25").unwrap(), 7.25);
    }

    #[test]
    fn test_json_field_text() {
        assert_eq!(field_text(&Value::Null), None);
        assert_eq!(field_text(&serde_json::json!("1,000")), Some("1,000".to_string()));
        assert_eq!(field_text(&serde_json::json!(12.5)), Some("12.5".to_string()));
        assert_eq!(field_text(&serde_json::json!(true)), Some("true".to_string()));
    }

    #[test]
    fn test_json_fields_submit() {
        let json: HashMap<String, Value> = serde_json::from_str(
            r#"{"contribution": 1000, "rate": "12", "years": 1}"#,
        )
        .unwrap();
        let outcome = submit(CalculatorMode::Sip, &fields_from_json(&json)).unwrap();
        assert_eq!(
            outcome,
            FormOutcome::Ready(ProjectionInput::Sip(GrowthInput::new(1000.0, 12.0, 1.0)))
        );

        // null is blank, so the form is skipped
        let json: HashMap<String, Value> = serde_json::from_str(
            r#"{"principal": 10000, "rate": null, "years": 5}"#,
        )
        .unwrap();
        let outcome = submit(CalculatorMode::LumpSum, &fields_from_json(&json)).unwrap();
        assert_eq!(outcome, FormOutcome::Skipped { missing: vec!["rate"] });

        // booleans are not numbers
        let json: HashMap<String, Value> = serde_json::from_str(
            r#"{"principal": true, "rate": 8, "years": 5}"#,
        )
        .unwrap();
        let err = submit(CalculatorMode::LumpSum, &fields_from_json(&json)).unwrap_err();
        assert!(matches!(err, CalculatorError::Conversion { field: "principal", .. }));
    }

    #[test]
    fn test_field_order_per_mode() {
        let names: Vec<_> = fields(CalculatorMode::Swp).iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["initial", "withdrawal", "rate", "years"]);
        assert_eq!(fields(CalculatorMode::LumpSum).len(), 3);
    }
}
