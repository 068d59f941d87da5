//! AWS Lambda handler for the calculator
//!
//! Accepts a mode and the raw form fields as JSON, runs the calculation and
//! returns the rendered report. Supports Lambda Function URLs for direct
//! HTTP access.

use investment_calculator::{
    form, scenario::ScenarioPoint, CalculatorMode, CalculatorShell, DisplayConfig, Report,
    ScenarioRunner, Submission,
};
use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input for one calculation
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// "sip", "swp" or "lump_sum"
    pub mode: String,

    /// Form fields by name; strings, numbers or null
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,

    /// Currency symbol override (default: ₹)
    #[serde(default)]
    pub currency: Option<String>,

    /// Extra annual rates to project the same input at
    #[serde(default)]
    pub sweep_rates: Vec<f64>,

    /// Extra durations (years) to project the same input over
    #[serde(default)]
    pub sweep_years: Vec<f64>,
}

/// Output from the calculation
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// True when a field was blank and nothing was calculated
    pub skipped: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rate_sweep: Vec<ScenarioPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duration_sweep: Vec<ScenarioPoint>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Status to answer with before reading the body, if any
fn method_status(method: &Method) -> Option<u16> {
    if method == Method::OPTIONS {
        Some(200)
    } else if method == Method::POST {
        None
    } else {
        Some(405)
    }
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    match method_status(event.method()) {
        // CORS preflight
        Some(200) => {
            let response = Response::builder()
                .status(200)
                .header("Access-Control-Allow-Origin", "*")
                .header("Access-Control-Allow-Methods", "POST, OPTIONS")
                .header("Access-Control-Allow-Headers", "Content-Type")
                .body(Body::Empty)?;
            return Ok(response);
        }
        Some(status) => {
            return error_response(status, format!("Method {} not allowed", event.method()));
        }
        None => {}
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculateRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let mode: CalculatorMode = match request.mode.parse::<CalculatorMode>() {
        Ok(m) => m,
        Err(e) => return error_response(e.http_status(), e.to_string()),
    };

    let fields = form::fields_from_json(&request.fields);

    let mut config = DisplayConfig::default();
    if let Some(symbol) = request.currency {
        config = config.with_currency(symbol);
    }
    let shell = CalculatorShell::new(config);

    let submission = match shell.calculate(mode, &fields) {
        Ok(s) => s,
        Err(e) => {
            warn!("Rejected {} request: {}", mode, e);
            return error_response(e.http_status(), e.to_string());
        }
    };

    let mut response = CalculateResponse {
        skipped: false,
        missing: Vec::new(),
        report: None,
        rate_sweep: Vec::new(),
        duration_sweep: Vec::new(),
        execution_time_ms: 0,
    };

    match submission {
        Submission::Skipped { missing } => {
            response.skipped = true;
            response.missing = missing;
        }
        Submission::Calculated(report) => {
            let runner = ScenarioRunner::new(report.input);
            response.rate_sweep = runner.run_rates(&request.sweep_rates);
            response.duration_sweep = runner.run_durations(&request.sweep_years);
            response.report = Some(report);
        }
    }

    response.execution_time_ms = start.elapsed().as_millis() as u64;
    info!("{} request served in {} ms", mode, response.execution_time_ms);

    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_status() {
        assert_eq!(method_status(&Method::OPTIONS), Some(200));
        assert_eq!(method_status(&Method::POST), None);
        assert_eq!(method_status(&Method::GET), Some(405));
        assert_eq!(method_status(&Method::PUT), Some(405));
    }

    #[test]
    fn test_error_response_body() {
        let response = error_response(400, "bad rate".to_string()).unwrap();
        assert_eq!(response.status().as_u16(), 400);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        match response.body() {
            Body::Text(text) => assert_eq!(text, r#"{"error":"bad rate"}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_skipped_response_shape() {
        let response = CalculateResponse {
            skipped: true,
            missing: vec!["years"],
            report: None,
            rate_sweep: Vec::new(),
            duration_sweep: Vec::new(),
            execution_time_ms: 0,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["skipped"], true);
        assert_eq!(value["missing"][0], "years");
        assert!(value.get("report").is_none());
    }
}
