//! JSON output formatting for the CLI.
//!
//! Every byte the program can emit goes through a `format_*` function that
//! returns the JSON text, with a thin `print_*` wrapper doing the actual
//! stdout write. Format functions are pure — no I/O, no side effects — so
//! unit tests cover the full output surface without spawning a process.
//!
//! The contract with callers: exactly one JSON document per invocation, on
//! stdout, in every outcome. Success prints the assessment record; failures
//! print an object with at least an `error` key, so a calling process parses
//! either outcome uniformly as JSON.
//!
//! ## Failure verbosity
//!
//! [`format_failure`] takes a [`FailureStyle`]:
//!
//! - `Minimal` — `{"error": "Analysis failed: <cause>"}`
//! - `Fallback` — the same, plus degraded defaults (`woundType: "Unknown"`,
//!   `severity: "moderate"`, one retry hint in `firstAidSteps`) so a consumer
//!   that renders the record fields still has something to show.

use crate::analyze::AnalysisResult;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// How much an error object carries beyond the `error` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStyle {
    Minimal,
    Fallback,
}

/// Serialize a successful assessment to a compact JSON document.
pub fn format_result(result: &AnalysisResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string(result)?)
}

/// The usage error printed when the argument count is wrong.
pub fn format_usage_error() -> String {
    json!({ "error": "Image path required" }).to_string()
}

/// An analysis-path failure as a structured error object.
pub fn format_failure(cause: &str, style: FailureStyle) -> String {
    let message = format!("Analysis failed: {cause}");
    match style {
        FailureStyle::Minimal => json!({ "error": message }).to_string(),
        FailureStyle::Fallback => json!({
            "error": message,
            "woundType": "Unknown",
            "severity": "moderate",
            "firstAidSteps": ["Please try again with a clearer image"],
        })
        .to_string(),
    }
}

pub fn print_result(json: &str) {
    println!("{json}");
}

pub fn print_usage_error() {
    println!("{}", format_usage_error());
}

pub fn print_failure(cause: &str, style: FailureStyle) {
    println!("{}", format_failure(cause, style));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    #[test]
    fn result_document_has_all_nine_fields_with_correct_types() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = analyze("photo.jpg", &mut rng);
        let doc: Value = serde_json::from_str(&format_result(&result).unwrap()).unwrap();

        assert!(doc["woundType"].is_string());
        assert!(doc["severity"].is_string());
        assert!(doc["description"].is_string());
        assert!(doc["firstAidSteps"].is_array());
        assert!(doc["immediateActions"].is_array());
        assert!(doc["recommendations"].is_array());
        assert!(doc["emergency"].is_boolean());
        assert!(doc["professionalHelpNeeded"].is_boolean());
        assert!(doc["confidence"].is_number());
        assert_eq!(doc.as_object().unwrap().len(), 9);
    }

    #[test]
    fn result_enums_stay_within_their_closed_sets() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = analyze("photo.jpg", &mut rng);
            let doc: Value = serde_json::from_str(&format_result(&result).unwrap()).unwrap();

            let wound = doc["woundType"].as_str().unwrap();
            assert!(
                ["Abrasion", "Laceration", "Puncture", "Burn", "Bruise", "Ulcer"]
                    .contains(&wound)
            );
            let severity = doc["severity"].as_str().unwrap();
            assert!(["minor", "moderate", "severe"].contains(&severity));
        }
    }

    #[test]
    fn usage_error_is_the_exact_documented_object() {
        assert_eq!(format_usage_error(), r#"{"error":"Image path required"}"#);
    }

    #[test]
    fn minimal_failure_carries_only_the_error_key() {
        let doc: Value =
            serde_json::from_str(&format_failure("boom", FailureStyle::Minimal)).unwrap();
        assert_eq!(doc["error"], "Analysis failed: boom");
        assert_eq!(doc.as_object().unwrap().len(), 1);
    }

    #[test]
    fn fallback_failure_carries_degraded_defaults() {
        let doc: Value =
            serde_json::from_str(&format_failure("boom", FailureStyle::Fallback)).unwrap();
        assert_eq!(doc["error"], "Analysis failed: boom");
        assert_eq!(doc["woundType"], "Unknown");
        assert_eq!(doc["severity"], "moderate");
        assert_eq!(
            doc["firstAidSteps"],
            json!(["Please try again with a clearer image"])
        );
    }
}
