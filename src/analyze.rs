//! The wound analyzer: a randomized stand-in for model inference.
//!
//! This is demo plumbing, not medicine. [`analyze`] accepts an image path for
//! interface compatibility with a real classifier but never opens it — the
//! "assessment" is a uniform draw over fixed enumerations plus static guidance
//! text. The function is infallible by construction: any string path produces
//! a complete [`AnalysisResult`].
//!
//! ## Derived fields
//!
//! `emergency` and `professional_help_needed` are pure functions of the drawn
//! severity, never set independently:
//!
//! - `emergency` ⇔ severity is severe
//! - `professional_help_needed` ⇔ severity is moderate or severe
//!
//! ## Randomness
//!
//! The generator is injected rather than pulled from ambient global state, so
//! callers control reproducibility: the CLI seeds from the OS by default and
//! from `--seed` when given, and tests pin a `StdRng` to fix every draw.

use rand::Rng;
use serde::Serialize;

/// The closed set of wound classes the demo classifier can report.
///
/// Serialized capitalized (`"Abrasion"`), matching the wire format consumed
/// by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WoundType {
    Abrasion,
    Laceration,
    Puncture,
    Burn,
    Bruise,
    Ulcer,
}

impl WoundType {
    pub const ALL: [WoundType; 6] = [
        WoundType::Abrasion,
        WoundType::Laceration,
        WoundType::Puncture,
        WoundType::Burn,
        WoundType::Bruise,
        WoundType::Ulcer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WoundType::Abrasion => "Abrasion",
            WoundType::Laceration => "Laceration",
            WoundType::Puncture => "Puncture",
            WoundType::Burn => "Burn",
            WoundType::Bruise => "Bruise",
            WoundType::Ulcer => "Ulcer",
        }
    }
}

/// Assessed severity. Serialized lowercase (`"minor"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Minor, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// True only for severe wounds.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Severity::Severe)
    }

    /// True for anything beyond a minor wound.
    pub fn needs_professional_help(&self) -> bool {
        matches!(self, Severity::Moderate | Severity::Severe)
    }
}

/// Guidance text is identical across all invocations.
const FIRST_AID_STEPS: &[&str] = &[
    "Clean the wound with mild soap and water",
    "Apply antibiotic ointment if available",
    "Cover with sterile bandage",
    "Monitor for signs of infection",
    "Change dressing regularly",
];

const IMMEDIATE_ACTIONS: &[&str] = &[
    "Stop any bleeding with direct pressure",
    "Clean the wound area gently",
    "Keep the wound elevated if possible",
];

const RECOMMENDATIONS: &[&str] = &[
    "Keep wound clean and dry",
    "Monitor for redness, swelling, or pus",
    "Seek medical attention if condition worsens",
];

/// One complete assessment record, built fresh per invocation and never
/// mutated afterwards. Serialized with camelCase keys — this is the JSON
/// document the CLI prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub wound_type: WoundType,
    pub severity: Severity,
    pub description: String,
    pub first_aid_steps: &'static [&'static str],
    pub immediate_actions: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub emergency: bool,
    pub professional_help_needed: bool,
    /// Uniform in [0.70, 0.95], rounded to two decimals.
    pub confidence: f64,
}

/// Produce a randomized assessment for the given image path.
///
/// The path is accepted but never dereferenced — existence and format are
/// not checked. Wound type and severity are independent uniform draws;
/// everything else is derived from them or static.
pub fn analyze<R: Rng>(_image_path: &str, rng: &mut R) -> AnalysisResult {
    let wound_type = WoundType::ALL[rng.random_range(0..WoundType::ALL.len())];
    let severity = Severity::ALL[rng.random_range(0..Severity::ALL.len())];

    let description = format!(
        "This appears to be a {} {}. Analysis based on visual characteristics.",
        severity.as_str(),
        wound_type.as_str().to_ascii_lowercase(),
    );

    let confidence = (rng.random_range(0.70..=0.95_f64) * 100.0).round() / 100.0;

    AnalysisResult {
        wound_type,
        severity,
        description,
        first_aid_steps: FIRST_AID_STEPS,
        immediate_actions: IMMEDIATE_ACTIONS,
        recommendations: RECOMMENDATIONS,
        emergency: severity.is_emergency(),
        professional_help_needed: severity.needs_professional_help(),
        confidence,
    }
}
