//! # Wound Triage
//!
//! A single-binary demo CLI: give it an image path, get back a wound
//! assessment as one JSON document on stdout. The assessment is a randomized
//! stand-in for model inference — the image is never opened — which keeps the
//! CLI contract, JSON shape, and exit-code semantics exercisable end to end
//! without shipping a model.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`analyze`] | The analyzer — domain enums, the assessment record, randomized generation |
//! | [`output`] | JSON formatting — pure `format_*` functions plus `print_*` stdout wrappers |
//!
//! # Design Decisions
//!
//! ## Injected Randomness
//!
//! [`analyze::analyze`] takes the random generator as a parameter instead of
//! reaching for process-global state. The binary seeds from the OS by default
//! and from `--seed` when reproducibility matters; tests pin a seeded
//! `StdRng` so every field of the record is deterministic.
//!
//! ## One Analyzer, One Driver
//!
//! Earlier revisions shipped two near-identical entry points differing only
//! in error verbosity. There is now a single driver whose failure reporting
//! is parameterized (`--fallback` adds degraded-default fields to the error
//! object), so the two behaviors share one analyzer and one output path.
//!
//! ## JSON-Only stdout
//!
//! Every outcome — success, usage error, analysis failure — is exactly one
//! JSON document on stdout plus an exit code. Callers never have to parse
//! unstructured text or stack traces.

pub mod analyze;
pub mod output;
