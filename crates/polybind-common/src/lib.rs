//! Common types and utilities for the polybind crates.
//!
//! This crate provides the pieces shared by the model and checker layers:
//! - Build-time diagnostics (`Diagnostic`, `DiagnosticCategory`, message codes)
//! - Tracing subscriber setup driven by `POLYBIND_LOG`

// Diagnostics surfaced to the generator driver
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};

// Opt-in tracing output
pub mod tracing_config;
pub use tracing_config::{LogFormat, TracingConfig, init_tracing};

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tracing_config_tests;
