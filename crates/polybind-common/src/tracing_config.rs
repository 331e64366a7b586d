//! Opt-in tracing output for model building and legality checks.
//!
//! ```bash
//! POLYBIND_LOG=debug POLYBIND_LOG_FORMAT=tree my-generator
//! POLYBIND_LOG="polybind_model=trace,polybind_checker=debug" my-generator
//! ```
//!
//! `POLYBIND_LOG` takes an `EnvFilter` directive and falls back to `RUST_LOG`.
//! With neither set, no subscriber is installed. `POLYBIND_LOG_FORMAT` picks
//! `text` (default), `tree` or `json`. Output always goes to stderr.

use tracing::Subscriber;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const FILTER_VAR: &str = "POLYBIND_LOG";
pub const FORMAT_VAR: &str = "POLYBIND_LOG_FORMAT";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive; `None` disables tracing.
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: lookup(FILTER_VAR).or_else(|| lookup(FALLBACK_FILTER_VAR)),
            format: lookup(FORMAT_VAR).map_or(LogFormat::Text, |v| LogFormat::parse(&v)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.filter.is_some()
    }

    /// The configured subscriber, or `None` when tracing is disabled.
    pub fn subscriber(&self) -> Option<Box<dyn Subscriber + Send + Sync>> {
        let directives = self.filter.as_deref()?;
        let filter = EnvFilter::builder().parse_lossy(directives);
        let registry = Registry::default().with(filter);

        let subscriber: Box<dyn Subscriber + Send + Sync> = match self.format {
            LogFormat::Tree => Box::new(
                registry.with(
                    tracing_tree::HierarchicalLayer::default()
                        .with_indent_amount(2)
                        .with_indent_lines(true)
                        .with_targets(true),
                ),
            ),
            LogFormat::Json => {
                Box::new(registry.with(fmt::layer().json().with_writer(std::io::stderr)))
            }
            LogFormat::Text => Box::new(registry.with(fmt::layer().with_writer(std::io::stderr))),
        };
        Some(subscriber)
    }

    /// Install the subscriber globally.
    ///
    /// `Ok(false)` when tracing is disabled; an error when a global subscriber
    /// is already set.
    pub fn init(&self) -> Result<bool, TryInitError> {
        let Some(subscriber) = self.subscriber() else {
            return Ok(false);
        };
        subscriber.try_init()?;
        Ok(true)
    }
}

/// Install the subscriber described by the environment.
pub fn init_tracing() -> Result<bool, TryInitError> {
    TracingConfig::from_env().init()
}
