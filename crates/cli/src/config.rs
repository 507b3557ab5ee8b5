//! Environment-driven configuration for the `stockroom` binary.

use stockroom_observability::{LogFormat, TracingConfig};

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

/// Menu output owns the terminal; only warnings are logged unless
/// `RUST_LOG` says otherwise.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub tracing: TracingConfig,
    /// Problems found while reading the environment. Reported once tracing
    /// is up, since it is not initialized while the config is being read.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tracing: TracingConfig {
                default_filter: DEFAULT_FILTER.to_string(),
                format: LogFormat::Pretty,
            },
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unknown values fall back to the defaults and leave a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.tracing.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; falling back to pretty")),
            }
        }

        config
    }
}
