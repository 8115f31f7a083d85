//! Application configuration types.
//!
//! [`AppConfig`] mirrors the optional TOML file:
//!
//! ```toml
//! [solver]
//! transfer_rule = "reference"   # or "textbook"
//! max_states = 1000000          # omit for no cap
//!
//! [output]
//! format = "text"               # or "json"
//! log_level = "warn"
//! ```
//!
//! Every field has a serde default, so an empty file (or no file at all)
//! yields [`AppConfig::default()`].  Command-line flags are applied on top by
//! the binary.

use std::fmt;
use std::str::FromStr;

use jug_core::{SolverOptions, TransferRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Options for a `jug_core::Solver` built from this configuration.
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            transfer_rule: self.solver.transfer_rule,
            max_states: self.solver.max_states,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub transfer_rule: TransferRule,
    /// Cap on expanded states.  Absent means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_states: Option<usize>,
}

/// Presentation and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// How `solve` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered, human-readable lines.
    #[default]
    Text,
    /// The JSON response body.
    Json,
}

/// Error returned when a string does not name an [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected 'text' or 'json')")]
pub struct ParseOutputFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseOutputFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_reference_rule_without_cap() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.solver.transfer_rule, TransferRule::Reference);
        assert_eq!(cfg.solver.max_states, None);
    }

    #[test]
    fn test_default_output_is_text_at_warn() {
        let cfg = OutputConfig::default();
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn test_solver_options_follow_config() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.solver.transfer_rule = TransferRule::Textbook;
        cfg.solver.max_states = Some(50);

        // Act
        let options = cfg.solver_options();

        // Assert
        assert_eq!(options.transfer_rule, TransferRule::Textbook);
        assert_eq!(options.max_states, Some(50));
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str("[output]\nformat = \"json\"\n").expect("deserialize");
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.output.log_level, "warn");
        assert_eq!(cfg.solver, SolverConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.solver.max_states = Some(1_000_000);
        cfg.output.format = OutputFormat::Json;

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&text).expect("deserialize");

        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_output_format_parses() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
