//! TOML configuration loading.
//!
//! The config file is optional.  When no path is given the defaults apply;
//! when a path is given (via `--config` or `JUG_CONFIG`) the file must exist
//! and parse.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::config::AppConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads the configuration at `path`, or the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including when it
/// does not exist) and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a value has the
/// wrong type.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::OutputFormat;
    use jug_core::TransferRule;

    /// A per-process scratch path so parallel test binaries do not collide.
    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("jug-cli-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn test_load_config_without_path_returns_defaults() {
        let cfg = load_config(None).expect("defaults");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_config_reads_file() {
        // Arrange
        let path = scratch_path("reads-file");
        std::fs::write(
            &path,
            "[solver]\ntransfer_rule = \"textbook\"\nmax_states = 500\n\n[output]\nformat = \"json\"\n",
        )
        .expect("write scratch config");

        // Act
        let result = load_config(Some(&path));
        let _ = std::fs::remove_file(&path);

        // Assert
        let cfg = result.expect("load");
        assert_eq!(cfg.solver.transfer_rule, TransferRule::Textbook);
        assert_eq!(cfg.solver.max_states, Some(500));
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let path = scratch_path("does-not-exist");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_parse_config_rejects_unknown_rule() {
        let result = parse_config("[solver]\ntransfer_rule = \"sideways\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_config_rejects_wrong_type() {
        let result = parse_config("[solver]\nmax_states = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
