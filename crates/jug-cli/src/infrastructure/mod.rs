//! Infrastructure layer: the file system.
//!
//! Only configuration loading lives here.  Reading stdin and writing stdout
//! stay in the binary entry point.

pub mod config_store;

pub use config_store::{load_config, ConfigError};
