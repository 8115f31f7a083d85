//! Domain layer for jug-cli.
//!
//! # What belongs in the domain layer?
//!
//! - The JSON request/response shapes callers exchange with the solver
//! - Configuration structures
//!
//! # What does NOT belong here?
//!
//! - Reading files, stdin, or environment variables
//! - Running the search

pub mod config;
pub mod messages;

pub use config::{AppConfig, OutputConfig, OutputFormat, SolverConfig};
pub use messages::{ApiReply, ResponseBody, SolveRequest};
