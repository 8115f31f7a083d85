//! jug-cli library crate.
//!
//! The caller side of the water jug solver.  `jug-core` trusts its inputs and
//! returns either a path or nothing; this crate turns untrusted text into
//! puzzle inputs and turns results into something a user or another program
//! can read.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! stdin / argv
//!         ↕
//! [jug-cli]
//!   ├── domain/           Pure types: JSON request/response, AppConfig
//!   ├── application/      Validation, SolveService, text rendering
//!   └── infrastructure/   TOML config file loading
//!         ↕
//! [jug-core]              Breadth-first solver
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `jug-core` only.
//! - `infrastructure` touches the file system.

/// Domain layer: message and configuration types (no I/O).
pub mod domain;

/// Application layer: validation, the solve service, rendering.
pub mod application;

/// Infrastructure layer: configuration file loading.
pub mod infrastructure;
