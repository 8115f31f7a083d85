//! Application layer: everything between raw caller input and the solver.
//!
//! - **`validate`**      – Digit-only checks that turn text into volumes.
//! - **`solve_service`** – Runs validated puzzles through a `PuzzleSolver`
//!   and maps the outcome onto a status and body.
//! - **`render`**        – Numbered, human-readable output for the terminal.

pub mod render;
pub mod solve_service;
pub mod validate;

pub use render::render_text;
pub use solve_service::{PuzzleSolver, ServiceError, SolveService};
pub use validate::{validate_args, InputError};
