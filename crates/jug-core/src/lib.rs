//! # jug-core
//!
//! Breadth-first solver for the two-jug measuring puzzle.
//!
//! Given the capacities of jug X and jug Y and a target volume, the solver
//! finds a shortest sequence of fill / empty / pour moves that leaves the
//! target volume in either jug, or reports that no such sequence exists.
//!
//! The crate has no I/O and no global state.  Every search allocates its own
//! queue and visited set and drops them on return, so it is safe to call from
//! any number of threads at once.
//!
//! # Layout
//!
//! - **`domain`** – Puzzle entities ([`Puzzle`], [`JugState`], [`Step`],
//!   [`Path`]) and path replay.
//! - **`solver`** – The breadth-first search ([`solve`], [`Solver`]).

pub mod domain;
pub mod solver;

pub use domain::jug::{
    Action, FillLevel, JugState, ParseTransferRuleError, Path, Puzzle, Step, TransferRule,
};
pub use domain::replay::{trace, ReplayError};
pub use solver::{solve, SearchOutcome, SolveError, Solver, SolverOptions};
