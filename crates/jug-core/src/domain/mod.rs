//! Domain entities for the jug puzzle.
//!
//! Nothing in here performs I/O or depends on how a caller presents results.
//! The same types back the solver, the replay checker, and every serialized
//! response.

/// Puzzle inputs, jug states, moves, and recorded paths.
pub mod jug;

/// Replaying a recorded path to recover concrete volumes.
pub mod replay;
