//! Replays a [`Path`] from the empty starting position.
//!
//! Steps only record qualitative levels ("Partially Full"), not volumes.
//! Replaying the actions recovers the concrete [`JugState`] after every step
//! and checks that the recorded levels agree with it.

use thiserror::Error;

use super::jug::{Action, JugState, Path, Puzzle, Step, TransferRule};

/// Reasons a path does not describe a legal sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("path has no steps")]
    EmptyPath,

    /// The first step is not `Start`, or its levels are not both `Empty`.
    #[error("path does not begin with an empty Start step")]
    MissingStart,

    #[error("step {index} is a Start step after the beginning of the path")]
    UnexpectedStart { index: usize },

    /// The levels recorded at `index` disagree with the replayed volumes.
    #[error("step {index} records levels that do not match the replayed state {state}")]
    LevelMismatch { index: usize, state: JugState },
}

/// Replays `path` and returns the state after each step, starting with
/// `(0, 0)` for the `Start` step.
///
/// # Errors
///
/// See [`ReplayError`].
pub fn trace(
    puzzle: &Puzzle,
    rule: TransferRule,
    path: &Path,
) -> Result<Vec<JugState>, ReplayError> {
    let (first, rest) = path.steps().split_first().ok_or(ReplayError::EmptyPath)?;
    if *first != Step::START {
        return Err(ReplayError::MissingStart);
    }

    let mut states = Vec::with_capacity(path.len());
    let mut current = JugState::EMPTY;
    states.push(current);

    for (offset, step) in rest.iter().enumerate() {
        let index = offset + 1;
        if step.action == Action::Start {
            return Err(ReplayError::UnexpectedStart { index });
        }
        current = current.apply(step.action, puzzle, rule);
        if current.step(step.action, puzzle) != *step {
            return Err(ReplayError::LevelMismatch {
                index,
                state: current,
            });
        }
        states.push(current);
    }

    Ok(states)
}
