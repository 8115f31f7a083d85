//! Human-readable rendering of a search result.
//!
//! Steps carry only qualitative levels, so the renderer replays the path to
//! print the concrete volumes next to them.

use jug_core::{trace, Path, Puzzle, ReplayError, TransferRule};

use crate::domain::messages::MSG_NO_SOLUTION;

/// Renders `path` as numbered lines, or the no-solution message.
///
/// ```text
/// Puzzle: x_cap=4 y_cap=3 target=3
///   0. Start             X: Empty (0/4)           Y: Empty (0/3)
///   1. Fill Y            X: Empty (0/4)           Y: Full (3/3)
/// Solved in 1 move.
/// ```
///
/// # Errors
///
/// Returns a [`ReplayError`] if `path` does not replay under `rule`.
pub fn render_text(
    puzzle: &Puzzle,
    rule: TransferRule,
    path: Option<&Path>,
) -> Result<String, ReplayError> {
    let Some(path) = path else {
        return Ok(format!("{MSG_NO_SOLUTION}\n"));
    };

    let states = trace(puzzle, rule, path)?;
    let mut out = format!("Puzzle: {puzzle}\n");

    for (index, (step, state)) in path.iter().zip(&states).enumerate() {
        let x = format!("{} ({}/{})", step.x_state, state.x, puzzle.x_cap);
        let y = format!("{} ({}/{})", step.y_state, state.y, puzzle.y_cap);
        out.push_str(&format!(
            "{index:>3}. {:<17} X: {x:<22} Y: {y}\n",
            step.action.label()
        ));
    }

    let moves = path.transitions();
    let noun = if moves == 1 { "move" } else { "moves" };
    out.push_str(&format!("Solved in {moves} {noun}.\n"));

    Ok(out)
}
