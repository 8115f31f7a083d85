//! Jug puzzle domain entities.
//!
//! A puzzle is two jugs with fixed capacities plus a target volume.  The
//! search walks the space of [`JugState`]s (how much water each jug holds)
//! and records every move as a [`Step`].  A [`Path`] is the ordered list of
//! steps from the empty starting position to a goal.
//!
//! # Wire shape
//!
//! `Step` serializes to exactly the record callers consume:
//!
//! ```json
//! {"x_state":"Full","y_state":"Partially Full","action":"Transfer X to Y"}
//! ```
//!
//! The strings are part of the external contract; renaming a variant here
//! breaks every consumer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Puzzle ────────────────────────────────────────────────────────────────────

/// The fixed inputs of one search: both capacities and the target volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    /// Capacity of jug X.
    pub x_cap: u64,
    /// Capacity of jug Y.
    pub y_cap: u64,
    /// Volume to measure in either jug.
    pub target: u64,
}

impl Puzzle {
    pub fn new(x_cap: u64, y_cap: u64, target: u64) -> Self {
        Self {
            x_cap,
            y_cap,
            target,
        }
    }

    /// Returns `true` if either jug of `state` holds exactly the target volume.
    pub fn is_goal(&self, state: JugState) -> bool {
        state.x == self.target || state.y == self.target
    }

    /// Upper bound on the number of distinct states, `(x_cap+1) * (y_cap+1)`.
    ///
    /// Saturates instead of overflowing for capacities near `u64::MAX`.
    pub fn state_space_bound(&self) -> u128 {
        (u128::from(self.x_cap) + 1).saturating_mul(u128::from(self.y_cap) + 1)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x_cap={} y_cap={} target={}",
            self.x_cap, self.y_cap, self.target
        )
    }
}

// ── Transfer rule ─────────────────────────────────────────────────────────────

/// Selects how a "Transfer Y to X" move is computed.
///
/// The reference search measures the pour against jug Y's capacity and never
/// applies it, which leaves both jugs untouched.  Because the resulting state
/// is always the one just expanded, that move can never appear in a returned
/// path.  [`TransferRule::Reference`] reproduces this so results match the
/// reference search exactly; [`TransferRule::Textbook`] pours into X up to
/// X's own capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferRule {
    #[default]
    Reference,
    Textbook,
}

/// Error returned when a string does not name a [`TransferRule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transfer rule '{0}' (expected 'reference' or 'textbook')")]
pub struct ParseTransferRuleError(pub String);

impl FromStr for TransferRule {
    type Err = ParseTransferRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "textbook" => Ok(Self::Textbook),
            _ => Err(ParseTransferRuleError(s.to_string())),
        }
    }
}

impl fmt::Display for TransferRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::Textbook => "textbook",
        })
    }
}

// ── Actions and fill levels ───────────────────────────────────────────────────

/// A move in the puzzle.  `Start` marks the initial empty position and is not
/// a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Start")]
    Start,
    #[serde(rename = "Fill X")]
    FillX,
    #[serde(rename = "Fill Y")]
    FillY,
    #[serde(rename = "Empty X")]
    EmptyX,
    #[serde(rename = "Empty Y")]
    EmptyY,
    #[serde(rename = "Transfer X to Y")]
    TransferXToY,
    #[serde(rename = "Transfer Y to X")]
    TransferYToX,
}

impl Action {
    /// The six transitions in the order successors are generated.
    pub const TRANSITIONS: [Action; 6] = [
        Action::FillX,
        Action::FillY,
        Action::EmptyX,
        Action::EmptyY,
        Action::TransferXToY,
        Action::TransferYToX,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::FillX => "Fill X",
            Self::FillY => "Fill Y",
            Self::EmptyX => "Empty X",
            Self::EmptyY => "Empty Y",
            Self::TransferXToY => "Transfer X to Y",
            Self::TransferYToX => "Transfer Y to X",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative description of how much water a jug holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillLevel {
    #[serde(rename = "Empty")]
    Empty,
    #[serde(rename = "Full")]
    Full,
    #[serde(rename = "Partially Full")]
    PartiallyFull,
}

impl FillLevel {
    /// Classifies `amount` against `capacity`.
    ///
    /// `Empty` is checked first, so a zero-capacity jug reads as `Empty`.
    pub fn of(amount: u64, capacity: u64) -> Self {
        if amount == 0 {
            Self::Empty
        } else if amount == capacity {
            Self::Full
        } else {
            Self::PartiallyFull
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Full => "Full",
            Self::PartiallyFull => "Partially Full",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── JugState ──────────────────────────────────────────────────────────────────

/// Volumes currently held by jug X and jug Y.
///
/// This pair is the whole identity of a search state: two nodes reached by
/// different paths but holding the same volumes are the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JugState {
    pub x: u64,
    pub y: u64,
}

impl JugState {
    /// Both jugs empty.
    pub const EMPTY: JugState = JugState { x: 0, y: 0 };

    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// Amounts stay within `0..=cap` for any state that already respects
    /// the puzzle's capacities.  `Action::Start` leaves the state unchanged.
    pub fn apply(self, action: Action, puzzle: &Puzzle, rule: TransferRule) -> JugState {
        match action {
            Action::Start => self,
            Action::FillX => JugState::new(puzzle.x_cap, self.y),
            Action::FillY => JugState::new(self.x, puzzle.y_cap),
            Action::EmptyX => JugState::new(0, self.y),
            Action::EmptyY => JugState::new(self.x, 0),
            Action::TransferXToY => {
                let amount = self.x.min(puzzle.y_cap.saturating_sub(self.y));
                JugState::new(self.x - amount, self.y + amount)
            }
            Action::TransferYToX => match rule {
                // The pour is measured against y_cap and applied to neither jug.
                TransferRule::Reference => self,
                TransferRule::Textbook => {
                    let amount = self.y.min(puzzle.x_cap.saturating_sub(self.x));
                    JugState::new(self.x + amount, self.y - amount)
                }
            },
        }
    }

    /// Builds the [`Step`] that records arriving at this state via `action`.
    pub fn step(self, action: Action, puzzle: &Puzzle) -> Step {
        Step {
            x_state: FillLevel::of(self.x, puzzle.x_cap),
            y_state: FillLevel::of(self.y, puzzle.y_cap),
            action,
        }
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Step and Path ─────────────────────────────────────────────────────────────

/// One recorded move: the action taken and both jugs' levels afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub x_state: FillLevel,
    pub y_state: FillLevel,
    pub action: Action,
}

impl Step {
    /// The synthetic first step of every path: both jugs empty.
    pub const START: Step = Step {
        x_state: FillLevel::Empty,
        y_state: FillLevel::Empty,
        action: Action::Start,
    };
}

/// Ordered steps from the starting position to a goal.
///
/// Serializes as a bare JSON array of [`Step`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// A path holding only the [`Step::START`] step.
    pub fn start() -> Self {
        Self {
            steps: vec![Step::START],
        }
    }

    /// Wraps an existing step list without checking it.  Use
    /// [`crate::domain::replay::trace`] to validate foreign paths.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of moves, not counting the `Start` step.
    pub fn transitions(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
