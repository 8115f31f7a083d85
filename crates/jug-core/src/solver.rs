//! Breadth-first search over jug states.
//!
//! # How the search works (for beginners)
//!
//! Every position of the puzzle is a [`JugState`]: how much water is in X and
//! in Y.  From any state, six moves lead to neighbouring states (fill, empty,
//! or pour, for each jug).  Breadth-first search visits states in order of
//! how many moves it takes to reach them, so the first state found that holds
//! the target volume is reached by a shortest possible sequence of moves.
//!
//! ```text
//!              (0,0)
//!       Fill X /    \ Fill Y
//!          (4,0)    (0,3)          distance 1
//!           / \      / \
//!        ...   ...  ...  ...       distance 2
//! ```
//!
//! # Lazy deduplication
//!
//! Successors are queued without checking whether their state was seen
//! before.  When a node is dequeued, its state is looked up in the visited
//! set and the node is dropped if the state was already expanded.  The
//! visited set stores only the `(x, y)` pair, never the path, so each state
//! is expanded at most once and the search always terminates.
//!
//! # Path storage
//!
//! Each queued node keeps only its own [`Step`] and the arena index of the
//! node it was generated from.  When a goal is dequeued the parent links are
//! walked back to the root to rebuild the full [`Path`].

use std::collections::{HashSet, VecDeque};

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::domain::jug::{Action, JugState, Path, Puzzle, Step, TransferRule};

/// Upper bound on the visited-set allocation made before the search starts.
const INITIAL_VISITED_CAPACITY: u128 = 1024;

/// Errors returned by a configured [`Solver`].
///
/// Finding no solution is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The search needed to expand more states than the configured cap.
    #[error("search exceeded the limit of {limit} expanded states")]
    StateLimitExceeded { limit: usize },
}

/// Knobs for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverOptions {
    /// How "Transfer Y to X" is computed.
    pub transfer_rule: TransferRule,
    /// Maximum number of distinct states to expand, that is, to generate
    /// successors from.  Goal states are never expanded.  `None` means
    /// unbounded.
    pub max_states: Option<usize>,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Shortest path to a goal, or `None` if no goal is reachable.
    pub path: Option<Path>,
    /// Number of distinct states expanded, including the goal state.
    pub states_visited: usize,
}

/// A breadth-first jug puzzle solver.
///
/// The solver holds only its options; all search state lives on the stack of
/// a single call, so one `Solver` can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solver {
    options: SolverOptions,
}

/// One entry in the search arena.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    state: JugState,
    step: Step,
    parent: Option<usize>,
}

impl Solver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Finds a shortest path for `puzzle`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::StateLimitExceeded`] if `max_states` is set and
    /// the search runs past it.
    pub fn solve(&self, puzzle: &Puzzle) -> Result<Option<Path>, SolveError> {
        self.search(puzzle).map(|outcome| outcome.path)
    }

    /// Runs the search and reports how many states were expanded.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::StateLimitExceeded`] if `max_states` is set and
    /// the search runs past it.
    pub fn search(&self, puzzle: &Puzzle) -> Result<SearchOutcome, SolveError> {
        let rule = self.options.transfer_rule;
        let capacity = puzzle.state_space_bound().min(INITIAL_VISITED_CAPACITY) as usize;

        let mut visited: HashSet<JugState> = HashSet::with_capacity(capacity);
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut expanded = 0usize;

        arena.push(SearchNode {
            state: JugState::EMPTY,
            step: Step::START,
            parent: None,
        });
        queue.push_back(0);

        while let Some(index) = queue.pop_front() {
            let node = arena[index];

            // Lazy deletion: a state may have been queued several times.
            if visited.contains(&node.state) {
                continue;
            }
            visited.insert(node.state);

            if puzzle.is_goal(node.state) {
                let path = reconstruct_path(&arena, index);
                debug!(
                    %puzzle,
                    states_visited = visited.len(),
                    moves = path.transitions(),
                    "solution found"
                );
                return Ok(SearchOutcome {
                    path: Some(path),
                    states_visited: visited.len(),
                });
            }

            // Only states that generate successors count against the cap.
            if let Some(limit) = self.options.max_states {
                if expanded >= limit {
                    warn!(%puzzle, limit, "search stopped at the state limit");
                    return Err(SolveError::StateLimitExceeded { limit });
                }
            }
            expanded += 1;

            trace!(state = %node.state, "expanding");
            for action in Action::TRANSITIONS {
                let next = node.state.apply(action, puzzle, rule);
                arena.push(SearchNode {
                    state: next,
                    step: next.step(action, puzzle),
                    parent: Some(index),
                });
                queue.push_back(arena.len() - 1);
            }
        }

        debug!(%puzzle, states_visited = visited.len(), "no solution");
        Ok(SearchOutcome {
            path: None,
            states_visited: visited.len(),
        })
    }
}

/// Walks parent links from `goal` back to the root and returns the steps in
/// forward order.
fn reconstruct_path(arena: &[SearchNode], goal: usize) -> Path {
    let mut steps = Vec::new();
    let mut current = Some(goal);

    while let Some(index) = current {
        let node = &arena[index];
        steps.push(node.step);
        current = node.parent;
    }

    steps.reverse();
    Path::from_steps(steps)
}

/// Finds a shortest action path that leaves `target` in either jug.
///
/// Uses the reference transfer rule and no state cap.  Returns `None` when
/// the target cannot be measured.
///
/// # Example
///
/// ```rust
/// use jug_core::{solve, Action};
///
/// let path = solve(4, 3, 2).expect("4 and 3 can measure 2");
/// assert_eq!(path.steps()[0].action, Action::Start);
///
/// assert!(solve(5, 7, 9).is_none());
/// ```
pub fn solve(x_cap: u64, y_cap: u64, target: u64) -> Option<Path> {
    let puzzle = Puzzle::new(x_cap, y_cap, target);
    // An uncapped solver has no failure mode.
    Solver::default().solve(&puzzle).ok().flatten()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
