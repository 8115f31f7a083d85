//! SolveService: validates caller input, runs the solver, shapes the reply.
//!
//! The service is the only place that knows both sides of the contract.  It
//! turns raw text or JSON into a [`Puzzle`], hands it to a [`PuzzleSolver`],
//! and maps the three possible outcomes (a path, no path, the state cap) onto
//! an [`ApiReply`].
//!
//! # Request handling
//!
//! ```text
//! JSON text ──parse──▶ SolveRequest ──fields present?──▶ validate ──▶ solve
//!    │ malformed or         │ no                          │ no          │
//!    │ not an object        │                             │             │
//!    ▼                      ▼                             ▼             ▼
//! Invalid input    Missing required parameters      Invalid input   path / No solution / limit
//! ```

use jug_core::{Path, Puzzle, SolveError, Solver};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::validate::{validate_args, value_text, InputError};
use crate::domain::messages::{ApiReply, SolveRequest};

/// Something that can solve a puzzle.
///
/// `jug_core::Solver` is the production implementation; tests substitute a
/// mock to drive each reply branch without running a search.
#[cfg_attr(test, mockall::automock)]
pub trait PuzzleSolver {
    /// # Errors
    ///
    /// Returns [`SolveError`] if the search was cut short.
    fn solve(&self, puzzle: &Puzzle) -> Result<Option<Path>, SolveError>;
}

impl PuzzleSolver for Solver {
    fn solve(&self, puzzle: &Puzzle) -> Result<Option<Path>, SolveError> {
        Solver::solve(self, puzzle)
    }
}

/// Failure of a command-line solve.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Validates input and delegates to a [`PuzzleSolver`].
#[derive(Debug, Clone)]
pub struct SolveService<S> {
    solver: S,
}

impl<S: PuzzleSolver> SolveService<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// Solves from three command-line strings.
    ///
    /// Returns the validated puzzle alongside the result so callers can render
    /// it.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Input`] if any argument is not a non-negative integer,
    /// [`ServiceError::Solve`] if the solver stopped at its state cap.
    pub fn solve_args(
        &self,
        x: &str,
        y: &str,
        z: &str,
    ) -> Result<(Puzzle, Option<Path>), ServiceError> {
        let (x_cap, y_cap, target) = validate_args(x, y, z)?;
        let puzzle = Puzzle::new(x_cap, y_cap, target);
        let path = self.solver.solve(&puzzle)?;
        Ok((puzzle, path))
    }

    /// Handles a raw JSON request body.
    ///
    /// A body that is not valid JSON, or not an object, is `Invalid input`.
    pub fn handle_json(&self, body: &str) -> ApiReply {
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                warn!("rejecting malformed request body: {e}");
                return ApiReply::invalid_input();
            }
        };

        match SolveRequest::from_json(value) {
            Some(request) => self.handle_request(&request),
            None => {
                warn!("rejecting request body that is not a JSON object");
                ApiReply::invalid_input()
            }
        }
    }

    /// Handles a decoded request.
    pub fn handle_request(&self, request: &SolveRequest) -> ApiReply {
        let (Some(x), Some(y), Some(z)) = (&request.x, &request.y, &request.z) else {
            warn!("rejecting request with missing parameters");
            return ApiReply::missing_parameters();
        };

        let (x_cap, y_cap, target) =
            match validate_args(&value_text(x), &value_text(y), &value_text(z)) {
                Ok(values) => values,
                Err(e) => {
                    warn!("rejecting request: {e}");
                    return ApiReply::invalid_input();
                }
            };

        let puzzle = Puzzle::new(x_cap, y_cap, target);
        info!(%puzzle, "solving");

        match self.solver.solve(&puzzle) {
            Ok(Some(path)) => {
                debug!(moves = path.transitions(), "solution found");
                ApiReply::solution(path)
            }
            Ok(None) => ApiReply::no_solution(),
            Err(e) => {
                warn!(%puzzle, "search aborted: {e}");
                ApiReply::limit_exceeded()
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages::{
        ResponseBody, MSG_INVALID_INPUT, MSG_LIMIT_EXCEEDED, MSG_MISSING_PARAMETERS,
        MSG_NO_SOLUTION, STATUS_BAD_REQUEST, STATUS_OK, STATUS_UNPROCESSABLE,
    };
    use mockall::predicate::eq;

    fn message(reply: &ApiReply) -> &str {
        match &reply.body {
            ResponseBody::Message { message } => message,
            ResponseBody::Solution(_) => panic!("expected a message body"),
        }
    }

    /// A mock that must not be called.
    fn untouched_solver() -> MockPuzzleSolver {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve().never();
        mock
    }

    // ── handle_json ───────────────────────────────────────────────────────────

    #[test]
    fn test_handle_json_with_solution_returns_steps() {
        // Arrange
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve()
            .with(eq(Puzzle::new(3, 4, 2)))
            .times(1)
            .returning(|_| Ok(Some(Path::start())));
        let service = SolveService::new(mock);

        // Act
        let reply = service.handle_json(r#"{"x": 3, "y": 4, "z": 2}"#);

        // Assert
        assert_eq!(reply.status, STATUS_OK);
        assert_eq!(reply.body, ResponseBody::Solution(Path::start()));
    }

    #[test]
    fn test_handle_json_with_no_solution() {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve().times(1).returning(|_| Ok(None));
        let service = SolveService::new(mock);

        let reply = service.handle_json(r#"{"x": 3, "y": 4, "z": 2}"#);

        assert_eq!(reply.status, STATUS_OK);
        assert_eq!(message(&reply), MSG_NO_SOLUTION);
    }

    #[test]
    fn test_handle_json_accepts_digit_strings() {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve()
            .with(eq(Puzzle::new(3, 4, 2)))
            .times(1)
            .returning(|_| Ok(None));
        let service = SolveService::new(mock);

        let reply = service.handle_json(r#"{"x": "3", "y": "4", "z": "2"}"#);

        assert!(reply.is_success());
    }

    #[test]
    fn test_handle_json_missing_parameter() {
        let service = SolveService::new(untouched_solver());

        let reply = service.handle_json(r#"{"x": 3, "y": 4}"#);

        assert_eq!(reply.status, STATUS_BAD_REQUEST);
        assert_eq!(message(&reply), MSG_MISSING_PARAMETERS);
    }

    #[test]
    fn test_handle_json_null_parameter_counts_as_missing() {
        let service = SolveService::new(untouched_solver());
        let reply = service.handle_json(r#"{"x": 3, "y": null, "z": 2}"#);
        assert_eq!(message(&reply), MSG_MISSING_PARAMETERS);
    }

    #[test]
    fn test_handle_json_invalid_values() {
        let service = SolveService::new(untouched_solver());

        for body in [
            r#"{"x": "invalid", "y": 4, "z": 2}"#,
            r#"{"x": -3, "y": 4, "z": 2}"#,
            r#"{"x": 3.5, "y": 4, "z": 2}"#,
            r#"{"x": 3, "y": true, "z": 2}"#,
            r#"{"x": 3, "y": 4, "z": [2]}"#,
        ] {
            let reply = service.handle_json(body);
            assert_eq!(reply.status, STATUS_BAD_REQUEST, "{body}");
            assert_eq!(message(&reply), MSG_INVALID_INPUT, "{body}");
        }
    }

    #[test]
    fn test_handle_json_malformed_body() {
        let service = SolveService::new(untouched_solver());

        for body in ["", "not json", "[3, 4, 2]", "42"] {
            let reply = service.handle_json(body);
            assert_eq!(message(&reply), MSG_INVALID_INPUT, "{body:?}");
        }
    }

    #[test]
    fn test_handle_json_array_body_is_not_read_positionally() {
        // Arrange: an array would otherwise fill x, y, z in order.
        let service = SolveService::new(untouched_solver());

        // Act
        let full = service.handle_json("[4, 3, 2]");
        let short = service.handle_json("[4]");

        // Assert
        for reply in [full, short] {
            assert_eq!(reply.status, STATUS_BAD_REQUEST);
            assert_eq!(message(&reply), MSG_INVALID_INPUT);
        }
    }

    #[test]
    fn test_handle_json_limit_exceeded() {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve()
            .times(1)
            .returning(|_| Err(SolveError::StateLimitExceeded { limit: 10 }));
        let service = SolveService::new(mock);

        let reply = service.handle_json(r#"{"x": 3, "y": 4, "z": 2}"#);

        assert_eq!(reply.status, STATUS_UNPROCESSABLE);
        assert_eq!(message(&reply), MSG_LIMIT_EXCEEDED);
    }

    // ── solve_args ────────────────────────────────────────────────────────────

    #[test]
    fn test_solve_args_passes_validated_puzzle() {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve()
            .with(eq(Puzzle::new(4, 3, 2)))
            .times(1)
            .returning(|_| Ok(None));
        let service = SolveService::new(mock);

        let (puzzle, path) = service.solve_args("4", "3", "2").unwrap();

        assert_eq!(puzzle, Puzzle::new(4, 3, 2));
        assert!(path.is_none());
    }

    #[test]
    fn test_solve_args_rejects_invalid_input() {
        let service = SolveService::new(untouched_solver());

        let result = service.solve_args("4", "-3", "2");

        assert!(matches!(result, Err(ServiceError::Input(_))));
    }

    #[test]
    fn test_solve_args_surfaces_solver_error() {
        let mut mock = MockPuzzleSolver::new();
        mock.expect_solve()
            .returning(|_| Err(SolveError::StateLimitExceeded { limit: 1 }));
        let service = SolveService::new(mock);

        let result = service.solve_args("4", "3", "2");

        assert!(matches!(result, Err(ServiceError::Solve(_))));
    }

    #[test]
    fn test_real_solver_behind_service() {
        let service = SolveService::new(Solver::default());
        let (_, path) = service.solve_args("4", "3", "2").unwrap();
        assert_eq!(path.map(|p| p.transitions()), Some(6));
    }
}
