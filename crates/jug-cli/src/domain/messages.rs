//! JSON request and response types for the solve contract.
//!
//! # Request
//!
//! ```json
//! {"x": 4, "y": 3, "z": 2}
//! ```
//!
//! Values may be JSON numbers or strings.  They are kept as raw
//! [`serde_json::Value`]s here and validated by the application layer, so a
//! request with `"x": -1` still deserializes and is rejected as
//! `Invalid input` rather than failing to parse.
//!
//! # Response
//!
//! A response is a status code plus a body.  The body is either the bare
//! array of steps or a single-field message object:
//!
//! ```json
//! [{"x_state":"Empty","y_state":"Empty","action":"Start"}, ...]
//! {"message":"No solution"}
//! ```

use jug_core::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request solved.
pub const STATUS_OK: u16 = 200;
/// Request rejected before solving.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Request was valid but the search ran past the configured state cap.
pub const STATUS_UNPROCESSABLE: u16 = 422;

pub const MSG_MISSING_PARAMETERS: &str = "Missing required parameters";
pub const MSG_INVALID_INPUT: &str = "Invalid input";
pub const MSG_NO_SOLUTION: &str = "No solution";
pub const MSG_LIMIT_EXCEEDED: &str = "Search limit exceeded";

/// Incoming solve request.
///
/// A field that is absent and a field that is `null` both deserialize to
/// `None` and are reported as missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Capacity of jug X.
    #[serde(default)]
    pub x: Option<Value>,
    /// Capacity of jug Y.
    #[serde(default)]
    pub y: Option<Value>,
    /// Volume to measure.
    #[serde(default)]
    pub z: Option<Value>,
}

impl SolveRequest {
    /// Reads a request from a decoded JSON body.
    ///
    /// Returns `None` unless `value` is an object.  The derived
    /// `Deserialize` also accepts a sequence for a struct with named fields,
    /// which would read `[4, 3, 2]` positionally.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };
        let field = |name: &str| map.get(name).filter(|v| !v.is_null()).cloned();
        Some(Self {
            x: field("x"),
            y: field("y"),
            z: field("z"),
        })
    }
}

/// Body of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
// `untagged` writes the variant's contents directly with no wrapper, which
// gives the bare step array and the bare `{"message": ...}` object.
#[serde(untagged)]
pub enum ResponseBody {
    Solution(Path),
    Message { message: String },
}

/// A status code and body, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiReply {
    pub fn solution(path: Path) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Solution(path),
        }
    }

    pub fn no_solution() -> Self {
        Self::message(STATUS_OK, MSG_NO_SOLUTION)
    }

    pub fn missing_parameters() -> Self {
        Self::message(STATUS_BAD_REQUEST, MSG_MISSING_PARAMETERS)
    }

    pub fn invalid_input() -> Self {
        Self::message(STATUS_BAD_REQUEST, MSG_INVALID_INPUT)
    }

    pub fn limit_exceeded() -> Self {
        Self::message(STATUS_UNPROCESSABLE, MSG_LIMIT_EXCEEDED)
    }

    fn message(status: u16, message: &str) -> Self {
        Self {
            status,
            body: ResponseBody::Message {
                message: message.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_numbers_reads_fields() {
        let req = SolveRequest::from_json(json!({"x": 4, "y": 3, "z": 2})).unwrap();
        assert_eq!(req.x, Some(json!(4)));
        assert_eq!(req.z, Some(json!(2)));
    }

    #[test]
    fn test_request_null_and_absent_fields_are_none() {
        let req = SolveRequest::from_json(json!({"x": null, "y": "3"})).unwrap();
        assert_eq!(req.x, None);
        assert_eq!(req.y, Some(json!("3")));
        assert_eq!(req.z, None);
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let req = SolveRequest::from_json(json!({"x": 1, "y": 2, "z": 3, "w": 4})).unwrap();
        assert_eq!(req.y, Some(json!(2)));
    }

    #[test]
    fn test_request_rejects_non_object() {
        for value in [json!([4, 3, 2]), json!([4]), json!(42), json!("x"), json!(null)] {
            assert_eq!(SolveRequest::from_json(value.clone()), None, "{value}");
        }
    }

    #[test]
    fn test_message_body_serializes_without_wrapper() {
        let reply = ApiReply::no_solution();
        let json = serde_json::to_string(&reply.body).unwrap();
        assert_eq!(json, r#"{"message":"No solution"}"#);
        assert_eq!(reply.status, STATUS_OK);
    }

    #[test]
    fn test_solution_body_serializes_as_array() {
        let reply = ApiReply::solution(Path::start());
        let json = serde_json::to_value(&reply.body).unwrap();
        assert_eq!(
            json,
            json!([{"x_state": "Empty", "y_state": "Empty", "action": "Start"}])
        );
    }

    #[test]
    fn test_error_replies_carry_bad_request_status() {
        assert_eq!(ApiReply::invalid_input().status, STATUS_BAD_REQUEST);
        assert_eq!(ApiReply::missing_parameters().status, STATUS_BAD_REQUEST);
        assert!(!ApiReply::limit_exceeded().is_success());
    }
}
