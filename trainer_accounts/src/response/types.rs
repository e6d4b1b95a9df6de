use http::{Response, StatusCode, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::errors::RenderError;

/// Media type of every rendered error envelope
pub const PROBLEM_JSON: &str = "application/problem+json";

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub field: String,
    pub message: String,
}

impl Cause {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Uniform error body returned to API clients
///
/// Built once per failure through one of the status-specific constructors and
/// consumed by [`ErrorEnvelope::render_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    message: String,
    status: u16,
    #[serde(rename = "error", skip_serializing_if = "Vec::is_empty")]
    causes: Vec<Cause>,
    instance: String,
}

impl ErrorEnvelope {
    fn with_status(
        status: StatusCode,
        message: impl Into<String>,
        causes: Vec<Cause>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            causes,
            instance: path.into(),
        }
    }

    /// 400 without field causes
    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message, Vec::new(), path)
    }

    /// 400 carrying every field cause, in the order given
    pub fn bad_request_validation(
        message: impl Into<String>,
        causes: Vec<Cause>,
        path: impl Into<String>,
    ) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message, causes, path)
    }

    /// 401 without field causes
    pub fn unauthorized(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(StatusCode::UNAUTHORIZED, message, Vec::new(), path)
    }

    /// 404 without field causes
    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, message, Vec::new(), path)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Render the envelope as an `application/problem+json` response
    ///
    /// The status line carries the envelope's status and the body is the JSON
    /// object followed by a newline. Consumes the envelope so a response is
    /// written at most once.
    pub fn render_json(self) -> Result<Response<String>, RenderError> {
        let mut body = serde_json::to_string(&self)?;
        body.push('\n');

        let response = Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, PROBLEM_JSON)
            .body(body)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn body_json(response: &Response<String>) -> Value {
        serde_json::from_str(response.body()).expect("Rendered body should be valid JSON")
    }

    #[test]
    fn test_constructors_fix_status() {
        let cases = [
            (ErrorEnvelope::bad_request("bad", "/a"), StatusCode::BAD_REQUEST),
            (
                ErrorEnvelope::bad_request_validation("bad", vec![Cause::new("name", "x")], "/a"),
                StatusCode::BAD_REQUEST,
            ),
            (ErrorEnvelope::unauthorized("no", "/a"), StatusCode::UNAUTHORIZED),
            (ErrorEnvelope::not_found("gone", "/a"), StatusCode::NOT_FOUND),
        ];

        for (envelope, expected) in cases {
            assert_eq!(envelope.status(), expected);
            assert_eq!(envelope.instance(), "/a");
        }
    }

    #[test]
    fn test_constructors_without_causes_are_empty() {
        assert!(ErrorEnvelope::bad_request("m", "/p").causes().is_empty());
        assert!(ErrorEnvelope::unauthorized("m", "/p").causes().is_empty());
        assert!(ErrorEnvelope::not_found("m", "/p").causes().is_empty());
    }

    /// Rendering sets the status line, the problem+json content type and the body
    #[test]
    fn test_render_json_validation_envelope() {
        // Given a validation envelope with two causes
        let envelope = ErrorEnvelope::bad_request_validation(
            "invalid user data",
            vec![
                Cause::new("email", "email is required"),
                Cause::new("email", "value informed is invalid"),
            ],
            "/users",
        );

        // When rendering
        let response = envelope.render_json().expect("Rendering should succeed");

        // Then status and content type match
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some(PROBLEM_JSON)
        );

        // And the body holds every cause in construction order
        assert!(response.body().ends_with('\n'));
        assert_eq!(
            body_json(&response),
            json!({
                "message": "invalid user data",
                "status": 400,
                "error": [
                    { "field": "email", "message": "email is required" },
                    { "field": "email", "message": "value informed is invalid" }
                ],
                "instance": "/users"
            })
        );
    }

    /// An envelope without causes has no `error` key at all
    #[test]
    fn test_render_json_omits_empty_causes() {
        let envelopes = [
            ErrorEnvelope::bad_request("malformed body", "/users"),
            ErrorEnvelope::bad_request_validation("no causes", Vec::new(), "/users"),
            ErrorEnvelope::unauthorized("invalid credentials", "/login"),
            ErrorEnvelope::not_found("user not found", "/users/7"),
        ];

        for envelope in envelopes {
            let expected_status = envelope.status();
            let response = envelope.render_json().expect("Rendering should succeed");
            assert_eq!(response.status(), expected_status);

            let body = body_json(&response);
            let object = body.as_object().expect("Body should be a JSON object");
            assert!(!object.contains_key("error"));
            assert_eq!(object.len(), 3);
            assert_eq!(body["status"], json!(expected_status.as_u16()));
        }
    }

    #[test]
    fn test_render_json_not_found_body() {
        let response = ErrorEnvelope::not_found("user not found", "/users/42")
            .render_json()
            .expect("Rendering should succeed");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(&response),
            json!({ "message": "user not found", "status": 404, "instance": "/users/42" })
        );
    }

    #[test]
    fn test_cause_serializes_field_and_message() {
        let cause = Cause::new("role", "value informed is invalid");
        let value = serde_json::to_value(&cause).expect("Failed to serialize cause");
        assert_eq!(
            value,
            json!({ "field": "role", "message": "value informed is invalid" })
        );
    }
}
