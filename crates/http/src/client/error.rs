//! Client error types and backend error payload normalization

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-level messages extracted from a 4xx response body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for display, ordered by field name (JSON object keys
    /// are decoded into a sorted map).
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure. Always treated as "session not established".
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 4xx with field-level messages, surfaced verbatim to the view layer
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Expired or missing session (401/403)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map a non-success response onto the error taxonomy.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => {
                let errors = extract_field_errors(body);
                let message = errors
                    .errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "authentication required".to_string());
                Self::Unauthorized(message)
            }
            400..=499 => {
                let errors = extract_field_errors(body);
                if errors.is_empty() {
                    Self::Server {
                        status,
                        message: body.trim().to_string(),
                    }
                } else {
                    Self::Validation(errors)
                }
            }
            _ => Self::Server {
                status,
                message: body.trim().to_string(),
            },
        }
    }

    /// Whether this error means the backend session is gone.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Normalize the backend's error body shapes into field/message pairs.
///
/// The backend emits three shapes: `{"field": ["msg", ...]}` from
/// serializer validation, `{"error_msg": "msg"}` from custom validators,
/// and `{"detail": "msg"}` from the framework itself. Anything that does
/// not parse as a JSON object is carried as a single `detail` message.
pub fn extract_field_errors(body: &str) -> ValidationErrors {
    let mut errors = Vec::new();

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            for (field, value) in map {
                match value {
                    Value::String(message) => errors.push(FieldError {
                        field: field.clone(),
                        message,
                    }),
                    Value::Array(items) => {
                        for item in items {
                            if let Some(message) = as_message(&item) {
                                errors.push(FieldError {
                                    field: field.clone(),
                                    message,
                                });
                            }
                        }
                    }
                    Value::Object(inner) => {
                        for (_, item) in inner {
                            if let Some(message) = as_message(&item) {
                                errors.push(FieldError {
                                    field: field.clone(),
                                    message,
                                });
                            }
                        }
                    }
                    other => {
                        if let Some(message) = as_message(&other) {
                            errors.push(FieldError {
                                field: field.clone(),
                                message,
                            });
                        }
                    }
                }
            }
        }
        Ok(Value::String(message)) => errors.push(FieldError {
            field: "detail".to_string(),
            message,
        }),
        _ => {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                errors.push(FieldError {
                    field: "detail".to_string(),
                    message: trimmed.to_string(),
                });
            }
        }
    }

    ValidationErrors { errors }
}

fn as_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_serializer_field_lists() {
        let body = r#"{"email": ["Enter a valid email address."], "password": ["This field is required.", "too short"]}"#;
        let errors = extract_field_errors(body);
        assert_eq!(errors.errors.len(), 3);
        assert_eq!(errors.errors[0].field, "email");
        assert_eq!(errors.errors[0].message, "Enter a valid email address.");
        assert_eq!(errors.errors[2].message, "too short");
    }

    #[test]
    fn fields_are_ordered_by_name_regardless_of_body_order() {
        let body = r#"{"username": ["required"], "email": ["invalid"]}"#;
        let errors = extract_field_errors(body);
        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "username"]);
    }

    #[test]
    fn extracts_custom_validator_shape() {
        let body = r#"{"error_msg": "choose a password of at least 8 characters"}"#;
        let errors = extract_field_errors(body);
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "error_msg");
        assert_eq!(
            errors.errors[0].message,
            "choose a password of at least 8 characters"
        );
    }

    #[test]
    fn extracts_detail_shape() {
        let errors = extract_field_errors(r#"{"detail": "Invalid token."}"#);
        assert_eq!(errors.messages(), vec!["Invalid token."]);
    }

    #[test]
    fn non_json_body_becomes_detail() {
        let errors = extract_field_errors("Bad Request");
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "detail");
        assert_eq!(errors.errors[0].message, "Bad Request");
    }

    #[test]
    fn empty_body_yields_no_errors() {
        assert!(extract_field_errors("").is_empty());
    }

    #[test]
    fn status_400_with_fields_maps_to_validation() {
        let err = ClientError::from_response(400, r#"{"email": ["taken"]}"#);
        match err {
            ClientError::Validation(errors) => assert_eq!(errors.messages(), vec!["taken"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        let err = ClientError::from_response(401, r#"{"detail": "Authentication credentials were not provided."}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn status_403_maps_to_unauthorized() {
        assert!(ClientError::from_response(403, "").is_unauthorized());
    }

    #[test]
    fn status_500_maps_to_server() {
        let err = ClientError::from_response(500, "boom");
        assert!(matches!(err, ClientError::Server { status: 500, .. }));
    }

    #[test]
    fn validation_errors_display_joins_messages() {
        let errors = ValidationErrors {
            errors: vec![
                FieldError {
                    field: "email".into(),
                    message: "taken".into(),
                },
                FieldError {
                    field: "username".into(),
                    message: "required".into(),
                },
            ],
        };
        assert_eq!(errors.to_string(), "taken; required");
    }
}
