//! Serialized error payload.
//!
//! The payload is created fresh per dispatch and discarded after
//! serialization. The raw-message key is conditional: it appears only when
//! the source value is truthy, so both `None` and an empty string suppress
//! it. The builder owns that rule; callers never merge maps by hand.

use crate::Exception;
use serde::Serialize;

/// The client-facing error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "errorCode")]
    error_code: u16,
    #[serde(rename = "errorName")]
    error_name: String,
    #[serde(rename = "errorMessage")]
    error_message: String,
    #[serde(rename = "errorRawMessage", skip_serializing_if = "Option::is_none")]
    error_raw_message: Option<String>,
}

impl ErrorPayload {
    /// Start building a payload from the three mandatory fields.
    pub fn builder(
        error_code: u16,
        error_name: impl Into<String>,
        error_message: impl Into<String>,
    ) -> ErrorPayloadBuilder {
        ErrorPayloadBuilder {
            error_code,
            error_name: error_name.into(),
            error_message: error_message.into(),
            error_raw_message: None,
        }
    }

    #[inline]
    pub fn error_code(&self) -> u16 {
        self.error_code
    }

    #[inline]
    pub fn error_name(&self) -> &str {
        &self.error_name
    }

    #[inline]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[inline]
    pub fn error_raw_message(&self) -> Option<&str> {
        self.error_raw_message.as_deref()
    }
}

impl From<&Exception> for ErrorPayload {
    fn from(exception: &Exception) -> Self {
        ErrorPayload::builder(
            exception.status_code(),
            exception.name(),
            exception.message(),
        )
        .raw_message(exception.raw_message())
        .build()
    }
}

/// Builder for `ErrorPayload`.
#[derive(Debug, Clone)]
pub struct ErrorPayloadBuilder {
    error_code: u16,
    error_name: String,
    error_message: String,
    error_raw_message: Option<String>,
}

impl ErrorPayloadBuilder {
    /// Append the raw-message key, but only when the value is truthy.
    pub fn raw_message(mut self, raw_message: Option<&str>) -> Self {
        match raw_message {
            Some(raw) if !raw.is_empty() => self.error_raw_message = Some(raw.to_string()),
            _ => {}
        }
        self
    }

    pub fn build(self) -> ErrorPayload {
        ErrorPayload {
            error_code: self.error_code,
            error_name: self.error_name,
            error_message: self.error_message,
            error_raw_message: self.error_raw_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let payload = ErrorPayload::builder(404, "NOT_FOUND", "no such user")
            .raw_message(Some("users table miss"))
            .build();

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "errorCode": 404,
                "errorName": "NOT_FOUND",
                "errorMessage": "no such user",
                "errorRawMessage": "users table miss",
            })
        );
    }

    #[test]
    fn absent_raw_message_omits_the_key() {
        let payload = ErrorPayload::builder(400, "BAD_REQUEST", "nope").build();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("errorRawMessage").is_none());
    }

    #[test]
    fn empty_raw_message_omits_the_key() {
        let payload = ErrorPayload::builder(400, "BAD_REQUEST", "nope")
            .raw_message(Some(""))
            .build();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("errorRawMessage").is_none());
    }

    #[test]
    fn built_from_exception_fields() {
        let exception = crate::Exception::conflict("duplicate id").with_raw_message("key 42");
        let payload = ErrorPayload::from(&exception);

        assert_eq!(payload.error_code(), 409);
        assert_eq!(payload.error_name(), "CONFLICT");
        assert_eq!(payload.error_message(), "duplicate id");
        assert_eq!(payload.error_raw_message(), Some("key 42"));
    }
}
