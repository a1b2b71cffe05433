//! Response envelope serialization.

use crate::ErrorPayload;
use bytes::Bytes;
use serde::Serialize;

/// Body written when the envelope itself refuses to serialize. Payload
/// fields are plain strings and integers, so this should never be reachable,
/// but the dispatcher must not have a failure path.
const FALLBACK_BODY: &str = r#"{"statusCode":500,"payload":{"errorCode":500,"errorName":"INTERNAL_SERVER_ERROR","errorMessage":"unserializable error"}}"#;

/// Transport-ready error body: the status code repeated next to the payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "statusCode")]
    status_code: u16,
    payload: ErrorPayload,
}

impl ErrorEnvelope {
    pub fn new(status_code: u16, payload: ErrorPayload) -> Self {
        Self {
            status_code,
            payload,
        }
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    #[inline]
    pub fn payload(&self) -> &ErrorPayload {
        &self.payload
    }

    /// Serialize to a JSON body.
    pub fn to_bytes(&self) -> Bytes {
        match serde_json::to_vec(self) {
            Ok(body) => Bytes::from(body),
            Err(_) => Bytes::from_static(FALLBACK_BODY.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn status_code_appears_in_both_places() {
        let envelope = ErrorEnvelope::new(
            418,
            ErrorPayload::builder(418, "IM_A_TEAPOT", "short and stout").build(),
        );

        assert_eq!(envelope.status_code(), 418);

        let value: Value = serde_json::from_slice(&envelope.to_bytes()).unwrap();
        assert_eq!(value["statusCode"], json!(418));
        assert_eq!(value["payload"]["errorCode"], json!(418));
    }

    #[test]
    fn fallback_body_is_valid_json() {
        let value: Value = serde_json::from_str(FALLBACK_BODY).unwrap();
        assert_eq!(value["payload"]["errorName"], json!("INTERNAL_SERVER_ERROR"));
    }
}
