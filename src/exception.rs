//! Application exception type and catalog.
//!
//! An `Exception` carries everything the dispatcher needs to answer a
//! request: an HTTP status code, a machine-readable name, a human-readable
//! message, and optionally a raw diagnostic message. The `operational` flag
//! marks instances that are safe to expose to clients; constructors in the
//! catalog below set it, and `non_operational` flips it for values that only
//! borrow the exception shape.

use std::error::Error as StdError;
use std::fmt;

/// An application exception with a known HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    status_code: u16,
    name: String,
    message: String,
    raw_message: Option<String>,
    operational: bool,
}

impl Exception {
    /// Create an exception with an arbitrary status code and name.
    ///
    /// Catalog constructors below cover the common cases; this is the
    /// escape hatch for application-specific codes.
    pub fn new(status_code: u16, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            name: name.into(),
            message: message.into(),
            raw_message: None,
            operational: true,
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "BAD_REQUEST", message)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, "UNAUTHORIZED", message)
    }

    /// 403 Forbidden.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, "FORBIDDEN", message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "NOT_FOUND", message)
    }

    /// 409 Conflict.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, "CONFLICT", message)
    }

    /// 422 Unprocessable Entity.
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(422, "UNPROCESSABLE_ENTITY", message)
    }

    /// 429 Too Many Requests.
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(429, "TOO_MANY_REQUESTS", message)
    }

    /// 500 Internal Server Error.
    ///
    /// The dispatcher wraps every untrusted failure in this constructor, so
    /// the client always sees the fixed status and name no matter what was
    /// actually thrown.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, "INTERNAL_SERVER_ERROR", message)
    }

    /// 503 Service Unavailable.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(503, "SERVICE_UNAVAILABLE", message)
    }

    /// Attach a raw diagnostic message.
    pub fn with_raw_message(mut self, raw_message: impl Into<String>) -> Self {
        self.raw_message = Some(raw_message.into());
        self
    }

    /// Mark this exception as a programming-error shape.
    ///
    /// Non-operational exceptions are classified as untrusted: the client
    /// receives the generic internal error, not this instance's fields.
    pub fn non_operational(mut self) -> Self {
        self.operational = false;
        self
    }

    /// HTTP status code.
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Machine-readable identifier.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw diagnostic message, if any.
    #[inline]
    pub fn raw_message(&self) -> Option<&str> {
        self.raw_message.as_deref()
    }

    /// Whether this instance is safe to expose to clients.
    #[inline]
    pub fn is_operational(&self) -> bool {
        self.operational
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Exception {}
