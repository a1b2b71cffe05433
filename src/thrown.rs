//! Tagged classification of caught errors.
//!
//! Handlers can fail with anything: a catalog exception, a boxed error from
//! a fallible call, a bare string, or an arbitrary structured value. `Thrown`
//! collapses all of these into two variants up front, so the dispatcher
//! classifies with a pattern match instead of runtime capability checks.

use crate::Exception;
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;

/// Boxed error type accepted on the untrusted path.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Placeholder message when a thrown value refuses to serialize.
const UNSERIALIZABLE: &str = "unserializable error";

/// A caught error, classified at the point it enters dispatch.
#[derive(Debug)]
pub enum Thrown {
    /// An anticipated application error safe to expose verbatim.
    Operational(Exception),
    /// Anything else. The client only ever sees the generic internal error.
    Unexpected(Caught),
}

/// The raw value behind an unexpected error.
#[derive(Debug)]
pub enum Caught {
    /// An error-capable object, kept as-is.
    Failure(BoxedError),
    /// A thrown string.
    Text(String),
    /// An arbitrary structured value.
    Value(Value),
}

impl Caught {
    /// Extract a message without ever failing.
    pub fn into_message(self) -> String {
        match self {
            Caught::Failure(error) => error.to_string(),
            Caught::Text(text) => text,
            Caught::Value(value) => stringify(&value),
        }
    }
}

/// Serialize a value to JSON text, falling back to a fixed placeholder.
///
/// The fallback keeps message extraction infallible, which the dispatcher
/// relies on for its never-panics contract.
pub fn stringify<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| UNSERIALIZABLE.to_string())
}

impl From<Exception> for Thrown {
    /// The only place the `operational` flag is consulted.
    ///
    /// A non-operational exception signals a programming error borrowing the
    /// exception shape; it is demoted to a caught failure, keeping its
    /// message but not its status code or name.
    fn from(exception: Exception) -> Self {
        if exception.is_operational() {
            Thrown::Operational(exception)
        } else {
            Thrown::Unexpected(Caught::Failure(Box::new(exception)))
        }
    }
}

impl From<Caught> for Thrown {
    fn from(caught: Caught) -> Self {
        Thrown::Unexpected(caught)
    }
}

impl From<BoxedError> for Thrown {
    fn from(error: BoxedError) -> Self {
        Thrown::Unexpected(Caught::Failure(error))
    }
}

impl From<String> for Thrown {
    fn from(text: String) -> Self {
        Thrown::Unexpected(Caught::Text(text))
    }
}

impl From<&str> for Thrown {
    fn from(text: &str) -> Self {
        Thrown::Unexpected(Caught::Text(text.to_string()))
    }
}

impl From<Value> for Thrown {
    fn from(value: Value) -> Self {
        Thrown::Unexpected(Caught::Value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;
    use std::io;

    struct Opaque;

    impl Serialize for Opaque {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn operational_exception_stays_operational() {
        let thrown = Thrown::from(Exception::not_found("gone"));
        assert!(matches!(thrown, Thrown::Operational(_)));
    }

    #[test]
    fn non_operational_exception_is_demoted() {
        let thrown = Thrown::from(Exception::bad_request("looks legit").non_operational());
        match thrown {
            Thrown::Unexpected(caught) => assert_eq!(caught.into_message(), "looks legit"),
            Thrown::Operational(_) => panic!("non-operational exception classified as trusted"),
        }
    }

    #[test]
    fn message_extraction_per_shape() {
        let error: BoxedError = Box::new(io::Error::other("disk on fire"));
        assert_eq!(Caught::Failure(error).into_message(), "disk on fire");
        assert_eq!(Caught::Text("boom".to_string()).into_message(), "boom");
        assert_eq!(Caught::Value(json!({"code": 7})).into_message(), r#"{"code":7}"#);
    }

    #[test]
    fn stringify_falls_back_on_refusal() {
        assert_eq!(stringify(&Opaque), UNSERIALIZABLE);
    }
}
