//! Exception dispatch: the terminal error hook of a request pipeline.
//!
//! ## Available Handlers
//!
//! - `Dispatcher` - trusted/untrusted classification with JSON responses
//! - `FnExceptionHandler` - custom function-based handler

use crate::envelope::ErrorEnvelope;
use crate::payload::ErrorPayload;
use crate::{Exception, Req, Res, Thrown};
use tracing::error;

/// Convert caught errors into a response write.
///
/// Implementations must not panic: a handler runs after the rest of the
/// pipeline has already failed, so it is the last chance to answer the
/// client at all.
pub trait ExceptionHandler: Send + Sync + 'static {
    /// Classify the error and write exactly one response.
    fn dispatch(&self, error: Thrown, req: &Req, res: &mut Res);
}

/// Default exception dispatcher.
///
/// Operational exceptions pass through verbatim; everything else collapses
/// to the generic internal error, with the message extracted defensively.
/// The request is accepted but not read.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher;

impl ExceptionHandler for Dispatcher {
    fn dispatch(&self, error: Thrown, _req: &Req, res: &mut Res) {
        let exception = match error {
            Thrown::Operational(exception) => exception,
            Thrown::Unexpected(caught) => {
                let message = caught.into_message();
                error!(message = %message, "unexpected error reached the dispatcher");
                Exception::internal_error(message)
            }
        };

        respond(&exception, res);
    }
}

/// Build the payload from the exception fields and write it, using the
/// exception's status code both on the wire and inside the envelope.
fn respond(exception: &Exception, res: &mut Res) {
    let envelope = ErrorEnvelope::new(exception.status_code(), ErrorPayload::from(exception));

    res.set_status(exception.status_code())
        .set_header("Content-Type", "application/json")
        .send(envelope.to_bytes());
}

/// Function-based exception handler.
pub struct FnExceptionHandler<F>(pub F);

impl<F> ExceptionHandler for FnExceptionHandler<F>
where
    F: Fn(Thrown, &Req, &mut Res) + Send + Sync + 'static,
{
    fn dispatch(&self, error: Thrown, req: &Req, res: &mut Res) {
        (self.0)(error, req, res)
    }
}
