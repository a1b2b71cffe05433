//! HTTP response handle.
//!
//! `Res` records a status, headers, and at most one body write, then
//! converts into a hyper response for the hosting server. The first `send`
//! freezes the response; later sends and mutations are ignored rather than
//! panicking, so a dispatch is always exactly one write.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode, header};

/// Buffered response being built for the client.
#[derive(Debug, Clone)]
pub struct Res {
    status: u16,
    headers: header::HeaderMap,
    body: Option<Bytes>,
}

impl Res {
    /// Create an empty response with status 200 and no body.
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: header::HeaderMap::new(),
            body: None,
        }
    }

    /// Set the HTTP status code. Ignored once a body has been sent.
    pub fn set_status(&mut self, status: u16) -> &mut Self {
        if self.body.is_none() {
            self.status = status;
        }
        self
    }

    /// Set a header. Invalid names or values are ignored, as are changes
    /// after a body has been sent.
    pub fn set_header(&mut self, name: &str, value: &str) -> &mut Self {
        if self.body.is_some() {
            return self;
        }
        if let (Ok(name), Ok(value)) = (
            header::HeaderName::try_from(name),
            header::HeaderValue::try_from(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Write the body. Only the first write takes effect.
    pub fn send(&mut self, body: impl Into<Bytes>) {
        if self.body.is_none() {
            self.body = Some(body.into());
        }
    }

    /// Get the status code.
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Get a header value by name.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the body, if one has been sent.
    #[inline]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Whether a body has been written.
    #[inline]
    pub fn is_sent(&self) -> bool {
        self.body.is_some()
    }

    /// Convert into a hyper response.
    pub fn into_hyper(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(self.body.unwrap_or_default()));
        *response.status_mut() =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        *response.headers_mut() = self.headers;
        response
    }
}

impl Default for Res {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_send_wins() {
        let mut res = Res::new();
        res.send("first");
        res.send("second");

        assert!(res.is_sent());
        assert_eq!(res.body().unwrap(), &Bytes::from("first"));
    }

    #[test]
    fn response_is_frozen_after_send() {
        let mut res = Res::new();
        res.set_status(404).send("gone");
        res.set_status(200).set_header("X-Late", "1");

        assert_eq!(res.status_code(), 404);
        assert_eq!(res.header("x-late"), None);
    }

    #[test]
    fn chains_status_and_header() {
        let mut res = Res::new();
        res.set_status(404)
            .set_header("Content-Type", "application/json")
            .send("{}");

        assert_eq!(res.status_code(), 404);
        assert_eq!(res.header("content-type"), Some("application/json"));
    }

    #[test]
    fn converts_into_hyper_response() {
        let mut res = Res::new();
        res.set_status(503).send("busy");

        let response = res.into_hyper();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn out_of_range_status_degrades_to_500() {
        let mut res = Res::new();
        res.set_status(9999);

        let response = res.into_hyper();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
