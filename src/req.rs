//! HTTP request handle.
//!
//! The dispatcher accepts a request alongside every error but never inspects
//! it; the handle exists for signature symmetry with the hosting pipeline
//! (and keeps the door open for request-id correlation later). Only the
//! cheap, body-free parts of the request are carried.

use hyper::{Method, Request, Uri, header};

/// Read-only view of the request being answered.
#[derive(Debug, Clone)]
pub struct Req {
    method: Method,
    uri: Uri,
    headers: header::HeaderMap,
}

impl Req {
    /// Create from method and URI, with no headers.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: header::HeaderMap::new(),
        }
    }

    /// Snapshot the metadata of a hyper request. The body is untouched.
    pub fn from_hyper<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
        }
    }

    /// Get HTTP method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get request URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Get request path.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Get query string.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Get header value by name.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all headers.
    #[inline]
    pub fn headers(&self) -> &header::HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_hyper_request_metadata() {
        let hyper_req = Request::builder()
            .method(Method::POST)
            .uri("/users?page=2")
            .header("x-request-id", "abc-123")
            .body(())
            .unwrap();

        let req = Req::from_hyper(&hyper_req);
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.path(), "/users");
        assert_eq!(req.query(), Some("page=2"));
        assert_eq!(req.header("x-request-id"), Some("abc-123"));
    }
}
