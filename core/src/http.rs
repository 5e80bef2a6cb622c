//! HTTP request and response types shared by the builder, transport, and
//! parser.
//!
//! # Design
//! Requests and responses are plain data. `LifelogClient::build_*` methods
//! produce `HttpRequest` values and `parse_*` methods consume `HttpResponse`
//! values without touching the network, so both halves stay deterministic
//! and testable. The bundled `Transport` executes requests for the common
//! case; a caller with special transport needs (custom cancellation,
//! instrumented HTTP stacks) can execute an `HttpRequest` itself and feed
//! the outcome back as an `HttpResponse`.

/// HTTP method for a request. The lifelog API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data: the status code plus the fully
/// consumed body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
