//! HTTP execution for built requests.
//!
//! # Design
//! A thin wrapper over a `ureq::Agent`. Status codes come back as data
//! (`http_status_as_error(false)`) because status interpretation belongs to
//! the parse layer, and a single global timeout bounds each call from
//! connect through body read. The agent keeps a connection pool and is
//! cheap to clone, so one transport can serve overlapping calls from many
//! threads.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Overall per-call timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes `HttpRequest` values over HTTP.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    /// Build a transport whose requests are bounded by `timeout`, covering
    /// the whole round trip including the body read.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute a request and fully consume the response body.
    ///
    /// Connection, DNS, and timeout failures surface as
    /// `ApiError::Transport`. On a non-200 status the body read is
    /// best-effort: an unreadable error body is logged and replaced with an
    /// empty string so the status itself still reaches the caller.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(ApiError::Transport)?;
        let status = response.status().as_u16();
        let body = match response.body_mut().read_to_string() {
            Ok(body) => body,
            Err(err) if status != 200 => {
                log::warn!("discarding unreadable body of status {status} response: {err}");
                String::new()
            }
            Err(err) => return Err(ApiError::Transport(err)),
        };

        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
