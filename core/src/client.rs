//! Request construction and response decoding for the lifelog API.
//!
//! # Design
//! `LifelogClient` holds only immutable configuration (base URL, API key)
//! plus a reusable transport, and carries no state between calls. Each
//! operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! `list_lifelogs` / `get_lifelog` compose build, execute, and parse for the
//! common case. The split keeps the request/decode contract testable
//! without a network.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query;
use crate::transport::{Transport, DEFAULT_TIMEOUT};
use crate::types::{GetLifelogsParams, Lifelog, LifelogsResponse};

/// Production endpoint of the lifelog API.
pub const DEFAULT_BASE_URL: &str = "https://api.limitless.ai/v1";

/// Client for the lifelog API.
///
/// Cloning is cheap and clones share the underlying connection pool. A
/// single instance may serve overlapping calls from many threads since no
/// call mutates configuration.
#[derive(Clone)]
pub struct LifelogClient {
    base_url: String,
    api_key: String,
    transport: Transport,
}

impl LifelogClient {
    /// Create a client for the production endpoint with the default
    /// 10-second per-call timeout.
    ///
    /// The API key is attached to every request as-is, even when empty: the
    /// server, not the client, is the authority on rejecting credentials.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            transport: Transport::new(DEFAULT_TIMEOUT),
        }
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Replace the overall per-call timeout. A request still in flight when
    /// the timeout fires is aborted and surfaces as a transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = Transport::new(timeout);
        self
    }

    /// Build the request for one page of lifelogs. `None` produces a
    /// request with no query string at all.
    pub fn build_list_lifelogs(&self, params: Option<&GetLifelogsParams>) -> HttpRequest {
        let query = params.map(query::lifelogs_query).unwrap_or_default();
        let url = if query.is_empty() {
            format!("{}/lifelogs", self.base_url)
        } else {
            format!("{}/lifelogs?{query}", self.base_url)
        };
        self.get_request(url)
    }

    /// Build the request for a single lifelog; the id is path-escaped.
    pub fn build_get_lifelog(&self, id: &str) -> HttpRequest {
        let url = format!(
            "{}/lifelogs/{}",
            self.base_url,
            query::escape_path_segment(id)
        );
        self.get_request(url)
    }

    pub fn parse_list_lifelogs(
        &self,
        response: HttpResponse,
    ) -> Result<LifelogsResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(ApiError::Decode)
    }

    pub fn parse_get_lifelog(&self, response: HttpResponse) -> Result<Lifelog, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(ApiError::Decode)
    }

    /// Retrieve one page of lifelogs. The next page, if any, is fetched by
    /// passing the returned cursor back in a follow-up call; the client
    /// never follows cursors on its own.
    pub fn list_lifelogs(
        &self,
        params: Option<&GetLifelogsParams>,
    ) -> Result<LifelogsResponse, ApiError> {
        let request = self.build_list_lifelogs(params);
        self.parse_list_lifelogs(self.transport.execute(&request)?)
    }

    /// Retrieve a single lifelog by id.
    pub fn get_lifelog(&self, id: &str) -> Result<Lifelog, ApiError> {
        let request = self.build_get_lifelog(id);
        self.parse_get_lifelog(self.transport.execute(&request)?)
    }

    fn get_request(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![
                ("X-API-Key".to_string(), self.api_key.clone()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }
}

impl fmt::Debug for LifelogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifelogClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// The API signals success with exactly 200; every other status becomes an
/// `ApiError::Api` carrying the raw body, 4xx and 5xx alike.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Api {
        status: response.status,
        body: response.body.clone(),
    })
}
