//! Synchronous client library for the Limitless lifelog API.
//!
//! # Overview
//! Issues authenticated HTTP GET requests to list lifelog pages or fetch a
//! single lifelog by id, and decodes the JSON responses into typed
//! structures. One round trip per call, no retries, no caching, no
//! pagination loops — the next-page cursor is handed back to the caller,
//! who decides whether to follow it.
//!
//! # Design
//! - `LifelogClient` holds base URL, API key, and a reusable transport. It
//!   carries no mutable state, so one instance may serve overlapping calls
//!   from many threads.
//! - Each operation is split into `build_*` (produces an `HttpRequest` as
//!   plain data) and `parse_*` (consumes an `HttpResponse`), with
//!   `list_lifelogs` / `get_lifelog` composing the two through a ureq-backed
//!   `Transport`. The split keeps the request/decode contract testable
//!   without a network and lets callers substitute their own transport.
//! - Errors are one of `Transport`, `Api { status, body }`, or `Decode`;
//!   the client makes no retry or status-classification policy beyond that.

pub mod client;
pub mod error;
pub mod http;
mod query;
pub mod transport;
pub mod types;

pub use client::{LifelogClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, DEFAULT_TIMEOUT};
pub use types::{
    ContentNode, Direction, GetLifelogsParams, Lifelog, LifelogsData, LifelogsMeta,
    LifelogsResponse, MetaLifelogs,
};
