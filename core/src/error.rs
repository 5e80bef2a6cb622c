//! Error types for the lifelog API client.
//!
//! # Design
//! One variant per failure stage: the transport failed before a usable
//! response existed, the server answered with a non-200 status, or a 200
//! body did not decode. Non-200 statuses are deliberately not subdivided —
//! no dedicated NotFound or Unauthorized variants. The client surfaces the
//! numeric code and raw body text and leaves retry or user-facing policy to
//! the caller.

use std::error::Error;
use std::fmt;

/// Errors returned by `LifelogClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response: connection failure, DNS
    /// error, or timeout. Never retried by the library.
    Transport(ureq::Error),

    /// The server returned a status other than 200. Carries the raw body
    /// text for diagnostics, 4xx and 5xx alike.
    Api { status: u16, body: String },

    /// The server returned 200 but the body was not the expected JSON shape.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport failure: {err}"),
            ApiError::Api { status, body } => {
                write!(f, "unexpected status code: {status}, response: {body}")
            }
            ApiError::Decode(err) => write!(f, "decoding response body failed: {err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Api { .. } => None,
            ApiError::Decode(err) => Some(err),
        }
    }
}
