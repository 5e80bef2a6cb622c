//! Domain DTOs for the lifelog API.
//!
//! # Design
//! Field names follow the wire contract: camelCase on the wire, snake_case
//! in Rust via serde renames. Every field the server may omit carries
//! `#[serde(default)]` so partial bodies decode to absence values instead of
//! errors, and unknown fields are ignored for forward compatibility with
//! server-side additions. The mock-server crate defines its own copies of
//! these types; integration tests catch schema drift between the two.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single lifelog entry returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifelog {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,

    /// Title, equal to the first heading1 node.
    #[serde(default)]
    pub title: String,

    /// Raw markdown content, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,

    /// Root-level structured content nodes.
    #[serde(default)]
    pub contents: Vec<ContentNode>,
}

/// One section of a lifelog's structured content tree.
///
/// Nodes nest through `children` to arbitrary depth; in practice the tree is
/// shallow (transcript sections under headings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    /// Node type: heading1, heading2, heading3, blockquote, etc. The set is
    /// open; unrecognized types pass through untouched.
    #[serde(rename = "type", default)]
    pub node_type: String,

    #[serde(default)]
    pub content: String,

    /// ISO-8601 timestamps in the timezone the lifelogs were requested in.
    /// Empty when the server omits them.
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,

    /// Millisecond offsets from the start of the lifelog.
    #[serde(default)]
    pub start_offset_ms: i64,
    #[serde(default)]
    pub end_offset_ms: i64,

    /// Nested content nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,

    /// Speaker display name, set for spoken sections such as blockquotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_name: Option<String>,

    /// Speaker identifier; `"user"` when the speaker is the tracked primary
    /// user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_identifier: Option<String>,
}

/// One page of lifelogs plus pagination metadata, matching the wire
/// envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifelogsResponse {
    #[serde(default)]
    pub data: LifelogsData,
    #[serde(default)]
    pub meta: LifelogsMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifelogsData {
    #[serde(default)]
    pub lifelogs: Vec<Lifelog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifelogsMeta {
    #[serde(default)]
    pub lifelogs: MetaLifelogs,
}

/// Pagination metadata for a lifelogs page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaLifelogs {
    /// Opaque cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,

    /// Number of items in this page, not the total across pages.
    #[serde(default)]
    pub count: u64,
}

/// Sort order for `list_lifelogs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Query parameters for listing lifelogs.
///
/// Every field is optional and unset fields are omitted from the request
/// entirely, so "not specified" stays distinguishable from "specified as
/// false/empty/zero".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetLifelogsParams {
    /// IANA timezone name, e.g. "America/New_York".
    pub timezone: Option<String>,

    /// Single day in YYYY-MM-DD format.
    pub date: Option<String>,

    /// Start of an absolute time range, sent as RFC3339.
    pub start: Option<DateTime<FixedOffset>>,

    /// End of an absolute time range, sent as RFC3339.
    pub end: Option<DateTime<FixedOffset>>,

    /// Opaque pagination cursor from a previous page's metadata.
    pub cursor: Option<String>,

    pub direction: Option<Direction>,

    pub include_markdown: Option<bool>,

    pub include_headings: Option<bool>,

    /// Maximum items per page; only sent when greater than zero.
    pub limit: Option<u32>,
}
