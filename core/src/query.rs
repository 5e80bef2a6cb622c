//! Canonical query-string construction for the lifelog endpoints.
//!
//! # Design
//! Exactly one query pair per present parameter field, sorted alphabetically
//! by key, so a given parameter set always yields the same byte string.
//! RFC 3986 unreserved characters pass through; everything else, including
//! `:` and `/`, is percent-escaped — in query values and path segments
//! alike.

use chrono::SecondsFormat;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::GetLifelogsParams;

/// Escape everything except RFC 3986 unreserved characters.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escape a path segment, e.g. a lifelog id interpolated into a URL.
pub(crate) fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, STRICT_ENCODE_SET).to_string()
}

/// Build the canonical query string for `GET /lifelogs`, without the leading
/// `?`. Returns an empty string when no parameter is present.
pub(crate) fn lifelogs_query(params: &GetLifelogsParams) -> String {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();

    if let Some(timezone) = &params.timezone {
        pairs.push(("timezone", timezone.clone()));
    }
    if let Some(date) = &params.date {
        pairs.push(("date", date.clone()));
    }
    if let Some(start) = &params.start {
        pairs.push(("start", start.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
    if let Some(end) = &params.end {
        pairs.push(("end", end.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
    if let Some(cursor) = &params.cursor {
        pairs.push(("cursor", cursor.clone()));
    }
    if let Some(direction) = params.direction {
        pairs.push(("direction", direction.as_str().to_string()));
    }
    if let Some(include_markdown) = params.include_markdown {
        pairs.push(("includeMarkdown", include_markdown.to_string()));
    }
    if let Some(include_headings) = params.include_headings {
        pairs.push(("includeHeadings", include_headings.to_string()));
    }
    match params.limit {
        Some(limit) if limit > 0 => pairs.push(("limit", limit.to_string())),
        _ => {}
    }

    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, STRICT_ENCODE_SET)))
        .collect();
    encoded.join("&")
}
