//! In-memory mock of the lifelog API for integration tests.
//!
//! # Design
//! Serves a fixed, read-only set of lifelogs seeded at router construction.
//! Requests must carry a non-empty `x-api-key` header. Pagination uses a
//! decimal offset as the opaque cursor; clients are expected to hand the
//! cursor back verbatim, never to interpret it. DTOs are defined
//! independently from the core crate so integration tests catch schema
//! drift.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifelog {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(default)]
    pub contents: Vec<ContentNode>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub content: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub start_offset_ms: i64,
    #[serde(default)]
    pub end_offset_ms: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_identifier: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LifelogsEnvelope {
    pub data: LifelogsData,
    pub meta: MetaSection,
}

#[derive(Serialize, Deserialize)]
pub struct LifelogsData {
    pub lifelogs: Vec<Lifelog>,
}

#[derive(Serialize, Deserialize)]
pub struct MetaSection {
    pub lifelogs: MetaLifelogs,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaLifelogs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub count: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type Rejection = (StatusCode, Json<ErrorBody>);

pub type Db = Arc<Vec<Lifelog>>;

pub fn app() -> Router {
    app_with_lifelogs(Vec::new())
}

/// Router serving the given lifelogs; insertion order is `direction=asc`.
pub fn app_with_lifelogs(lifelogs: Vec<Lifelog>) -> Router {
    let db: Db = Arc::new(lifelogs);
    Router::new()
        .route("/lifelogs", get(list_lifelogs))
        .route("/lifelogs/{id}", get(get_lifelog))
        .with_state(db)
}

pub async fn run(listener: TcpListener, lifelogs: Vec<Lifelog>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_lifelogs(lifelogs)).await
}

/// A small data set with nested sections and speaker metadata, served by
/// the standalone binary.
pub fn sample_lifelogs() -> Vec<Lifelog> {
    vec![
        Lifelog {
            id: "morning-standup".to_string(),
            title: "Morning standup".to_string(),
            markdown: Some("# Morning standup\n> Shipping the report today.".to_string()),
            contents: vec![ContentNode {
                node_type: "heading1".to_string(),
                content: "Morning standup".to_string(),
                start_time: "2024-03-01T09:00:00-05:00".to_string(),
                end_time: "2024-03-01T09:15:00-05:00".to_string(),
                start_offset_ms: 0,
                end_offset_ms: 900_000,
                children: vec![ContentNode {
                    node_type: "blockquote".to_string(),
                    content: "Shipping the report today.".to_string(),
                    start_time: "2024-03-01T09:01:00-05:00".to_string(),
                    end_time: "2024-03-01T09:01:30-05:00".to_string(),
                    start_offset_ms: 60_000,
                    end_offset_ms: 90_000,
                    children: Vec::new(),
                    speaker_name: Some("Sam".to_string()),
                    speaker_identifier: Some("user".to_string()),
                }],
                speaker_name: None,
                speaker_identifier: None,
            }],
        },
        Lifelog {
            id: "coffee-chat".to_string(),
            title: "Coffee chat".to_string(),
            markdown: None,
            contents: vec![ContentNode {
                node_type: "heading1".to_string(),
                content: "Coffee chat".to_string(),
                ..Default::default()
            }],
        },
    ]
}

fn unauthorized() -> Rejection {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: "Unauthorized".to_string(),
        }),
    )
}

fn bad_request(message: &str) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

fn check_api_key(headers: &HeaderMap) -> Result<(), Rejection> {
    match headers.get("x-api-key") {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(unauthorized()),
    }
}

async fn list_lifelogs(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LifelogsEnvelope>, Rejection> {
    check_api_key(&headers)?;

    let offset = match params.get("cursor") {
        Some(cursor) => cursor
            .parse::<usize>()
            .map_err(|_| bad_request("invalid cursor"))?,
        None => 0,
    };
    let limit = match params.get("limit") {
        Some(limit) => limit
            .parse::<usize>()
            .map_err(|_| bad_request("invalid limit"))?,
        None => 0,
    };
    let descending = match params.get("direction").map(String::as_str) {
        None | Some("asc") => false,
        Some("desc") => true,
        Some(_) => return Err(bad_request("invalid direction")),
    };
    // Remaining parameters (timezone, date, start, end, includeMarkdown,
    // includeHeadings) are accepted and ignored.

    let mut ordered: Vec<Lifelog> = db.as_ref().clone();
    if descending {
        ordered.reverse();
    }

    let total = ordered.len();
    let remaining = total.saturating_sub(offset);
    let take = if limit == 0 { remaining } else { limit.min(remaining) };
    let page: Vec<Lifelog> = ordered.into_iter().skip(offset).take(take).collect();

    let next_cursor = if offset + page.len() < total {
        Some((offset + page.len()).to_string())
    } else {
        None
    };

    Ok(Json(LifelogsEnvelope {
        meta: MetaSection {
            lifelogs: MetaLifelogs {
                next_cursor,
                count: page.len(),
            },
        },
        data: LifelogsData { lifelogs: page },
    }))
}

async fn get_lifelog(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Lifelog>, Rejection> {
    check_api_key(&headers)?;
    db.iter()
        .find(|lifelog| lifelog.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Lifelog not found".to_string(),
                }),
            )
        })
}
