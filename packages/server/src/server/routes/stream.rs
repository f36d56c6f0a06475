//! SSE streaming endpoint.
//!
//! GET /api/streams/:topic?token=JWT
//!
//! Subscribes to the StreamHub by topic string and forwards JSON values as
//! SSE events.
//!
//! Auth strategy: JWT passed as `?token=` query param (EventSource can't
//! send custom headers), falling back to the Authorization header. Topic
//! authorization: `ledger:<user_id>` is readable only by that user;
//! `chat:<pair_key>` only by the two participants encoded in the key.

use std::convert::Infallible;

use axum::{
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;

use crate::domains::auth::Claims;
use crate::server::app::AxumAppState;

#[derive(Deserialize)]
pub struct StreamQuery {
    /// JWT token for authentication
    token: Option<String>,
}

/// SSE stream handler.
pub async fn stream_handler(
    Extension(state): Extension<AxumAppState>,
    Path(topic): Path<String>,
    Query(query): Query<StreamQuery>,
    headers: HeaderMap,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let token = query.token.or_else(|| extract_bearer_token(&headers));
    let token = token.ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state
        .jwt_service
        .verify_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    authorize_topic(&topic, &claims).map_err(|_| StatusCode::FORBIDDEN)?;

    let rx = state.server_deps.stream_hub.subscribe(&topic).await;

    // Stream with connected event and lag handling
    let connected = stream::once(async {
        Ok::<_, Infallible>(Event::default().event("connected").data("ok"))
    });

    let events = BroadcastStream::new(rx).filter_map(|result| async {
        match result {
            Ok(value) => {
                let event_name = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("message");
                Event::default()
                    .event(event_name)
                    .json_data(&value)
                    .ok()
                    .map(Ok)
            }
            Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
                Event::default()
                    .event("lagged")
                    .json_data(&serde_json::json!({ "missed": n }))
                    .ok()
                    .map(Ok)
            }
        }
    });

    Ok(Sse::new(connected.chain(events)).keep_alive(KeepAlive::default()))
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth = headers.get("authorization")?.to_str().ok()?;
    Some(auth.strip_prefix("Bearer ").unwrap_or(auth).to_string())
}

/// Check that the authenticated user may read the topic.
fn authorize_topic(topic: &str, claims: &Claims) -> Result<(), ()> {
    if let Some(user_id) = topic.strip_prefix("ledger:") {
        let user_id = uuid::Uuid::parse_str(user_id).map_err(|_| ())?;
        if user_id == claims.user_id {
            return Ok(());
        }
        return Err(());
    }

    if let Some(pair) = topic.strip_prefix("chat:") {
        let (a, b) = pair.split_once('_').ok_or(())?;
        let a = uuid::Uuid::parse_str(a).map_err(|_| ())?;
        let b = uuid::Uuid::parse_str(b).map_err(|_| ())?;
        if claims.user_id == a || claims.user_id == b {
            return Ok(());
        }
        return Err(());
    }

    Err(())
}
