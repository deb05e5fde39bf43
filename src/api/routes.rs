//! REST endpoints: health check, listing browse, chat message.
//!
//! Every endpoint answers 200. "No results" and "empty message" are
//! reported in the body, never through the status code.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::chat::{ChatEngine, Outcome};
use crate::listings::{Listing, ListingParams, ListingQuery, ListingStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: ListingStore,
    pub chat: Arc<ChatEngine>,
}

impl AppState {
    /// State with the default chat rules over `store`.
    pub fn new(store: ListingStore) -> Self {
        let chat = Arc::new(ChatEngine::with_store(store.clone()));
        Self { store, chat }
    }
}

/// Build the Axum router with all routes, CORS and request tracing.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/properties", get(list_properties))
        .route("/message", post(post_message))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

// ── Listings ────────────────────────────────────────────────────────────

/// Body of `GET /properties`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PropertiesResponse<L = Listing> {
    pub count: usize,
    pub results: Vec<L>,
}

async fn list_properties(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> impl IntoResponse {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            debug!(error = %e, "Unparseable query string, treating as unconstrained");
            ListingParams::default()
        }
    };
    let query = ListingQuery::from_params(&params);
    let results = state.store.search(&query);

    Json(PropertiesResponse {
        count: results.len(),
        results,
    })
    .into_response()
}

// ── Chat ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct MessageRequest {
    #[serde(default)]
    message: Option<String>,
}

/// Body of `POST /message`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
}

/// Accepts any body. Missing, oversized or malformed JSON is read as an
/// empty message.
async fn post_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = body.unwrap_or_else(|e| {
        debug!(error = %e, "Unreadable message body, treating as empty");
        Bytes::new()
    });
    let request: MessageRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        if !body.is_empty() {
            debug!(error = %e, "Malformed message body, treating as empty");
        }
        MessageRequest::default()
    });

    let reply = state.chat.respond(request.message.as_deref().unwrap_or_default());
    match reply.outcome {
        Outcome::EmptyMessage => debug!("Empty message"),
        Outcome::Classified(intent) => info!(%intent, "Message answered"),
    }

    Json(MessageResponse { reply: reply.text })
}
