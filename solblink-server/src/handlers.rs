//! Axum route handlers for the action server.
//!
//! Serves the `actions.json` discovery document and both halves of the
//! `transfer-sol` action.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use solblink::action::{ActionGetResponse, ActionPostRequest, ActionPostResponse};
use solblink::discovery::ActionsJson;
use solblink::params::{TransferDefaults, TransferQuery};
use solblink_svm::transfer::{TRANSFER_SOL_PATH, build_transfer_transaction};
use solblink_svm::{Address, SolanaChainProviderLike, TransferSolAction};

use crate::error::ActionServerError;

/// Origin used when neither a public base URL nor a `Host` header is known.
const FALLBACK_ORIGIN: &str = "http://localhost";

/// State shared by every request.
#[allow(missing_debug_implementations)]
pub struct AppState {
    /// Chain reads for building transactions.
    pub provider: Arc<dyn SolanaChainProviderLike>,
    /// Fallbacks for absent query parameters.
    pub defaults: TransferDefaults<Address>,
    /// Branding and preset amounts.
    pub action: TransferSolAction,
    /// Public origin used in links, overriding the request's `Host`.
    pub public_origin: Option<String>,
}

/// Shared application state.
pub type SharedState = Arc<AppState>;

/// Decoded query string in wire order, repeated keys included.
type QueryPairs = Vec<(String, String)>;

fn transfer_query(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<TransferQuery, ActionServerError> {
    let Query(pairs) = query?;
    Ok(pairs.into_iter().collect())
}

/// `GET /` — Plain-text greeting.
pub async fn get_root() -> &'static str {
    "hi"
}

/// `GET /actions.json` — Discovery document mapping site paths to actions.
pub async fn get_actions_json() -> Json<ActionsJson> {
    Json(ActionsJson::passthrough())
}

/// `GET /api/actions/transfer-sol` — Action metadata.
///
/// # Errors
///
/// Returns 400 if `to` or `amount` is invalid.
pub async fn get_transfer_sol(
    State(state): State<SharedState>,
    headers: HeaderMap,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<ActionGetResponse>, ActionServerError> {
    let params = transfer_query(query)?.validate(&state.defaults)?;
    let origin = request_origin(state.public_origin.as_deref(), &headers);
    Ok(Json(state.action.metadata(&origin, &params.to)))
}

/// `POST /api/actions/transfer-sol` — Unsigned transfer transaction.
///
/// The body is `{"account": "<base58>"}`; an empty body is treated as `{}`.
///
/// # Errors
///
/// Returns 400 on invalid parameters, a missing or invalid account, an amount
/// below the rent-exempt minimum, or a failed RPC call.
pub async fn post_transfer_sol(
    State(state): State<SharedState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionServerError> {
    let params = transfer_query(query)?.validate(&state.defaults)?;
    let request: ActionPostRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ActionPostRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };
    let transfer =
        build_transfer_transaction(&*state.provider, request.account.as_deref(), &params).await?;
    Ok(Json(transfer.into_post_response()?))
}

/// `GET /health` — Liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Returns the scheme and authority clients reached the server at.
///
/// Prefers the configured public origin, then the `Host` header with the
/// scheme from `X-Forwarded-Proto` (default `http`).
pub fn request_origin(public_origin: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(origin) = public_origin {
        return origin.to_owned();
    }
    let Some(host) = headers.get(HOST).and_then(|h| h.to_str().ok()) else {
        return FALLBACK_ORIGIN.to_owned();
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map_or("http", str::trim);
    format!("{scheme}://{host}")
}

/// Creates an Axum [`axum::Router`] with all action endpoints.
///
/// Endpoints:
/// - `GET /` — greeting
/// - `GET /health` — liveness check
/// - `GET /actions.json` — discovery document
/// - `GET /api/actions/transfer-sol` — action metadata
/// - `POST /api/actions/transfer-sol` — unsigned transaction
pub fn action_router(state: SharedState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(get_root))
        .route("/health", axum::routing::get(health))
        .route("/actions.json", axum::routing::get(get_actions_json))
        .route(
            TRANSFER_SOL_PATH,
            axum::routing::get(get_transfer_sol).post(post_transfer_sol),
        )
        .with_state(state)
}
