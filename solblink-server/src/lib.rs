//! Solana Action server for SOL transfers.
//!
//! Serves the `transfer-sol` action: wallets fetch its metadata, pick an
//! amount, and receive an unsigned transfer transaction to sign.
//!
//! # Modules
//!
//! - [`handlers`] — Axum route handlers and router builder
//! - [`error`] — Action server error types
//! - [`config`] — Server configuration with environment variable expansion

pub mod config;
pub mod error;
pub mod handlers;

use std::path::Path;

use axum::Router;
use axum::http::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::response::Response;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use handlers::{AppState, SharedState, action_router};

/// Version of the Solana Actions protocol the responses follow.
pub const ACTION_VERSION: &str = "2.4";

/// Header carrying [`ACTION_VERSION`].
pub static X_ACTION_VERSION: HeaderName = HeaderName::from_static("x-action-version");

/// Header carrying the CAIP-2 ids of the chains the action transacts on.
pub static X_BLOCKCHAIN_IDS: HeaderName = HeaderName::from_static("x-blockchain-ids");

/// Builds the complete application: action routes, static files for every
/// other path, CORS, action identity headers and request tracing.
pub fn app(state: SharedState, static_dir: &Path) -> Router {
    let blockchain_ids = state.provider.chain_id().to_string();

    action_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_ACTION_VERSION.clone(),
            HeaderValue::from_static(ACTION_VERSION),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_BLOCKCHAIN_IDS.clone(),
            move |_: &Response| HeaderValue::from_str(&blockchain_ids).ok(),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION, CONTENT_ENCODING, ACCEPT_ENCODING])
                .expose_headers([X_ACTION_VERSION.clone(), X_BLOCKCHAIN_IDS.clone()]),
        )
        .layer(TraceLayer::new_for_http())
}
