//! HTTP Controller
//!
//! Axum-based REST API that delegates to the ledger layer.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::Engine as _;
use rust_decimal::Decimal;

use crate::ledger::error::LedgerError;
use crate::ledger::export::snapshot_to_csv;

use super::request::{SubmitTradeRequest, UpdateCapitalRequest};
use super::response::{
    CapitalResponse, ClearJournalResponse, ErrorResponse, HealthResponse, SnapshotResponse,
    SubmitTradeResponse, TradeImagesResponse, TradeResponse, ViolationResponse,
};
use super::store::SessionStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session store holding the journal and capital.
    pub store: Arc<SessionStore>,
    /// Application version.
    pub version: String,
}

impl AppState {
    /// Build state around a fresh store with the given capital.
    #[must_use]
    pub fn new(initial_capital: Decimal) -> Self {
        Self {
            store: Arc::new(SessionStore::new(initial_capital)),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/v1/trades",
            get(list_trades).post(submit_trade).delete(clear_journal),
        )
        .route("/api/v1/trades/{id}", get(get_trade).delete(remove_trade))
        .route("/api/v1/trades/{id}/images", get(get_trade_images))
        .route("/api/v1/snapshot", get(get_snapshot))
        .route("/api/v1/snapshot/csv", get(export_snapshot_csv))
        .route("/api/v1/capital", get(get_capital).put(update_capital))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Record a trade.
async fn submit_trade(
    State(state): State<AppState>,
    Json(request): Json<SubmitTradeRequest>,
) -> Response {
    let draft = match request.into_draft() {
        Ok(draft) => draft,
        Err(err) => return rejection(&err),
    };

    match state.store.submit(draft) {
        Ok(trade) => {
            tracing::info!(
                trade_id = trade.id,
                instrument = %trade.instrument,
                realized_pnl = %trade.realized_pnl,
                "trade recorded"
            );
            (
                StatusCode::CREATED,
                Json(SubmitTradeResponse {
                    ok: true,
                    trade: Some(TradeResponse::from(&trade)),
                    violations: Vec::new(),
                }),
            )
                .into_response()
        }
        Err(err) => rejection(&err),
    }
}

/// List every recorded trade in insertion order.
async fn list_trades(State(state): State<AppState>) -> impl IntoResponse {
    let trades: Vec<TradeResponse> =
        state.store.trades().iter().map(TradeResponse::from).collect();
    Json(trades)
}

/// Fetch one trade by id.
async fn get_trade(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get(id) {
        Some(trade) => (StatusCode::OK, Json(TradeResponse::from(&trade))).into_response(),
        None => not_found(id),
    }
}

/// Fetch the image attachments of a trade, base64-encoded.
async fn get_trade_images(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get(id) {
        Some(trade) => {
            let response = TradeImagesResponse {
                id: trade.id,
                before_image: trade.before_image.as_deref().map(encode_image),
                after_image: trade.after_image.as_deref().map(encode_image),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        None => not_found(id),
    }
}

/// Delete one trade by id.
async fn remove_trade(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.remove(id) {
        Some(trade) => {
            tracing::info!(trade_id = trade.id, "trade removed");
            (StatusCode::OK, Json(TradeResponse::from(&trade))).into_response()
        }
        None => not_found(id),
    }
}

/// Remove every trade from the journal.
async fn clear_journal(State(state): State<AppState>) -> impl IntoResponse {
    let removed = state.store.clear();
    tracing::info!(removed, "journal cleared");
    Json(ClearJournalResponse { removed })
}

/// Compute the full ledger snapshot.
async fn get_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(SnapshotResponse::from(state.store.snapshot()))
}

/// Export the ledger rows as CSV.
async fn export_snapshot_csv(State(state): State<AppState>) -> impl IntoResponse {
    let csv = snapshot_to_csv(&state.store.snapshot());
    ([(header::CONTENT_TYPE, "text/csv")], csv)
}

/// The starting capital in effect.
async fn get_capital(State(state): State<AppState>) -> impl IntoResponse {
    Json(CapitalResponse {
        initial_capital: state.store.initial_capital(),
    })
}

/// Replace the starting capital used for snapshots.
async fn update_capital(
    State(state): State<AppState>,
    Json(request): Json<UpdateCapitalRequest>,
) -> Response {
    if request.initial_capital < Decimal::ZERO {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "initial capital must not be negative".to_string(),
            }),
        )
            .into_response();
    }

    state.store.set_initial_capital(request.initial_capital);
    tracing::info!(initial_capital = %request.initial_capital, "starting capital updated");
    (
        StatusCode::OK,
        Json(CapitalResponse {
            initial_capital: request.initial_capital,
        }),
    )
        .into_response()
}

/// Map a ledger error to its HTTP rejection.
fn rejection(err: &LedgerError) -> Response {
    match err {
        LedgerError::Validation { violations } => {
            tracing::warn!(count = violations.len(), "trade rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SubmitTradeResponse {
                    ok: false,
                    trade: None,
                    violations: violations.iter().map(ViolationResponse::from).collect(),
                }),
            )
                .into_response()
        }
        LedgerError::TradeNotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}

fn not_found(id: u64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: LedgerError::TradeNotFound { id }.to_string(),
        }),
    )
        .into_response()
}

fn encode_image(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
