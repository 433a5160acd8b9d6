// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, error};
use zkv_core::{InvokeError, InvokeResponse, VerifierContract, VerifyProofResponse};

pub struct AppState {
    pub contract: VerifierContract,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/info", get(info))
        .route("/v1/invoke/{function}", post(invoke))
        .route("/v1/verify", post(verify))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub system: String,
    pub curve: String,
    pub vk: String,
    pub proof: String,
    #[serde(rename = "witnessPublic")]
    pub witness_public: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<InvokeError> for ApiError {
    fn from(err: InvokeError) -> Self {
        let status = match err {
            InvokeError::UnknownFunction(_) => StatusCode::NOT_FOUND,
            InvokeError::Arity { .. } => StatusCode::BAD_REQUEST,
        };
        ApiError { status, message: err.to_string() }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!(error = %err, "verification task failed");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "verification task failed".into(),
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn info(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.contract.info())
}

// Verification is CPU-bound; keep it off the async workers.
async fn invoke(
    State(state): State<SharedState>,
    Path(function): Path<String>,
    Json(req): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, ApiError> {
    debug!(%function, args = req.args.len(), "invoke");
    let response =
        tokio::task::spawn_blocking(move || state.contract.invoke(&function, &req.args)).await??;
    Ok(Json(response))
}

async fn verify(
    State(state): State<SharedState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyProofResponse>, ApiError> {
    let record = tokio::task::spawn_blocking(move || {
        state
            .contract
            .evaluate(&req.system, &req.curve, &req.proof, &req.vk, &req.witness_public)
            .to_record()
    })
    .await?;
    Ok(Json(record))
}
