//! HTTP endpoints: client log ingest, contact relay and health check.

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{future::Future, net::SocketAddr, sync::Arc};
use thiserror::Error;

use crate::logsink::{LogEntry, LogSink};
use crate::mail::{ContactMessage, Mailer};

pub struct AppState {
    pub sink: LogSink,
    pub mailer: Box<dyn Mailer>,
}

/// Errors surfaced to HTTP clients as `{"success": false, "error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(Ack {
            success: false,
            error: Some(self.to_string()),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Response body for every POST endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }
}

/// Response body for the `/healthz` endpoint.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Always "ok" when the server is running.
    pub status: String,
}

/// Log payload as sent by the browser. Everything but `message` is optional.
#[derive(Debug, Deserialize)]
pub struct LogRequest {
    level: Option<String>,
    message: Option<String>,
    timestamp: Option<String>,
    error: Option<Value>,
    context: Option<Value>,
}

impl LogRequest {
    fn into_entry(self, forced_level: Option<&str>) -> Result<LogEntry, ApiError> {
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing log message".into()))?;
        let level = match forced_level {
            Some(l) => l.to_string(),
            None => self.level.unwrap_or_else(|| "info".into()),
        };
        Ok(LogEntry {
            level,
            message,
            timestamp: self.timestamp,
            error: self.error,
            context: self.context,
        }
        .normalized())
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl ContactForm {
    fn validate(self) -> Result<ContactMessage, ApiError> {
        let present = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        match (present(self.name), present(self.email), present(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
                name,
                email,
                message,
            }),
            _ => Err(ApiError::BadRequest("Missing required fields".into())),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/log", post(ingest_log))
        .route("/api/log/error", post(ingest_error_log))
        .route("/api/contact", post(contact))
        .with_state(state)
}

/// Start the HTTP server and run until `shutdown` resolves.
pub async fn serve_http(
    addr: SocketAddr,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("[http] listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Health check endpoint.
async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn write_entry(state: &AppState, entry: LogEntry) -> Result<Json<Ack>, ApiError> {
    state.sink.append(&entry).await.map_err(|e| {
        log::error!("[http] log append failed: {}", e);
        ApiError::Internal("Failed to write log".into())
    })?;
    Ok(Json(Ack::ok()))
}

async fn ingest_log(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LogRequest>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(req) = payload?;
    let entry = req.into_entry(None)?;
    write_entry(&state, entry).await
}

async fn ingest_error_log(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LogRequest>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(req) = payload?;
    let entry = req.into_entry(Some("error"))?;
    write_entry(&state, entry).await
}

async fn contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(form) = payload?;
    let message = form.validate()?;
    state.mailer.send(&message).await.map_err(|e| {
        log::error!("[mail] contact relay failed: {}", e);
        ApiError::Internal("Failed to send message".into())
    })?;
    Ok(Json(Ack::ok()))
}
