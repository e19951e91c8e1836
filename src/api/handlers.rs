use crate::error::ServiceError;
use crate::service::{InferenceService, TextVerdict, UrlVerdict};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info_span};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUrlRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!(error = %self, "inference failed");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub async fn check_url(
    State(service): State<InferenceService>,
    Json(req): Json<CheckUrlRequest>,
) -> Result<Json<UrlVerdict>, ServiceError> {
    let span = info_span!("check_url", request_id = %Uuid::new_v4());
    let result = span.in_scope(|| service.check_url(&req.url))?;
    Ok(Json(result.into()))
}

pub async fn check_text(
    State(service): State<InferenceService>,
    Json(req): Json<CheckTextRequest>,
) -> Result<Json<TextVerdict>, ServiceError> {
    let span = info_span!("check_text", request_id = %Uuid::new_v4());
    let result = span.in_scope(|| service.check_text(&req.text))?;
    Ok(Json(result.into()))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
