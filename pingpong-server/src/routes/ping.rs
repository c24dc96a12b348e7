//! Ping route

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    message: &'static str,
}

/// GET /ping - answers `{"message":"PONG"}`.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "PONG" })
}
