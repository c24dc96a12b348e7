//! Health check route

/// GET /health - liveness probe, plain-text `OK`.
pub async fn health() -> &'static str {
    "OK"
}
