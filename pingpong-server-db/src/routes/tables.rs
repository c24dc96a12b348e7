//! Table listing route
//!
//! Opens a fresh MySQL connection per request and releases it before
//! responding. Table names come back in whatever order the database
//! returns them.

use axum::{extract::State, Json};
use sqlx::{Connection, MySqlConnection, Row};
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /tables - lists the current database's tables as a JSON array.
pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let mut conn = MySqlConnection::connect(state.database_url()).await?;

    let rows = sqlx::query("SHOW TABLES").fetch_all(&mut conn).await?;

    let mut tables = Vec::with_capacity(rows.len());
    for row in &rows {
        tables.push(row.try_get::<String, _>(0)?);
    }

    if let Err(err) = conn.close().await {
        warn!("Failed to close database connection: {}", err);
    }

    Ok(Json(tables))
}
