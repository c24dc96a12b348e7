//! Application state shared across handlers

use std::sync::Arc;

/// Shared application state
///
/// Holds the connection string only; `/tables` opens and closes its own
/// connection within the request, so no pool lives here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    database_url: String,
}

impl AppState {
    pub fn new(database_url: String) -> Self {
        Self {
            inner: Arc::new(AppStateInner { database_url }),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.inner.database_url
    }
}
