//! Application state shared across all request handlers.
//!
//! The `AppState` struct holds the shared resources request handlers need. It
//! is initialized once during startup and cloned cheaply for each request
//! through Axum's state extraction: the database connection is a pool handle
//! and the admin code service is reference-counted internally.

use sea_orm::DatabaseConnection;

use crate::service::admin_code::AdminCodeService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service holding the one-time admin bootstrap code.
    ///
    /// Generated at startup when no admin account exists and redeemed through
    /// the registration endpoint.
    pub admin_code_service: AdminCodeService,

    /// Application base URL for generating links in notifications and docs.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            app_url,
        }
    }
}
