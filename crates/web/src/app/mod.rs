//! Web application wiring (Axum router + session state).
//!
//! - `session.rs`: the in-memory store and view state for the running process
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form payloads and entry-time validation
//! - `view.rs`: HTML rendering
//! - `errors.rs`: rejected actions as user-facing notices

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod session;
pub mod view;

pub use session::{Session, SharedSession};

/// State shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    /// Display label for money amounts.
    pub currency: Arc<str>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::shared(),
            currency: Arc::from(config.currency.as_str()),
        }
    }
}

/// Build the full HTTP router with a fresh, empty session.
pub fn build_app(config: &AppConfig) -> Router {
    build_app_with_state(AppState::new(config))
}

/// Build the router around existing state (tests inspect the session directly).
pub fn build_app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
