//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use cardapio_core::Config;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
#[must_use]
pub fn build_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));

    build_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
