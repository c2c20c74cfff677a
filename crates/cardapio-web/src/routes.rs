//! Route definitions for the dashboard web interface

use crate::{
    handlers::{api, forms, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        .route("/dashboard", get(pages::dashboard))
        // Category form: page on GET, submission on POST
        .route(
            "/dashboard/category",
            get(pages::category_page).post(forms::submit_category),
        )
        // Health check
        .route("/health", get(api::health_check))
}
