//! Form submission handlers
//!
//! Form posts land on explicit routes and the business logic yields a
//! [`Navigation`] intent; only the axum handler turns that intent into an
//! actual response.

use crate::{session, state::AppState};
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use cardapio_core::CreateCategoryRequest;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Route targeted after a successful creation
const DASHBOARD_ROUTE: &str = "/dashboard";

/// Form fields for the category creation page
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    /// Submitted category name; an absent field deserializes to empty
    #[serde(default)]
    pub name: String,
}

/// Navigation intent produced by a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Redirect the client to the given route
    Redirect(&'static str),
    /// Keep the client on the current page
    Stay,
}

/// Handle a category creation submission
pub async fn submit_category(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<CategoryForm>,
) -> Response {
    match category_submission(&state, &headers, form).await {
        Navigation::Redirect(target) => Redirect::to(target).into_response(),
        Navigation::Stay => Html(include_str!("../../templates/category.html")).into_response(),
    }
}

/// Decide the navigation outcome for a category submission
///
/// An empty or missing name short-circuits with no side effects: no request
/// is sent and nothing is logged. A backend failure is logged exactly once
/// and suppressed; the user stays on the page. Only a resolved, successful
/// call yields a redirect.
async fn category_submission(
    state: &AppState,
    headers: &HeaderMap,
    form: CategoryForm,
) -> Navigation {
    let request = CreateCategoryRequest::new(form.name);
    if request.ensure_valid().is_err() {
        return Navigation::Stay;
    }

    // Credential absence is not an error here: the empty bearer value is
    // forwarded and the backend decides whether to reject it.
    let token = session::token_from_headers(headers, &state.config.session.cookie_name)
        .unwrap_or_default();

    match state.api_client.create_category(&request, &token).await {
        Ok(()) => Navigation::Redirect(DASHBOARD_ROUTE),
        Err(e) => {
            error!("Failed to create category: {e}");
            Navigation::Stay
        }
    }
}
