//! Page handlers for serving HTML templates

use axum::response::Html;

/// Dashboard page
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../templates/dashboard.html"))
}

/// Category creation form page
pub async fn category_page() -> Html<&'static str> {
    Html(include_str!("../../templates/category.html"))
}
