//! HTTP client for communicating with the restaurant backend API

use cardapio_core::{CreateCategoryRequest, Error, Result};
use reqwest::Client;

/// API client for making HTTP requests to the restaurant backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new menu category on the backend
    ///
    /// Issues `POST /category` with the request payload and an
    /// `Authorization: Bearer <token>` header. The token is attached
    /// verbatim; an empty token produces an empty bearer value and the
    /// backend decides whether to reject it. The success body is not
    /// inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the backend answers
    /// with a non-success status.
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
        token: &str,
    ) -> Result<()> {
        let url = format!("{}/category", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Other(format!("Failed to create category: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Backend {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
