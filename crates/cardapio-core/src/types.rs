//! Domain types shared between the dashboard and the backend API

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a menu category via `POST /category`
///
/// Transient: built from submitted form data and handed to the backend
/// immediately. The backend owns the created category; this side keeps no
/// identity or lifecycle for it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category display name, must be non-empty
    #[validate(length(min = 1, message = "Category name must not be empty"))]
    pub name: String,
}

impl CreateCategoryRequest {
    /// Build a creation request from a raw form value
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check the non-empty invariant before the request leaves this side
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] when the name is empty.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        self.validate().map_err(|e| crate::Error::Validation {
            field: "name".to_string(),
            message: e.to_string(),
        })
    }
}
