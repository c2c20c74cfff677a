//! Cardapio Web Interface
//!
//! Server-rendered admin dashboard for managing a restaurant menu backend.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;

// Re-export the main functions
pub use server::build_app;
pub use state::AppState;
