//! Request handlers for the dashboard web interface

pub mod api;
pub mod forms;
pub mod pages;
