// Library exports for the binary and for testing

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;

pub use app::{create_app, AppState};
