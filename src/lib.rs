//! Camp signups: a JSON REST backend for campers, activities, and the
//! signups joining them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::app_routes;
pub use state::AppState;
pub use store::ensure_database_exists;
