//! # Students API
//!
//! A CRUD REST service for student records built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Student` entity and the
//!   `StudentRepository` capability trait
//! - **Infrastructure Layer** ([`infrastructure`]) - Two MongoDB adapters:
//!   a raw driver collection and a schema-mapped model
//! - **API Layer** ([`api`]) - REST handlers for the five CRUD endpoints
//!
//! The two storage adapters implement identical REST semantics and are
//! selected once at startup via `STORAGE_BINDING`; they differ only in
//! schema enforcement and update-response shape.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URL="mongodb://localhost:27017"
//! export STORAGE_BINDING="collection"   # or "model"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{NewStudent, Student, StudentPatch};
    pub use crate::domain::repositories::{StudentRepository, UpdateOutcome};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
