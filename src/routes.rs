//! Router configuration for the student resource.
//!
//! # Route Structure
//!
//! - `GET    /students`       - List all students
//! - `POST   /students`       - Create a student
//! - `GET    /students/{id}`  - Fetch a student
//! - `PUT    /students/{id}`  - Update a student
//! - `DELETE /students/{id}`  - Delete a student
//! - `/*`                     - Static assets from `public/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    update_student_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The state carries the storage binding; by the time this is called the
/// binding has been constructed against a verified connection, so every
/// handler can rely on it.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .fallback_service(ServeDir::new("public"))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
