//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::domain::repositories::StudentRepository;

/// Application state, cloned cheaply into every request.
///
/// The storage binding is chosen once at startup and injected here as a
/// trait object; handlers never look up a connection or decide between
/// bindings per request.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}
