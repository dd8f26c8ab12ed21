//! API layer: request handlers.

pub mod handlers;
