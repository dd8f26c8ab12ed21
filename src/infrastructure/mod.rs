//! Infrastructure layer: storage adapters.

pub mod persistence;
