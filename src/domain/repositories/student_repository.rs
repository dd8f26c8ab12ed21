//! Repository trait for student data access.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Outcome of an update, reflecting what the active binding can report.
///
/// The raw collection binding applies a field merge and only learns whether a
/// record matched; the schema-mapped binding re-validates the touched fields
/// and reads the record back. The two behaviors are part of each binding's
/// contract and deliberately not unified.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// A record matched and the merge was applied; no record is returned.
    Acknowledged,
    /// The post-update record.
    Updated(Value),
}

/// Capability interface for the `students` collection.
///
/// Records cross this boundary as plain JSON values: the raw binding stores
/// whatever object it is handed, the schema-mapped binding deserializes and
/// validates before anything reaches storage. Identifiers are the textual
/// form taken from the URL path; adapters own the conversion to the native
/// identifier type.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CollectionStudentRepository`] -
///   raw driver collection, no schema enforcement
/// - [`crate::infrastructure::persistence::ModelStudentRepository`] -
///   schema-mapped model with write validation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns every persisted student record, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Value>, AppError>;

    /// Finds a student by its textual identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no record matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// malformed identifier that cannot be converted to the native form.
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError>;

    /// Persists a candidate record and returns it with the generated
    /// identifier attached.
    ///
    /// The returned record is always the caller's payload plus the assigned
    /// identifier, never a driver-internal result shape.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the schema-mapped binding rejects
    /// the candidate. Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, candidate: Value) -> Result<Value, AppError>;

    /// Applies the supplied fields to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the identifier.
    /// Returns [`AppError::Validation`] if the schema-mapped binding rejects
    /// a field. Returns [`AppError::Internal`] on database errors.
    async fn update_by_id(&self, id: &str, changes: Value) -> Result<UpdateOutcome, AppError>;

    /// Deletes a record.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
}
