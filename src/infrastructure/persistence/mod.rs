//! MongoDB implementations of the student repository.
//!
//! Two adapters share the trait: [`CollectionStudentRepository`] talks to a
//! raw `Collection<Document>`, [`ModelStudentRepository`] goes through the
//! typed [`crate::domain::entities::Student`] model. Exactly one is selected
//! at startup.

mod collection_student_repository;
mod model_student_repository;

pub use collection_student_repository::CollectionStudentRepository;
pub use model_student_repository::ModelStudentRepository;

use crate::error::AppError;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde_json::{Value, json};

/// Name of the backing collection, shared by both adapters.
pub const STUDENTS_COLLECTION: &str = "students";

/// Converts the textual path-parameter identifier into a native `ObjectId`.
///
/// A malformed identifier is reported as an operational failure (500), not a
/// client error. Documented behavior inherited from the service contract.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        AppError::internal(
            "Invalid student identifier",
            json!({ "id": id, "details": e.to_string() }),
        )
    })
}

/// Renders a stored document as response JSON, with the `_id` field in its
/// hex form instead of the extended-JSON `{"$oid": ...}` shape.
pub(crate) fn document_to_json(mut doc: Document) -> Result<Value, AppError> {
    let id = doc.remove("_id");

    let mut value = serde_json::to_value(&doc).map_err(to_json_error)?;
    if let (Some(object), Some(id)) = (value.as_object_mut(), id) {
        let rendered = match id {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            other => serde_json::to_value(other).map_err(to_json_error)?,
        };
        object.insert("_id".to_string(), rendered);
    }

    Ok(value)
}

fn to_json_error(e: serde_json::Error) -> AppError {
    AppError::internal(
        "Failed to encode student record",
        json!({ "details": e.to_string() }),
    )
}
