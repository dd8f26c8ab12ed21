//! Student entity and write payloads for the schema-mapped binding.
//!
//! The raw collection binding works on untyped documents and never touches
//! these types; only [`crate::infrastructure::persistence::ModelStudentRepository`]
//! deserializes request bodies into them, which is where required-field and
//! type enforcement happens.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// A persisted student record.
///
/// The identifier is assigned by MongoDB on insert and immutable afterwards.
/// In JSON responses it is rendered as the 24-character hex form under the
/// `_id` key, matching what the raw binding returns for the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
    pub study: String,
}

/// Candidate record supplied by `POST /students`.
///
/// Unknown fields are rejected at deserialization, missing or ill-typed
/// required fields fail the same way. Content rules are layered on top with
/// `validator`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i64,
    #[validate(length(min = 1, message = "study must not be empty"))]
    pub study: String,
}

impl NewStudent {
    /// Converts the candidate into a record ready for insertion.
    /// The identifier stays unset so storage assigns it.
    pub fn into_student(self) -> Student {
        Student {
            id: None,
            name: self.name,
            age: self.age,
            study: self.study,
        }
    }
}

/// Field subset supplied by `PUT /students/{id}`.
///
/// `None` fields are left untouched. Serialization skips them so the patch
/// converts directly into a `$set` document containing only supplied fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "study must not be empty"))]
    pub study: Option<String>,
}

fn serialize_oid_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
