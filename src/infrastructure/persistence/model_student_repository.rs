//! Schema-mapped implementation of the student repository.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde_json::{Value, json};
use validator::Validate;

use super::{STUDENTS_COLLECTION, parse_object_id};
use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::{StudentRepository, UpdateOutcome};
use crate::error::AppError;

/// Adapter over a typed `Collection<Student>`.
///
/// Every write is deserialized into the model first: missing required
/// fields, wrong types, and unknown fields all fail before the driver is
/// touched, and content rules run through `validator`. Updates re-read the
/// record so the caller gets the post-update state back.
pub struct ModelStudentRepository {
    collection: Collection<Student>,
}

impl ModelStudentRepository {
    /// Creates an adapter bound to the `students` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(STUDENTS_COLLECTION),
        }
    }

    fn to_json(student: &Student) -> Result<Value, AppError> {
        serde_json::to_value(student).map_err(|e| {
            AppError::internal(
                "Failed to encode student record",
                json!({ "details": e.to_string() }),
            )
        })
    }
}

#[async_trait]
impl StudentRepository for ModelStudentRepository {
    async fn find_all(&self) -> Result<Vec<Value>, AppError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut students = Vec::new();
        while let Some(student) = cursor.try_next().await? {
            students.push(Self::to_json(&student)?);
        }

        Ok(students)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError> {
        let oid = parse_object_id(id)?;

        let student = self.collection.find_one(doc! { "_id": oid }).await?;
        student.as_ref().map(Self::to_json).transpose()
    }

    async fn insert(&self, candidate: Value) -> Result<Value, AppError> {
        let candidate: NewStudent = serde_json::from_value(candidate).map_err(|e| {
            AppError::validation(
                "Student validation failed",
                json!({ "details": e.to_string() }),
            )
        })?;
        candidate.validate()?;

        let mut student = candidate.into_student();
        let result = self.collection.insert_one(&student).await?;

        student.id = result.inserted_id.as_object_id();
        Self::to_json(&student)
    }

    async fn update_by_id(&self, id: &str, changes: Value) -> Result<UpdateOutcome, AppError> {
        let oid = parse_object_id(id)?;

        let patch: StudentPatch = serde_json::from_value(changes).map_err(|e| {
            AppError::validation(
                "Student validation failed",
                json!({ "details": e.to_string() }),
            )
        })?;
        patch.validate()?;

        let set = mongodb::bson::to_document(&patch).map_err(|e| {
            AppError::internal(
                "Failed to encode student record",
                json!({ "details": e.to_string() }),
            )
        })?;

        // An empty patch would make `$set` invalid; the record is read back
        // unchanged instead.
        let student = if set.is_empty() {
            self.collection.find_one(doc! { "_id": oid }).await?
        } else {
            self.collection
                .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
                .return_document(ReturnDocument::After)
                .await?
        };

        match student {
            Some(student) => Ok(UpdateOutcome::Updated(Self::to_json(&student)?)),
            None => Err(AppError::not_found(
                "Student not found",
                json!({ "id": id }),
            )),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let oid = parse_object_id(id)?;

        let student = self.collection.find_one_and_delete(doc! { "_id": oid }).await?;
        Ok(student.is_some())
    }
}
