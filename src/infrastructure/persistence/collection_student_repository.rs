//! Raw-collection implementation of the student repository.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};
use serde_json::{Value, json};

use super::{STUDENTS_COLLECTION, document_to_json, parse_object_id};
use crate::domain::repositories::{StudentRepository, UpdateOutcome};
use crate::error::AppError;

/// Pass-through adapter over a driver-level `Collection<Document>`.
///
/// No schema enforcement: whatever object the caller supplies is stored
/// verbatim, extra fields included. Updates are `$set` merges of the supplied
/// fields and report only whether a record matched.
pub struct CollectionStudentRepository {
    collection: Collection<Document>,
}

impl CollectionStudentRepository {
    /// Creates an adapter bound to the `students` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(STUDENTS_COLLECTION),
        }
    }

    /// Converts a request body into a BSON document for storage.
    fn to_document(value: &Value) -> Result<Document, AppError> {
        mongodb::bson::to_document(value).map_err(|e| {
            AppError::internal(
                "Failed to encode student record",
                json!({ "details": e.to_string() }),
            )
        })
    }
}

#[async_trait]
impl StudentRepository for CollectionStudentRepository {
    async fn find_all(&self) -> Result<Vec<Value>, AppError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut students = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            students.push(document_to_json(doc)?);
        }

        Ok(students)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError> {
        let oid = parse_object_id(id)?;

        let doc = self.collection.find_one(doc! { "_id": oid }).await?;
        doc.map(document_to_json).transpose()
    }

    async fn insert(&self, candidate: Value) -> Result<Value, AppError> {
        let mut doc = Self::to_document(&candidate)?;

        let result = self.collection.insert_one(doc.clone()).await?;

        // Pinned response contract: the caller's payload plus the assigned
        // identifier, independent of the driver's result shape.
        doc.insert("_id", result.inserted_id);
        document_to_json(doc)
    }

    async fn update_by_id(&self, id: &str, changes: Value) -> Result<UpdateOutcome, AppError> {
        let oid = parse_object_id(id)?;
        let changes = Self::to_document(&changes)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": changes })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(
                "Student not found",
                json!({ "id": id }),
            ));
        }

        Ok(UpdateOutcome::Acknowledged)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let oid = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
