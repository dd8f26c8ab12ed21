#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use students_api::api::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    update_student_handler,
};
use students_api::domain::repositories::{StudentRepository, UpdateOutcome};
use students_api::error::AppError;
use students_api::state::AppState;

mockall::mock! {
    pub StudentRepo {}

    #[async_trait]
    impl StudentRepository for StudentRepo {
        async fn find_all(&self) -> Result<Vec<Value>, AppError>;
        async fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError>;
        async fn insert(&self, candidate: Value) -> Result<Value, AppError>;
        async fn update_by_id(&self, id: &str, changes: Value) -> Result<UpdateOutcome, AppError>;
        async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
    }
}

/// Builds a test server with the five student routes backed by `repository`.
pub fn make_server(repository: Arc<dyn StudentRepository>) -> TestServer {
    let state = AppState::new(repository);
    let app = Router::new()
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
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// In-memory stand-in for the raw collection binding.
///
/// Stores JSON objects verbatim under generated hex identifiers, merges
/// supplied fields on update, and reports only match/no-match — the same
/// observable contract as `CollectionStudentRepository`, minus the driver.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    records: Mutex<BTreeMap<String, Value>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_id(id: &str) -> Result<String, AppError> {
        ObjectId::parse_str(id)
            .map(|oid| oid.to_hex())
            .map_err(|e| {
                AppError::internal(
                    "Invalid student identifier",
                    json!({ "id": id, "details": e.to_string() }),
                )
            })
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Value>, AppError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError> {
        let key = Self::parse_id(id)?;
        Ok(self.records.lock().unwrap().get(&key).cloned())
    }

    async fn insert(&self, candidate: Value) -> Result<Value, AppError> {
        let Value::Object(mut record) = candidate else {
            return Err(AppError::internal(
                "Failed to encode student record",
                json!({}),
            ));
        };

        let id = ObjectId::new().to_hex();
        record.insert("_id".to_string(), Value::String(id.clone()));

        let record = Value::Object(record);
        self.records.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: &str, changes: Value) -> Result<UpdateOutcome, AppError> {
        let key = Self::parse_id(id)?;

        let mut records = self.records.lock().unwrap();
        let Some(Value::Object(record)) = records.get_mut(&key) else {
            return Err(AppError::not_found(
                "Student not found",
                json!({ "id": id }),
            ));
        };

        if let Value::Object(changes) = changes {
            for (field, value) in changes {
                record.insert(field, value);
            }
        }

        Ok(UpdateOutcome::Acknowledged)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let key = Self::parse_id(id)?;
        Ok(self.records.lock().unwrap().remove(&key).is_some())
    }
}
