//! Handlers for the five student CRUD endpoints.
//!
//! Each handler performs exactly one storage operation through the injected
//! [`crate::domain::repositories::StudentRepository`] and maps the result to
//! an HTTP response. Request and response bodies are plain JSON values; what
//! enforcement happens on them is the active binding's business.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::domain::repositories::UpdateOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every student record.
///
/// # Endpoint
///
/// `GET /students`
///
/// The response is unbounded and in storage order.
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let students = state.students.find_all().await?;
    Ok(Json(Value::Array(students)))
}

/// Fetches a single student by identifier.
///
/// # Endpoint
///
/// `GET /students/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no record matches. A malformed identifier is an
/// operational failure (500).
pub async fn get_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    match state.students.find_by_id(&id).await? {
        Some(student) => Ok(Json(student)),
        None => Err(AppError::not_found(
            "Student not found",
            json!({ "id": id }),
        )),
    }
}

/// Creates a student record.
///
/// # Endpoint
///
/// `POST /students`
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "age": 21, "study": "CS" }
/// ```
///
/// The raw binding stores arbitrary extra fields verbatim; the schema-mapped
/// binding rejects them along with missing or ill-typed required fields.
///
/// # Response
///
/// 201 Created with the persisted record, generated identifier included.
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let created = state.students.insert(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Applies the supplied fields to an existing student.
///
/// # Endpoint
///
/// `PUT /students/{id}`
///
/// # Response
///
/// Depends on the active binding: the raw binding answers with a
/// confirmation message, the schema-mapped binding with the post-update
/// record.
///
/// # Errors
///
/// Returns 404 Not Found if no record matches.
pub async fn update_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    match state.students.update_by_id(&id, payload).await? {
        UpdateOutcome::Updated(student) => Ok(Json(student)),
        UpdateOutcome::Acknowledged => {
            Ok(Json(json!({ "message": "Student updated successfully" })))
        }
    }
}

/// Deletes a student record.
///
/// # Endpoint
///
/// `DELETE /students/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no record matches.
pub async fn delete_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let deleted = state.students.delete_by_id(&id).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Student not found",
            json!({ "id": id }),
        ));
    }

    Ok(Json(json!({ "message": "Student deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStudentRepository;
    use std::sync::Arc;

    fn state_with(repository: MockStudentRepository) -> AppState {
        AppState::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn test_update_acknowledged_maps_to_confirmation() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update_by_id()
            .times(1)
            .returning(|_, _| Ok(UpdateOutcome::Acknowledged));

        let Json(body) = update_student_handler(
            Path("665f1f77bcf86cd799439011".to_string()),
            State(state_with(repo)),
            Json(json!({ "age": 22 })),
        )
        .await
        .unwrap();

        assert_eq!(body["message"], "Student updated successfully");
    }

    #[tokio::test]
    async fn test_update_record_outcome_maps_to_record() {
        let mut repo = MockStudentRepository::new();
        repo.expect_update_by_id().times(1).returning(|_, _| {
            Ok(UpdateOutcome::Updated(
                json!({ "_id": "665f1f77bcf86cd799439011", "name": "Ana", "age": 22, "study": "CS" }),
            ))
        });

        let Json(body) = update_student_handler(
            Path("665f1f77bcf86cd799439011".to_string()),
            State(state_with(repo)),
            Json(json!({ "age": 22 })),
        )
        .await
        .unwrap();

        assert_eq!(body["age"], 22);
    }

    #[tokio::test]
    async fn test_get_miss_becomes_not_found() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = get_student_handler(
            Path("665f1f77bcf86cd799439099".to_string()),
            State(state_with(repo)),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_miss_becomes_not_found() {
        let mut repo = MockStudentRepository::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(false));

        let result = delete_student_handler(
            Path("665f1f77bcf86cd799439099".to_string()),
            State(state_with(repo)),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
