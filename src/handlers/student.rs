//! Student handlers: list, get, create, update, delete.

use crate::codec::decode_json;
use crate::error::AppError;
use crate::model::Student;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /students — all students ordered by school.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    tracing::info!("list students");
    let students = state.store.list_all().await?;
    Ok(Json(students))
}

/// GET /students/:student_id — one student, or an empty 200 when the id is unknown.
pub async fn get_one(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Response, AppError> {
    tracing::info!(student_id = %student_id, "get student");
    match state.store.get_by_id(&student_id).await {
        Ok(student) => Ok(Json(student).into_response()),
        Err(AppError::NotFound(_)) => {
            tracing::debug!(student_id = %student_id, "student not found, returning empty body");
            Ok(StatusCode::OK.into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /students — insert the student in the body.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, AppError> {
    tracing::info!("create student");
    let student: Option<Student> = decode_json(&body)?;
    state.store.insert(student.as_ref()).await?;
    Ok(StatusCode::OK)
}

/// PUT /students — overwrite the mutable fields of an existing student.
pub async fn update(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, AppError> {
    tracing::info!("update student");
    let student: Option<Student> = decode_json(&body)?;
    state.store.update(student.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /students/:student_id
pub async fn delete(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::info!(student_id = %student_id, "delete student");
    state.store.delete(&student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
