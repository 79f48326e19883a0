//! Student roster endpoints
//!
//! Reads accept any authenticated caller; mutations need a writer role.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::api::middleware::{RequireUser, RequireWriter};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Student;

/// Create the student router
pub fn create_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}

#[derive(Debug, Serialize)]
pub struct DeleteStudentResponse {
    pub message: String,
}

/// GET /api/students
pub async fn list_students(
    _user: RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.student_service.get_all().await?;
    Ok(Json(students))
}

/// GET /api/students/{id}
pub async fn get_student(
    _user: RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let student = state.student_service.get_by_id(&id).await?;
    Ok(Json(student))
}

/// POST /api/students
///
/// Any id in the body is ignored; storage assigns a new one.
pub async fn create_student(
    _writer: RequireWriter,
    State(state): State<AppState>,
    Json(student): Json<Option<Student>>,
) -> Result<Response, ApiError> {
    let created = state.student_service.create(student).await?;

    let location = created
        .id()
        .map(|id| format!("/api/students/{}", id))
        .ok_or_else(|| ApiError::internal("Created student has no id"))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// PUT /api/students/{id}
///
/// Replaces every field; the path id wins over any id in the body.
pub async fn update_student(
    _writer: RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(student): Json<Option<Student>>,
) -> Result<StatusCode, ApiError> {
    state.student_service.update(&id, student).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/students/{id}
pub async fn delete_student(
    _writer: RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteStudentResponse>, ApiError> {
    state.student_service.remove(&id).await?;

    Ok(Json(DeleteStudentResponse {
        message: format!("Student with Id={} deleted", id),
    }))
}
