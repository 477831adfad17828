use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::model::{Branch, SemesterData, SubjectData};
use crate::service::CurriculumService;
use crate::store::traits::Store;

pub type AppState<S> = Arc<CurriculumService<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub async fn list_branches<S: Store>(
    State(service): State<AppState<S>>,
) -> Result<Json<Vec<Branch>>, (StatusCode, Json<ErrorResponse>)> {
    match service.all_branches().await {
        Ok(branches) => Ok(Json(branches)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// Semesters of one branch. An unknown branch is indistinguishable from
/// an empty one: both answer 200 with an empty array.
pub async fn list_branch_semesters<S: Store>(
    State(service): State<AppState<S>>,
    Path(branch_id): Path<i32>,
) -> Result<Json<Vec<SemesterData>>, (StatusCode, Json<ErrorResponse>)> {
    match service.semesters_for_branch(branch_id).await {
        Ok(semesters) => Ok(Json(semesters)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn list_semester_subjects<S: Store>(
    State(service): State<AppState<S>>,
    Path((branch_id, semester_no)): Path<(i32, i32)>,
) -> Result<Json<Vec<SubjectData>>, (StatusCode, Json<ErrorResponse>)> {
    match service
        .subjects_for_branch_and_semester(branch_id, semester_no)
        .await
    {
        Ok(subjects) => Ok(Json(subjects)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}
