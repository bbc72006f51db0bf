//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::assignment::{Assignment, AssignmentDetails};
use crate::models::syllabus::{Syllabus, SyllabusDetails};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSyllabusRequest {
    pub prompt: String,
    #[serde(default)]
    pub details: SyllabusDetails,
    #[serde(default)]
    pub file_content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssignmentRequest {
    pub prompt: String,
    #[serde(default)]
    pub details: AssignmentDetails,
    #[serde(default)]
    pub file_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelCatalogResponse {
    pub data: Vec<Value>,
}

/// POST /api/v1/syllabi/generate
///
/// Runs the full generation pipeline and returns validated syllabus content.
/// Persistence is the caller's concern.
pub async fn handle_generate_syllabus(
    State(state): State<AppState>,
    Json(request): Json<GenerateSyllabusRequest>,
) -> Result<Json<Syllabus>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let syllabus = state
        .syllabi
        .generate(
            &request.prompt,
            &request.details,
            request.file_content.as_deref(),
        )
        .await?;

    Ok(Json(syllabus))
}

/// POST /api/v1/assignments/generate
pub async fn handle_generate_assignment(
    State(state): State<AppState>,
    Json(request): Json<GenerateAssignmentRequest>,
) -> Result<Json<Assignment>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let assignment = state
        .assignments
        .generate(
            &request.prompt,
            &request.details,
            request.file_content.as_deref(),
        )
        .await?;

    Ok(Json(assignment))
}

/// GET /api/v1/models
///
/// Proxies the provider's model catalog so operators can verify the
/// configured fallback identifiers are still valid.
pub async fn handle_list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelCatalogResponse>, AppError> {
    let data = state.provider.list_models().await?;
    Ok(Json(ModelCatalogResponse { data }))
}
