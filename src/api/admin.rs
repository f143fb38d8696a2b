//! Admin content endpoints used by the dashboard.
//!
//! Every mutation answers with the full, normalized section list as saved.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::content::{template_content, StoreResult};
use crate::errors::AppError;
use crate::models::{
    AddSectionRequest, ContentEnvelope, EditContentRequest, MoveSectionRequest, RevisionInfo,
    RevisionQuery, SaveContentRequest, Section, SectionContent, SectionKind,
    UpdateSectionRequest,
};
use crate::AppState;

fn saved(result: StoreResult) -> ApiResult<Vec<Section>> {
    let envelope = result?;
    success(envelope.sections, envelope.revision)
}

/// GET /api/admin/content - The full envelope.
pub async fn get_envelope(State(state): State<AppState>) -> ApiResult<ContentEnvelope> {
    let envelope = state.store.load_envelope().await;
    let revision_id = envelope.revision;
    success(envelope, revision_id)
}

/// GET /api/admin/content/revision - Current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let envelope = state.store.load_envelope().await;
    success(RevisionInfo::from(&envelope), envelope.revision)
}

/// PUT /api/admin/content - Replace all sections.
pub async fn replace_content(
    State(state): State<AppState>,
    Json(request): Json<SaveContentRequest>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .replace_all(request.sections, request.expected_revision)
            .await,
    )
}

/// POST /api/admin/content/sections - Add a section.
pub async fn add_section(
    State(state): State<AppState>,
    Json(request): Json<AddSectionRequest>,
) -> ApiResult<Vec<Section>> {
    saved(state.store.add_section(&request).await)
}

/// PUT /api/admin/content/sections/:id - Update a section.
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSectionRequest>,
) -> ApiResult<Vec<Section>> {
    saved(state.store.update_section(&id, &request).await)
}

/// DELETE /api/admin/content/sections/:id - Remove a section.
pub async fn remove_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RevisionQuery>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .remove_section(&id, query.expected_revision)
            .await,
    )
}

/// POST /api/admin/content/sections/:id/duplicate - Duplicate a section.
pub async fn duplicate_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RevisionQuery>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .duplicate_section(&id, query.expected_revision)
            .await,
    )
}

/// POST /api/admin/content/sections/:id/visibility - Toggle visibility.
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RevisionQuery>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .toggle_visibility(&id, query.expected_revision)
            .await,
    )
}

/// PATCH /api/admin/content/sections/:id/content - Apply editor operations.
pub async fn edit_section_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EditContentRequest>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .edit_section_content(&id, &request.edits, request.expected_revision)
            .await,
    )
}

/// POST /api/admin/content/move - Move a section to a new position.
pub async fn move_section(
    State(state): State<AppState>,
    Json(request): Json<MoveSectionRequest>,
) -> ApiResult<Vec<Section>> {
    saved(
        state
            .store
            .move_section(request.from, request.to, request.expected_revision)
            .await,
    )
}

/// POST /api/admin/content/reset - Restore the default homepage.
pub async fn reset_content(
    State(state): State<AppState>,
    Query(query): Query<RevisionQuery>,
) -> ApiResult<Vec<Section>> {
    saved(state.store.reset(query.expected_revision).await)
}

/// GET /api/admin/content/templates/:kind - Starting content for a new section.
pub async fn get_template(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<SectionContent> {
    let revision_id = state.store.current_revision().await;

    match SectionKind::from_str(&kind) {
        Some(kind) => success(template_content(kind), revision_id),
        None => error(
            AppError::BadRequest(format!("Unknown section type '{}'", kind)),
            revision_id,
        ),
    }
}
