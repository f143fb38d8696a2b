//! Public content endpoints consumed by the storefront.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::content::{find_by_kind, visible_sections};
use crate::errors::AppError;
use crate::models::{Section, SectionKind};
use crate::AppState;

/// GET /api/content - All sections.
pub async fn get_content(State(state): State<AppState>) -> ApiResult<Vec<Section>> {
    let envelope = state.store.load_envelope().await;
    success(envelope.sections, envelope.revision)
}

/// GET /api/content/visible - Visible sections in render order.
pub async fn get_visible_content(State(state): State<AppState>) -> ApiResult<Vec<Section>> {
    let envelope = state.store.load_envelope().await;
    success(visible_sections(&envelope.sections), envelope.revision)
}

/// GET /api/content/kinds/:kind - First section of a kind, as the home page looks it up.
pub async fn get_section_by_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<Section> {
    let envelope = state.store.load_envelope().await;

    let Some(kind) = SectionKind::from_str(&kind) else {
        return error(
            AppError::BadRequest(format!("Unknown section type '{}'", kind)),
            envelope.revision,
        );
    };

    match find_by_kind(&envelope.sections, kind) {
        Some(section) => success(section.clone(), envelope.revision),
        None => error(
            AppError::NotFound(format!("No {} section", kind)),
            envelope.revision,
        ),
    }
}
