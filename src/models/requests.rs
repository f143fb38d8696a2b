//! Request bodies for the admin content endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::{Section, SectionKind};
use crate::content::ContentEdit;

/// Request body for replacing the whole section collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentRequest {
    pub sections: Vec<Section>,
    /// Expected revision for optimistic concurrency control
    #[serde(default)]
    pub expected_revision: Option<i64>,
}

/// Request body for adding a new section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSectionRequest {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Falls back to the kind's default title
    #[serde(default)]
    pub title: Option<String>,
    /// Falls back to the kind's template content
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub expected_revision: Option<i64>,
}

fn default_visible() -> bool {
    true
}

/// Request body for updating an existing section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSectionRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// Changing the type requires new `content` for that type
    #[serde(default, rename = "type")]
    pub kind: Option<SectionKind>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub is_visible: Option<bool>,
    #[serde(default)]
    pub expected_revision: Option<i64>,
}

/// Request body for applying editor operations to a section's content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditContentRequest {
    pub edits: Vec<ContentEdit>,
    #[serde(default)]
    pub expected_revision: Option<i64>,
}

/// Request body for moving a section to a new position (drag and drop).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSectionRequest {
    pub from: usize,
    pub to: usize,
    #[serde(default)]
    pub expected_revision: Option<i64>,
}

/// Query parameters for mutations that carry no body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionQuery {
    #[serde(default)]
    pub expected_revision: Option<i64>,
}
