//! Content store: persists and retrieves the versioned section collection.
//!
//! Writes are validated and normalized; reads are trusted and never fail,
//! falling back to the built-in defaults instead.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use super::collection::SectionCollection;
use super::order::{check_bounds, reorder};
use super::validate::validate_collection;
use super::{default_sections, ContentEdit};
use crate::db::ContentStorage;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{
    AddSectionRequest, ContentEnvelope, Section, UpdateSectionRequest, CONTENT_VERSION,
};

/// Storage key the envelope lives under.
pub const STORAGE_KEY: &str = "homepage_content";

pub const INVALID_CONTENT_MESSAGE: &str = "Some sections contain invalid content";

/// Outcome of a write. Errors carry the revision observed under the writer lock.
pub type StoreResult = Result<ContentEnvelope, AppErrorWithRevision>;

/// What the storage key currently holds.
enum Stored {
    /// Decoded envelope, or defaults standing in for an empty or unreadable value
    Current(ContentEnvelope),
    /// Envelope from another content version, due to be replaced by the defaults
    Stale { revision: i64 },
}

impl Stored {
    fn revision(&self) -> i64 {
        match self {
            Stored::Current(envelope) => envelope.revision,
            Stored::Stale { revision } => *revision,
        }
    }

    fn into_sections(self) -> Vec<Section> {
        match self {
            Stored::Current(envelope) => envelope.sections,
            Stored::Stale { .. } => default_sections(),
        }
    }
}

pub struct ContentStore {
    storage: Arc<dyn ContentStorage>,
    /// Serializes every read-check-write against storage.
    write_lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(storage: Arc<dyn ContentStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// The current section list, or the defaults when nothing usable is stored.
    pub async fn load(&self) -> Vec<Section> {
        self.load_envelope().await.sections
    }

    /// Read the stored envelope.
    ///
    /// - nothing stored: defaults
    /// - unreadable or not JSON: defaults, storage untouched
    /// - other content version: storage overwritten with defaults, defaults returned
    /// - sections not decodable: defaults, storage untouched
    ///
    /// Stored sections are returned as-is, without re-validation.
    pub async fn load_envelope(&self) -> ContentEnvelope {
        match self.read_stored().await {
            Ok(Stored::Current(envelope)) => envelope,
            Ok(Stored::Stale { .. }) => self.replace_stale().await,
            Err(e) => {
                tracing::error!("Failed to read homepage content: {}", e);
                ContentEnvelope::new(default_sections(), 0)
            }
        }
    }

    /// Overwrite a stale envelope with the defaults, unless a writer got there first.
    async fn replace_stale(&self) -> ContentEnvelope {
        let _guard = self.write_lock.lock().await;
        match self.read_stored().await {
            Ok(Stored::Current(envelope)) => envelope,
            Ok(Stored::Stale { revision }) => {
                tracing::info!(
                    "Stored content is not version {}, restoring defaults",
                    CONTENT_VERSION
                );
                let envelope =
                    ContentEnvelope::new(default_sections(), revision.saturating_add(1));
                if let Err(e) = self.write(&envelope).await {
                    tracing::error!("Failed to overwrite stale homepage content: {}", e);
                }
                envelope
            }
            Err(e) => {
                tracing::error!("Failed to read homepage content: {}", e);
                ContentEnvelope::new(default_sections(), 0)
            }
        }
    }

    /// Decode the storage key. Storage failures are returned, not papered over.
    async fn read_stored(&self) -> Result<Stored, AppError> {
        let Some(raw) = self.storage.get(STORAGE_KEY).await? else {
            tracing::debug!("No stored homepage content, using defaults");
            return Ok(Stored::Current(ContentEnvelope::new(default_sections(), 0)));
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Stored homepage content is not valid JSON: {}", e);
                return Ok(Stored::Current(ContentEnvelope::new(default_sections(), 0)));
            }
        };

        let revision = stored_revision(&value);
        if value.get("version").and_then(Value::as_str) != Some(CONTENT_VERSION) {
            return Ok(Stored::Stale { revision });
        }

        match serde_json::from_value::<ContentEnvelope>(value) {
            Ok(envelope) => Ok(Stored::Current(envelope)),
            Err(e) => {
                tracing::warn!("Stored homepage sections could not be decoded: {}", e);
                Ok(Stored::Current(ContentEnvelope::new(
                    default_sections(),
                    revision,
                )))
            }
        }
    }

    /// Read for a write. Must be called with the writer lock held.
    async fn read_for_write(&self) -> Result<Stored, AppErrorWithRevision> {
        self.read_stored().await.map_err(|e| e.with_revision(0))
    }

    pub async fn current_revision(&self) -> i64 {
        self.load_envelope().await.revision
    }

    /// Validate, normalize and persist `sections`, replacing whatever was stored.
    ///
    /// Refused saves write nothing. With `expected_revision` set, the save is
    /// also refused if another write happened since that revision was read.
    pub async fn save(
        &self,
        sections: Vec<Section>,
        expected_revision: Option<i64>,
    ) -> StoreResult {
        let _guard = self.write_lock.lock().await;
        let current = self.read_for_write().await?.revision();
        self.commit(sections, expected_revision, current)
            .await
            .map_err(|e| e.with_revision(current))
    }

    async fn commit(
        &self,
        sections: Vec<Section>,
        expected_revision: Option<i64>,
        current: i64,
    ) -> Result<ContentEnvelope, AppError> {
        check_bounds(sections.len())?;
        if !validate_collection(&sections) {
            return Err(AppError::Validation(INVALID_CONTENT_MESSAGE.to_string()));
        }

        if let Some(expected) = expected_revision {
            if expected != current {
                return Err(AppError::Conflict {
                    message: format!(
                        "Revision mismatch: expected {}, current {}",
                        expected, current
                    ),
                    current_revision: current,
                });
            }
        }

        let envelope = ContentEnvelope::new(reorder(sections), current.saturating_add(1));
        self.write(&envelope).await?;
        tracing::info!(
            "Saved {} homepage sections at revision {}",
            envelope.sections.len(),
            envelope.revision
        );
        Ok(envelope)
    }

    async fn write(&self, envelope: &ContentEnvelope) -> Result<(), AppError> {
        let json = serde_json::to_string(envelope)
            .map_err(|e| AppError::Internal(format!("Failed to encode content: {}", e)))?;
        self.storage.set(STORAGE_KEY, &json).await
    }

    /// Load a working copy, apply `mutation`, then save the result.
    ///
    /// The whole read-modify-write holds the writer lock. A failed read or
    /// mutation writes nothing.
    pub async fn mutate<F>(&self, expected_revision: Option<i64>, mutation: F) -> StoreResult
    where
        F: FnOnce(&mut SectionCollection) -> Result<(), AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let stored = self.read_for_write().await?;
        let current = stored.revision();

        let mut collection = SectionCollection::new(stored.into_sections());
        mutation(&mut collection).map_err(|e| e.with_revision(current))?;
        tracing::debug!("Mutation produced {} sections", collection.count());

        self.commit(collection.into_sections(), expected_revision, current)
            .await
            .map_err(|e| e.with_revision(current))
    }

    pub async fn replace_all(
        &self,
        sections: Vec<Section>,
        expected_revision: Option<i64>,
    ) -> StoreResult {
        self.save(sections, expected_revision).await
    }

    pub async fn add_section(&self, request: &AddSectionRequest) -> StoreResult {
        self.mutate(request.expected_revision, |c| c.add(request).map(drop))
            .await
    }

    pub async fn duplicate_section(&self, id: &str, expected_revision: Option<i64>) -> StoreResult {
        self.mutate(expected_revision, |c| c.duplicate(id).map(drop))
            .await
    }

    pub async fn remove_section(&self, id: &str, expected_revision: Option<i64>) -> StoreResult {
        self.mutate(expected_revision, |c| c.remove(id).map(drop))
            .await
    }

    pub async fn move_section(
        &self,
        from: usize,
        to: usize,
        expected_revision: Option<i64>,
    ) -> StoreResult {
        self.mutate(expected_revision, |c| c.move_section(from, to))
            .await
    }

    pub async fn toggle_visibility(&self, id: &str, expected_revision: Option<i64>) -> StoreResult {
        self.mutate(expected_revision, |c| c.toggle_visibility(id).map(drop))
            .await
    }

    pub async fn update_section(&self, id: &str, request: &UpdateSectionRequest) -> StoreResult {
        self.mutate(request.expected_revision, |c| c.update(id, request))
            .await
    }

    pub async fn edit_section_content(
        &self,
        id: &str,
        edits: &[ContentEdit],
        expected_revision: Option<i64>,
    ) -> StoreResult {
        self.mutate(expected_revision, |c| c.edit_content(id, edits))
            .await
    }

    /// Replace stored content with the defaults.
    pub async fn reset(&self, expected_revision: Option<i64>) -> StoreResult {
        self.save(default_sections(), expected_revision).await
    }
}

fn stored_revision(value: &Value) -> i64 {
    value.get("revision").and_then(Value::as_i64).unwrap_or(0)
}
