//! Persisted content envelope.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Section;

/// Version tag written into every envelope. Stored envelopes carrying any
/// other tag are discarded on load.
pub const CONTENT_VERSION: &str = "1.1";

/// The versioned wrapper stored under the homepage content key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEnvelope {
    pub version: String,
    /// Monotonic write counter used for optimistic concurrency control
    #[serde(default)]
    pub revision: i64,
    pub sections: Vec<Section>,
    pub last_updated: String,
}

impl ContentEnvelope {
    /// Wrap `sections` in a current-version envelope stamped with the current time.
    pub fn new(sections: Vec<Section>, revision: i64) -> Self {
        Self {
            version: CONTENT_VERSION.to_string(),
            revision,
            sections,
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub last_updated: String,
}

impl From<&ContentEnvelope> for RevisionInfo {
    fn from(envelope: &ContentEnvelope) -> Self {
        Self {
            revision_id: envelope.revision,
            last_updated: envelope.last_updated.clone(),
        }
    }
}
