//! Read-side helpers for the public rendering surface.

use crate::models::{Section, SectionKind};

/// Visible sections in render order.
pub fn visible_sections(sections: &[Section]) -> Vec<Section> {
    let mut visible: Vec<Section> = sections.iter().filter(|s| s.is_visible).cloned().collect();
    visible.sort_by_key(|s| s.order);
    visible
}

/// First section of `kind`, the way the home page picks its blocks.
pub fn find_by_kind(sections: &[Section], kind: SectionKind) -> Option<&Section> {
    sections.iter().find(|s| s.kind() == kind)
}
