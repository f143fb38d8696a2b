//! In-memory section collection used as the admin's working copy.
//!
//! Mutations enforce the size bounds and keep `order` contiguous. Content
//! validity is left to `ContentStore::save`, which gates every write.

use chrono::Utc;

use super::editor::ContentEdit;
use super::order::{max_sections_error, min_sections_error, reorder, MAX_SECTIONS, MIN_SECTIONS};
use super::template_content;
use crate::errors::AppError;
use crate::models::{AddSectionRequest, Section, UpdateSectionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCollection {
    sections: Vec<Section>,
}

impl SectionCollection {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections: reorder(sections),
        }
    }

    #[cfg(test)]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn count(&self) -> usize {
        self.sections.len()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn position(&self, id: &str) -> Result<usize, AppError> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", id)))
    }

    fn ensure_room(&self) -> Result<(), AppError> {
        if self.sections.len() >= MAX_SECTIONS {
            return Err(max_sections_error());
        }
        Ok(())
    }

    fn push(&mut self, mut section: Section) -> String {
        section.order = self.sections.len() as u32;
        let id = section.id.clone();
        self.sections.push(section);
        self.sections = reorder(std::mem::take(&mut self.sections));
        id
    }

    /// Append a new section. Returns the generated id.
    pub fn add(&mut self, request: &AddSectionRequest) -> Result<String, AppError> {
        self.ensure_room()?;

        let content = match &request.content {
            Some(value) => request.kind.decode_content(value.clone())?,
            None => template_content(request.kind),
        };
        let title = request
            .title
            .clone()
            .unwrap_or_else(|| request.kind.default_title().to_string());

        Ok(self.push(Section {
            id: format!("section-{}", uuid::Uuid::new_v4()),
            title,
            content,
            is_visible: request.is_visible,
            order: 0,
        }))
    }

    /// Copy an existing section to the end of the collection. Returns the copy's id.
    pub fn duplicate(&mut self, id: &str) -> Result<String, AppError> {
        self.ensure_room()?;
        let original = self.sections[self.position(id)?].clone();

        let copy = Section {
            id: self.copy_id(&original.id),
            title: format!("{} (Copy)", original.title),
            ..original
        };
        Ok(self.push(copy))
    }

    /// `<id>-copy-<millis>`, with a numeric suffix if that is already taken.
    fn copy_id(&self, id: &str) -> String {
        let base = format!("{}-copy-{}", id, Utc::now().timestamp_millis());
        let mut candidate = base.clone();
        let mut n = 1;
        while self.get(&candidate).is_some() {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        candidate
    }

    pub fn remove(&mut self, id: &str) -> Result<Section, AppError> {
        let index = self.position(id)?;
        if self.sections.len() <= MIN_SECTIONS {
            return Err(min_sections_error());
        }
        let removed = self.sections.remove(index);
        self.sections = reorder(std::mem::take(&mut self.sections));
        Ok(removed)
    }

    /// Move the section at position `from` to position `to` (clamped to the end).
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), AppError> {
        if from >= self.sections.len() {
            return Err(AppError::BadRequest(format!(
                "Position {} out of range ({} sections)",
                from,
                self.sections.len()
            )));
        }
        let section = self.sections.remove(from);
        let to = to.min(self.sections.len());
        self.sections.insert(to, section);
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
        Ok(())
    }

    /// Flip visibility. Returns the new value.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, AppError> {
        let index = self.position(id)?;
        let section = &mut self.sections[index];
        section.is_visible = !section.is_visible;
        Ok(section.is_visible)
    }

    /// Apply a partial update; unspecified fields keep their current value.
    pub fn update(&mut self, id: &str, request: &UpdateSectionRequest) -> Result<(), AppError> {
        let index = self.position(id)?;
        let existing = &self.sections[index];

        let kind = request.kind.unwrap_or_else(|| existing.kind());
        let content = match &request.content {
            Some(value) => kind.decode_content(value.clone())?,
            None if kind != existing.kind() => {
                return Err(AppError::BadRequest(format!(
                    "Changing section type to '{}' requires new content",
                    kind
                )))
            }
            None => existing.content.clone(),
        };

        let section = &mut self.sections[index];
        if let Some(title) = &request.title {
            section.title = title.clone();
        }
        if let Some(is_visible) = request.is_visible {
            section.is_visible = is_visible;
        }
        section.content = content;
        Ok(())
    }

    /// Run editor operations against one section's content.
    pub fn edit_content(&mut self, id: &str, edits: &[ContentEdit]) -> Result<(), AppError> {
        if edits.is_empty() {
            return Err(AppError::BadRequest("No edits provided".to_string()));
        }
        let index = self.position(id)?;
        let edited = self.sections[index].content.with_edits(edits)?;
        self.sections[index].content = edited;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_sections;
    use crate::content::validate::validate_collection;
    use crate::models::{SectionContent, SectionKind};
    use serde_json::json;

    fn add_request(kind: SectionKind) -> AddSectionRequest {
        AddSectionRequest {
            kind,
            title: None,
            content: None,
            is_visible: true,
            expected_revision: None,
        }
    }

    fn orders(collection: &SectionCollection) -> Vec<u32> {
        collection.sections().iter().map(|s| s.order).collect()
    }

    #[test]
    fn test_duplicate_sponsor_section() {
        let mut collection = SectionCollection::new(default_sections());
        let copy_id = collection.duplicate("sponsors").unwrap();

        assert_eq!(collection.count(), 6);
        assert_eq!(orders(&collection), vec![0, 1, 2, 3, 4, 5]);

        let sponsors: Vec<&Section> = collection
            .sections()
            .iter()
            .filter(|s| s.kind() == SectionKind::Sponsor)
            .collect();
        assert_eq!(sponsors.len(), 2);
        assert_ne!(sponsors[0].id, sponsors[1].id);

        let copy = collection.get(&copy_id).unwrap();
        assert!(copy_id.starts_with("sponsors-copy-"));
        assert_eq!(copy.title, "Sponsors Section (Copy)");
        assert_eq!(copy.order, 5);
        assert_eq!(copy.content, sponsors[0].content);
        assert!(validate_collection(collection.sections()));
    }

    #[test]
    fn test_repeated_duplicates_get_distinct_ids() {
        let mut collection = SectionCollection::new(default_sections());
        let first = collection.duplicate("hero").unwrap();
        let second = collection.duplicate("hero").unwrap();
        assert_ne!(first, second);
        assert!(validate_collection(collection.sections()));
    }

    #[test]
    fn test_add_uses_template_and_next_order() {
        let mut collection = SectionCollection::new(default_sections());
        let id = collection.add(&add_request(SectionKind::Mission)).unwrap();

        let added = collection.get(&id).unwrap();
        assert!(id.starts_with("section-"));
        assert_eq!(added.title, "Mission Section");
        assert_eq!(added.order, 5);
        assert_eq!(added.content, template_content(SectionKind::Mission));
    }

    #[test]
    fn test_add_with_supplied_content() {
        let mut collection = SectionCollection::new(default_sections());
        let request = AddSectionRequest {
            title: Some("Winter Drive".to_string()),
            content: Some(json!({
                "heading": "Winter Drive",
                "subheading": "Help us reach 20,000 hoodies",
                "ctaText": "Give"
            })),
            ..add_request(SectionKind::Hero)
        };
        let id = collection.add(&request).unwrap();
        assert_eq!(collection.get(&id).unwrap().title, "Winter Drive");

        let mismatched = AddSectionRequest {
            content: Some(json!({ "stats": [] })),
            ..add_request(SectionKind::Hero)
        };
        assert!(collection.add(&mismatched).is_err());
        assert_eq!(collection.count(), 6);
    }

    #[test]
    fn test_add_and_duplicate_rejected_at_max() {
        let mut collection = SectionCollection::new(default_sections());
        while collection.count() < MAX_SECTIONS {
            collection.add(&add_request(SectionKind::Impact)).unwrap();
        }
        let before = collection.clone();

        let err = collection.add(&add_request(SectionKind::Hero)).unwrap_err();
        assert_eq!(err.message(), "Maximum of 10 sections allowed");
        assert!(collection.duplicate("hero").is_err());
        assert_eq!(collection, before);
    }

    #[test]
    fn test_remove_rejected_at_min() {
        let mut collection = SectionCollection::new(default_sections());
        for id in ["hero", "impact", "mission", "testimonials"] {
            collection.remove(id).unwrap();
        }
        assert_eq!(collection.count(), MIN_SECTIONS);
        assert_eq!(orders(&collection), vec![0]);

        let err = collection.remove("sponsors").unwrap_err();
        assert_eq!(err.message(), "Minimum of 1 section required");
        assert_eq!(collection.count(), 1);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut collection = SectionCollection::new(default_sections());
        collection.remove("mission").unwrap();
        assert_eq!(orders(&collection), vec![0, 1, 2, 3]);
        assert!(collection.get("mission").is_none());
        assert!(matches!(
            collection.remove("mission"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_move_section() {
        let mut collection = SectionCollection::new(default_sections());
        collection.move_section(4, 0).unwrap();
        let ids: Vec<&str> = collection.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sponsors", "hero", "impact", "mission", "testimonials"]);
        assert_eq!(orders(&collection), vec![0, 1, 2, 3, 4]);

        collection.move_section(0, 99).unwrap();
        assert_eq!(collection.sections()[4].id, "sponsors");

        assert!(collection.move_section(5, 0).is_err());
    }

    #[test]
    fn test_toggle_visibility() {
        let mut collection = SectionCollection::new(default_sections());
        assert!(!collection.toggle_visibility("mission").unwrap());
        assert!(!collection.get("mission").unwrap().is_visible);
        assert!(collection.toggle_visibility("mission").unwrap());
    }

    #[test]
    fn test_update_partial_and_type_change() {
        let mut collection = SectionCollection::new(default_sections());
        collection
            .update(
                "impact",
                &UpdateSectionRequest {
                    title: Some("Our Impact".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let impact = collection.get("impact").unwrap();
        assert_eq!(impact.title, "Our Impact");
        assert_eq!(impact.kind(), SectionKind::Impact);

        let err = collection
            .update(
                "impact",
                &UpdateSectionRequest {
                    kind: Some(SectionKind::Sponsor),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "BAD_REQUEST");

        collection
            .update(
                "impact",
                &UpdateSectionRequest {
                    kind: Some(SectionKind::Sponsor),
                    content: Some(json!({ "sponsors": [{ "name": "Hooli" }] })),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(collection.get("impact").unwrap().kind(), SectionKind::Sponsor);
    }

    #[test]
    fn test_edit_content() {
        let mut collection = SectionCollection::new(default_sections());
        collection
            .edit_content(
                "hero",
                &[ContentEdit::SetField {
                    field: "heading".to_string(),
                    value: Some("Stay Warm".to_string()),
                }],
            )
            .unwrap();

        match &collection.get("hero").unwrap().content {
            SectionContent::Hero(hero) => assert_eq!(hero.heading, "Stay Warm"),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_edit_content_requires_edits() {
        let mut collection = SectionCollection::new(default_sections());
        let err = collection.edit_content("hero", &[]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(collection.sections(), default_sections().as_slice());
    }
}
