//! Per-kind section editors.
//!
//! Editors only reshape content; they never validate it. A blank entry added
//! here stays invalid until the admin fills it in, and `save` refuses it until then.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{
    HeroContent, ImpactContent, ImpactStat, MissionCard, MissionContent, SectionContent, Sponsor,
    SponsorContent, Testimonial, TestimonialContent,
};

/// A single editing step, as sent by the admin dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ContentEdit {
    /// Set a hero field. `None` clears an optional field.
    SetField {
        field: String,
        #[serde(default)]
        value: Option<String>,
    },
    /// Append a blank entry to a list section.
    AddEntry,
    RemoveEntry { index: usize },
    UpdateEntry {
        index: usize,
        field: String,
        #[serde(default)]
        value: Option<String>,
    },
}

fn unknown_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Unknown field '{}'", field))
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Field '{}' cannot be cleared", field)))
}

impl HeroContent {
    pub fn set_field(&mut self, field: &str, value: Option<String>) -> Result<(), AppError> {
        match field {
            "heading" => self.heading = required(field, value)?,
            "subheading" => self.subheading = required(field, value)?,
            "ctaText" => self.cta_text = required(field, value)?,
            "backgroundImage" => self.background_image = value,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

/// Shared editing behaviour for sections holding a list of entries.
pub trait EntryList {
    type Entry: Default;

    fn entries_mut(&mut self) -> &mut Vec<Self::Entry>;

    fn set_entry_field(
        entry: &mut Self::Entry,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError>;

    fn add_entry(&mut self) {
        self.entries_mut().push(Self::Entry::default());
    }

    fn remove_entry(&mut self, index: usize) -> Result<(), AppError> {
        let entries = self.entries_mut();
        if index >= entries.len() {
            return Err(out_of_range(index, entries.len()));
        }
        entries.remove(index);
        Ok(())
    }

    fn update_entry(
        &mut self,
        index: usize,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError> {
        let entries = self.entries_mut();
        let len = entries.len();
        let entry = entries
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        Self::set_entry_field(entry, field, value)
    }
}

fn out_of_range(index: usize, len: usize) -> AppError {
    AppError::BadRequest(format!(
        "Entry index {} out of range ({} entries)",
        index, len
    ))
}

impl EntryList for ImpactContent {
    type Entry = ImpactStat;

    fn entries_mut(&mut self) -> &mut Vec<ImpactStat> {
        &mut self.stats
    }

    fn set_entry_field(
        entry: &mut ImpactStat,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError> {
        match field {
            "number" => entry.number = required(field, value)?,
            "label" => entry.label = required(field, value)?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

impl EntryList for MissionContent {
    type Entry = MissionCard;

    fn entries_mut(&mut self) -> &mut Vec<MissionCard> {
        &mut self.cards
    }

    fn set_entry_field(
        entry: &mut MissionCard,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError> {
        match field {
            "title" => entry.title = required(field, value)?,
            "description" => entry.description = required(field, value)?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

impl EntryList for TestimonialContent {
    type Entry = Testimonial;

    fn entries_mut(&mut self) -> &mut Vec<Testimonial> {
        &mut self.testimonials
    }

    fn set_entry_field(
        entry: &mut Testimonial,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError> {
        match field {
            "quote" => entry.quote = required(field, value)?,
            "author" => entry.author = required(field, value)?,
            "role" => entry.role = required(field, value)?,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

impl EntryList for SponsorContent {
    type Entry = Sponsor;

    fn entries_mut(&mut self) -> &mut Vec<Sponsor> {
        &mut self.sponsors
    }

    fn set_entry_field(
        entry: &mut Sponsor,
        field: &str,
        value: Option<String>,
    ) -> Result<(), AppError> {
        match field {
            "name" => entry.name = required(field, value)?,
            "logo" => entry.logo = value,
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}

fn apply_list_edit<L: EntryList>(list: &mut L, edit: ContentEdit) -> Result<(), AppError> {
    match edit {
        ContentEdit::AddEntry => {
            list.add_entry();
            Ok(())
        }
        ContentEdit::RemoveEntry { index } => list.remove_entry(index),
        ContentEdit::UpdateEntry {
            index,
            field,
            value,
        } => list.update_entry(index, &field, value),
        ContentEdit::SetField { .. } => Err(AppError::BadRequest(
            "setField only applies to hero sections".to_string(),
        )),
    }
}

impl SectionContent {
    /// Apply one edit in place.
    pub fn apply_edit(&mut self, edit: ContentEdit) -> Result<(), AppError> {
        match self {
            SectionContent::Hero(hero) => match edit {
                ContentEdit::SetField { field, value } => hero.set_field(&field, value),
                _ => Err(AppError::BadRequest(
                    "Hero sections only support setField".to_string(),
                )),
            },
            SectionContent::Impact(list) => apply_list_edit(list, edit),
            SectionContent::Mission(list) => apply_list_edit(list, edit),
            SectionContent::Testimonial(list) => apply_list_edit(list, edit),
            SectionContent::Sponsor(list) => apply_list_edit(list, edit),
        }
    }

    /// Apply a sequence of edits to a copy; the original is untouched on failure.
    pub fn with_edits(&self, edits: &[ContentEdit]) -> Result<SectionContent, AppError> {
        let mut edited = self.clone();
        for edit in edits {
            edited.apply_edit(edit.clone())?;
        }
        Ok(edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::template_content;
    use crate::content::validate::validate_content;
    use crate::models::SectionKind;
    use serde_json::json;

    #[test]
    fn test_edit_ops_decode() {
        let edits: Vec<ContentEdit> = serde_json::from_value(json!([
            { "op": "setField", "field": "heading", "value": "Hi" },
            { "op": "setField", "field": "backgroundImage" },
            { "op": "addEntry" },
            { "op": "removeEntry", "index": 2 },
            { "op": "updateEntry", "index": 0, "field": "label", "value": "Meals" }
        ]))
        .unwrap();

        assert_eq!(edits.len(), 5);
        assert_eq!(
            edits[1],
            ContentEdit::SetField {
                field: "backgroundImage".to_string(),
                value: None
            }
        );
        assert_eq!(edits[2], ContentEdit::AddEntry);
    }

    #[test]
    fn test_hero_fields() {
        let content = template_content(SectionKind::Hero);
        let edited = content
            .with_edits(&[
                ContentEdit::SetField {
                    field: "heading".to_string(),
                    value: Some("Warm Winter".to_string()),
                },
                ContentEdit::SetField {
                    field: "backgroundImage".to_string(),
                    value: Some("https://img/hero.jpg".to_string()),
                },
            ])
            .unwrap();

        match &edited {
            SectionContent::Hero(hero) => {
                assert_eq!(hero.heading, "Warm Winter");
                assert_eq!(hero.background_image.as_deref(), Some("https://img/hero.jpg"));
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let cleared = edited
            .with_edits(&[ContentEdit::SetField {
                field: "backgroundImage".to_string(),
                value: None,
            }])
            .unwrap();
        assert!(matches!(cleared, SectionContent::Hero(HeroContent { background_image: None, .. })));
    }

    #[test]
    fn test_hero_rejects_clearing_required_and_unknown_fields() {
        let content = template_content(SectionKind::Hero);
        assert!(content
            .with_edits(&[ContentEdit::SetField {
                field: "ctaText".to_string(),
                value: None,
            }])
            .is_err());
        assert!(content
            .with_edits(&[ContentEdit::SetField {
                field: "tagline".to_string(),
                value: Some("x".to_string()),
            }])
            .is_err());
        assert!(content.with_edits(&[ContentEdit::AddEntry]).is_err());
    }

    #[test]
    fn test_empty_string_edit_is_accepted_but_invalid() {
        let edited = template_content(SectionKind::Hero)
            .with_edits(&[ContentEdit::SetField {
                field: "heading".to_string(),
                value: Some(String::new()),
            }])
            .unwrap();
        assert!(!validate_content(&edited));
    }

    #[test]
    fn test_added_entry_is_blank_until_filled() {
        let content = template_content(SectionKind::Mission);
        let added = content.with_edits(&[ContentEdit::AddEntry]).unwrap();
        assert!(!validate_content(&added));

        let filled = added
            .with_edits(&[
                ContentEdit::UpdateEntry {
                    index: 1,
                    field: "title".to_string(),
                    value: Some("Local Partners".to_string()),
                },
                ContentEdit::UpdateEntry {
                    index: 1,
                    field: "description".to_string(),
                    value: Some("Shelters we work with".to_string()),
                },
            ])
            .unwrap();
        assert!(validate_content(&filled));
        match filled {
            SectionContent::Mission(mission) => assert_eq!(mission.cards.len(), 2),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_remove_entry_bounds() {
        let content = template_content(SectionKind::Impact);
        let removed = content
            .with_edits(&[ContentEdit::RemoveEntry { index: 0 }])
            .unwrap();
        assert!(matches!(&removed, SectionContent::Impact(c) if c.stats.is_empty()));
        assert!(validate_content(&removed));

        let err = content
            .with_edits(&[ContentEdit::RemoveEntry { index: 3 }])
            .unwrap_err();
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn test_sponsor_logo_can_be_cleared() {
        let content = template_content(SectionKind::Sponsor);
        let edited = content
            .with_edits(&[
                ContentEdit::UpdateEntry {
                    index: 0,
                    field: "logo".to_string(),
                    value: Some("https://img/logo.png".to_string()),
                },
                ContentEdit::UpdateEntry {
                    index: 0,
                    field: "logo".to_string(),
                    value: None,
                },
            ])
            .unwrap();
        assert_eq!(edited, content);
    }

    #[test]
    fn test_failed_edit_leaves_original_untouched() {
        let content = template_content(SectionKind::Testimonial);
        let result = content.with_edits(&[
            ContentEdit::AddEntry,
            ContentEdit::UpdateEntry {
                index: 0,
                field: "rating".to_string(),
                value: Some("5".to_string()),
            },
        ]);
        assert!(result.is_err());
        assert_eq!(content, template_content(SectionKind::Testimonial));
    }
}
