//! Section content validators.
//!
//! Every check is a pure predicate: malformed content yields `false`, never an error.

use std::collections::HashSet;

use crate::models::{
    HeroContent, ImpactContent, MissionContent, Section, SectionContent, SponsorContent,
    TestimonialContent,
};

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_hero(content: &HeroContent) -> bool {
    filled(&content.heading) && filled(&content.subheading) && filled(&content.cta_text)
}

/// An empty stat list is valid; each present stat needs both fields.
pub fn validate_impact(content: &ImpactContent) -> bool {
    content
        .stats
        .iter()
        .all(|stat| filled(&stat.number) && filled(&stat.label))
}

pub fn validate_mission(content: &MissionContent) -> bool {
    content
        .cards
        .iter()
        .all(|card| filled(&card.title) && filled(&card.description))
}

pub fn validate_testimonial(content: &TestimonialContent) -> bool {
    content
        .testimonials
        .iter()
        .all(|t| filled(&t.quote) && filled(&t.author) && filled(&t.role))
}

pub fn validate_sponsor(content: &SponsorContent) -> bool {
    content.sponsors.iter().all(|sponsor| filled(&sponsor.name))
}

/// Dispatch to the validator for the content's kind.
pub fn validate_content(content: &SectionContent) -> bool {
    match content {
        SectionContent::Hero(c) => validate_hero(c),
        SectionContent::Impact(c) => validate_impact(c),
        SectionContent::Mission(c) => validate_mission(c),
        SectionContent::Testimonial(c) => validate_testimonial(c),
        SectionContent::Sponsor(c) => validate_sponsor(c),
    }
}

pub fn validate_section(section: &Section) -> bool {
    filled(&section.id) && filled(&section.title) && validate_content(&section.content)
}

/// All-or-nothing check over a collection. Does not report which section failed.
///
/// Ids must also be unique; size bounds are checked separately by the store.
pub fn validate_collection(sections: &[Section]) -> bool {
    let mut seen = HashSet::with_capacity(sections.len());
    sections
        .iter()
        .all(|section| validate_section(section) && seen.insert(section.id.as_str()))
}
