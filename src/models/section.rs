//! Homepage section model matching the frontend HomepageSection interface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of section types the homepage knows how to render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Impact,
    Mission,
    Testimonial,
    Sponsor,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Hero,
        SectionKind::Impact,
        SectionKind::Mission,
        SectionKind::Testimonial,
        SectionKind::Sponsor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Impact => "impact",
            SectionKind::Mission => "mission",
            SectionKind::Testimonial => "testimonial",
            SectionKind::Sponsor => "sponsor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Title given to a new section when the admin does not supply one.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero Section",
            SectionKind::Impact => "Impact Section",
            SectionKind::Mission => "Mission Section",
            SectionKind::Testimonial => "Testimonial Section",
            SectionKind::Sponsor => "Sponsor Section",
        }
    }

    /// Decode an untyped `content` object as the payload for this kind.
    pub fn decode_content(&self, value: Value) -> Result<SectionContent, serde_json::Error> {
        Ok(match self {
            SectionKind::Hero => SectionContent::Hero(serde_json::from_value(value)?),
            SectionKind::Impact => SectionContent::Impact(serde_json::from_value(value)?),
            SectionKind::Mission => SectionContent::Mission(serde_json::from_value(value)?),
            SectionKind::Testimonial => {
                SectionContent::Testimonial(serde_json::from_value(value)?)
            }
            SectionKind::Sponsor => SectionContent::Sponsor(serde_json::from_value(value)?),
        })
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main banner with a call to action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub heading: String,
    pub subheading: String,
    pub cta_text: String,
    /// Hosted image URL; opaque to the content manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImpactStat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactContent {
    pub stats: Vec<ImpactStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MissionCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionContent {
    pub cards: Vec<MissionCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestimonialContent {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Sponsor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SponsorContent {
    pub sponsors: Vec<Sponsor>,
}

/// Section payload, tagged by the section `type` on the wire.
///
/// Serialized adjacently as `"type": "...", "content": {...}` so that a
/// flattened [`Section`] keeps the frontend's JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum SectionContent {
    Hero(HeroContent),
    Impact(ImpactContent),
    Mission(MissionContent),
    Testimonial(TestimonialContent),
    Sponsor(SponsorContent),
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::Impact(_) => SectionKind::Impact,
            SectionContent::Mission(_) => SectionKind::Mission,
            SectionContent::Testimonial(_) => SectionKind::Testimonial,
            SectionContent::Sponsor(_) => SectionKind::Sponsor,
        }
    }
}

/// One block of the homepage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub content: SectionContent,
    pub is_visible: bool,
    pub order: u32,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}
