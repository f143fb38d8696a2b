//! Built-in homepage content and per-kind templates for new sections.

use crate::models::{
    HeroContent, ImpactContent, ImpactStat, MissionCard, MissionContent, Section, SectionContent,
    SectionKind, Sponsor, SponsorContent, Testimonial, TestimonialContent,
};

fn stat(number: &str, label: &str) -> ImpactStat {
    ImpactStat {
        number: number.to_string(),
        label: label.to_string(),
    }
}

fn card(title: &str, description: &str) -> MissionCard {
    MissionCard {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn testimonial(quote: &str, author: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
    }
}

fn sponsor(name: &str) -> Sponsor {
    Sponsor {
        name: name.to_string(),
        logo: None,
    }
}

fn section(id: &str, title: &str, content: SectionContent, order: u32) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        content,
        is_visible: true,
        order,
    }
}

/// The homepage shipped with the storefront, used whenever stored content is
/// missing, unreadable or from another content version.
pub fn default_sections() -> Vec<Section> {
    vec![
        section(
            "hero",
            "Hero Section",
            SectionContent::Hero(HeroContent {
                heading: "Donate Warmth, Share Comfort".to_string(),
                subheading: "Join our mission to provide warmth and comfort to those in need. \
                             Every hoodie purchased is donated to someone less privileged."
                    .to_string(),
                cta_text: "Donate Now".to_string(),
                background_image: None,
            }),
            0,
        ),
        section(
            "impact",
            "Impact Section",
            SectionContent::Impact(ImpactContent {
                stats: vec![
                    stat("10,000+", "People Helped"),
                    stat("15,000+", "Hoodies Donated"),
                    stat("50+", "Cities Reached"),
                ],
            }),
            1,
        ),
        section(
            "mission",
            "Mission Section",
            SectionContent::Mission(MissionContent {
                cards: vec![
                    card(
                        "Direct Impact",
                        "Every hoodie purchased goes directly to someone in need, \
                         ensuring immediate impact in local communities.",
                    ),
                    card(
                        "Quality Assurance",
                        "We ensure all donated hoodies meet high-quality standards \
                         for comfort and durability.",
                    ),
                    card(
                        "Community Focus",
                        "Working with local organizations to identify and reach those \
                         most in need of warmth and comfort.",
                    ),
                ],
            }),
            2,
        ),
        section(
            "testimonials",
            "Testimonials Section",
            SectionContent::Testimonial(TestimonialContent {
                testimonials: vec![
                    testimonial(
                        "The quality of hoodies provided by Threads has made a real difference \
                         in our shelter. Our residents feel valued and cared for.",
                        "Sarah Johnson",
                        "Shelter Director",
                    ),
                    testimonial(
                        "Being able to give warm, high-quality hoodies to those in need has been \
                         incredible. The smiles we see are priceless.",
                        "Michael Chen",
                        "Community Organizer",
                    ),
                    testimonial(
                        "Threads has been an amazing partner in our mission to support homeless \
                         youth. Their dedication to quality and service is unmatched.",
                        "Lisa Rodriguez",
                        "Outreach Coordinator",
                    ),
                ],
            }),
            3,
        ),
        section(
            "sponsors",
            "Sponsors Section",
            SectionContent::Sponsor(SponsorContent {
                sponsors: ["Acme Corp", "Globex", "Soylent", "Initech", "Umbrella", "Hooli"]
                    .into_iter()
                    .map(sponsor)
                    .collect(),
            }),
            4,
        ),
    ]
}

/// Starting content for a freshly added section of `kind`.
pub fn template_content(kind: SectionKind) -> SectionContent {
    match kind {
        SectionKind::Hero => SectionContent::Hero(HeroContent {
            heading: "New Hero Section".to_string(),
            subheading: "Add your compelling message here".to_string(),
            cta_text: "Get Started".to_string(),
            background_image: None,
        }),
        SectionKind::Impact => SectionContent::Impact(ImpactContent {
            stats: vec![stat("0", "New Stat")],
        }),
        SectionKind::Mission => SectionContent::Mission(MissionContent {
            cards: vec![card("New Card", "Add your mission details")],
        }),
        SectionKind::Testimonial => SectionContent::Testimonial(TestimonialContent {
            testimonials: vec![testimonial("Add a testimonial", "Author Name", "Role")],
        }),
        SectionKind::Sponsor => SectionContent::Sponsor(SponsorContent {
            sponsors: vec![sponsor("New Sponsor")],
        }),
    }
}
