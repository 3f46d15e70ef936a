//! Section tables for the two pages.

use crate::fade::{Edge, FadeKind, SectionConfig};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Welcome,
    Verse,
    Event,
    Rsvp,
    Gift,
    Comments,
    ThankYou,
    Intro,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::Welcome => "section-welcome",
            SectionId::Verse => "section-verse",
            SectionId::Event => "section-event",
            SectionId::Rsvp => "section-rsvp",
            SectionId::Gift => "section-gift",
            SectionId::Comments => "section-comments",
            SectionId::ThankYou => "section-thanks",
            SectionId::Intro => "section-intro",
            SectionId::Projects => "section-projects",
            SectionId::Skills => "section-skills",
            SectionId::Contact => "section-contact",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub id: SectionId,
    pub config: SectionConfig,
}

const fn section(id: SectionId, config: SectionConfig) -> Section {
    Section { id, config }
}

pub const INVITATION_SECTIONS: [Section; 7] = [
    // visible on arrival, fades as the camera reaches the gate
    section(
        SectionId::Welcome,
        SectionConfig::new(0.0, 14.0, FadeKind::Out, Edge::Fraction(0.4)).with_travel(60.0),
    ),
    section(
        SectionId::Verse,
        SectionConfig::new(12.0, 27.0, FadeKind::InOut, Edge::Fraction(0.3)).with_blur(10.0),
    ),
    section(
        SectionId::Event,
        SectionConfig::new(25.0, 42.0, FadeKind::InOut, Edge::Fraction(0.25)),
    ),
    section(
        SectionId::Rsvp,
        SectionConfig::new(40.0, 58.0, FadeKind::InOut, Edge::Buffer(3.0)).with_scale_from(0.9),
    ),
    section(
        SectionId::Gift,
        SectionConfig::new(56.0, 72.0, FadeKind::InOut, Edge::Fraction(0.25)),
    ),
    section(
        SectionId::Comments,
        SectionConfig::new(70.0, 88.0, FadeKind::InOut, Edge::Buffer(3.0)).with_blur(4.0),
    ),
    section(
        SectionId::ThankYou,
        SectionConfig::new(86.0, 96.0, FadeKind::In, Edge::Full)
            .with_scale_from(0.85)
            .with_mount_margin(4.0),
    ),
];

pub const PORTFOLIO_SECTIONS: [Section; 4] = [
    section(
        SectionId::Intro,
        SectionConfig::new(0.0, 22.0, FadeKind::Out, Edge::Fraction(0.5)),
    ),
    section(
        SectionId::Projects,
        SectionConfig::new(20.0, 52.0, FadeKind::InOut, Edge::Fraction(0.2)).with_travel(80.0),
    ),
    section(
        SectionId::Skills,
        SectionConfig::new(50.0, 76.0, FadeKind::InOut, Edge::Fraction(0.25)),
    ),
    section(
        SectionId::Contact,
        SectionConfig::new(74.0, 94.0, FadeKind::In, Edge::Fraction(0.3)).with_mount_margin(6.0),
    ),
];

/// Sections that should be mounted at scroll value `v`.
pub fn active_sections(table: &[Section], v: f32) -> SmallVec<[SectionId; 4]> {
    table
        .iter()
        .filter(|s| s.config.is_mounted(v))
        .map(|s| s.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_is_visible_on_arrival() {
        let welcome = &INVITATION_SECTIONS[0];
        assert_eq!(welcome.config.style(0.0).opacity, 1.0);
    }

    #[test]
    fn some_section_is_mounted_everywhere() {
        for i in 0..=100 {
            let v = i as f32;
            assert!(
                !active_sections(&INVITATION_SECTIONS, v).is_empty(),
                "nothing mounted at {v}"
            );
        }
    }
}
