//! Static content for the myeongham terminal portfolio.
//!
//! Everything the page shows (hero banner glyphs, section copy, skill
//! details, the mogul rate table) lives here as plain data so the binary
//! only decides layout and styling.

mod fonts;
mod moguls;
mod skills;

pub use fonts::{BANNER_ROWS, banner_width, build_name_banner};
pub use moguls::{MOGULS, Mogul, find_mogul};
pub use skills::{SKILLS, Skill, find_skill};

/// Name shown in the hero banner.
pub const NAME: &str = "DENNIS HEBA";

/// Tagline under the hero banner.
pub const TAGLINE: &str = "IT Support Specialist · Problem Solver";

/// Hint shown at the bottom of the hero.
pub const HERO_HINT: &str = "scroll to explore ▾";

/// One card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// About section cards in display order.
pub const ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard {
        title: "Who I Am",
        body: "IT support specialist who enjoys untangling stubborn problems and explaining \
               the fix in plain language.",
    },
    AboutCard {
        title: "What I Do",
        body: "Day to day I keep people working: diagnosing hardware, repairing broken \
               installs, and automating the boring parts with Python.",
    },
    AboutCard {
        title: "How I Work",
        body: "Calm, methodical, documented. Every ticket ends with a note the next person \
               can actually use.",
    },
];

/// One entry in the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub period: &'static str,
    pub role: &'static str,
    pub org: &'static str,
    pub summary: &'static str,
}

/// Experience entries, most recent first.
pub const EXPERIENCE: [ExperienceItem; 3] = [
    ExperienceItem {
        period: "2021 — present",
        role: "IT Support Specialist",
        org: "Brightline Systems",
        summary: "Second-line support for a 400-seat fleet across Windows and macOS; cut \
                  repeat tickets by a third with better runbooks.",
    },
    ExperienceItem {
        period: "2018 — 2021",
        role: "Service Desk Analyst",
        org: "Corvid Managed Services",
        summary: "First-line triage, remote diagnostics, and onboarding automation for \
                  small-business clients.",
    },
    ExperienceItem {
        period: "2016 — 2018",
        role: "Field Technician",
        org: "Harbor PC Repair",
        summary: "Hardware repair and home network installs; learned to translate tech for \
                  non-technical users.",
    },
];

/// Contact channels as (label, value) pairs.
pub const CONTACT: [(&str, &str); 4] = [
    ("email", "dennis.heba@gmail.com"),
    ("github", "github.com/dennisheba"),
    ("linkedin", "linkedin.com/in/dennisheba"),
    ("location", "Remote · UTC+1"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_banner_covers_name() {
        // Every letter of the portfolio name must render in the block font.
        let letters: usize = NAME.chars().filter(|c| *c != ' ').count();
        let gaps: usize = NAME.chars().filter(|c| *c == ' ').count();
        let banner = build_name_banner(NAME);
        // 6-wide glyphs, 2-wide gaps, one space between glyph cells.
        let expected = letters * 6 + gaps * 2 + (letters + gaps - 1);
        assert_eq!(banner[0].chars().count(), expected);
    }

    #[test]
    fn test_content_tables_nonempty() {
        assert!(!ABOUT_CARDS.is_empty());
        assert!(!EXPERIENCE.is_empty());
        assert!(!CONTACT.is_empty());
    }
}
