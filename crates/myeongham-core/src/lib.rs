//! Core types shared across the myeongham portfolio crates.

use ratatui::style::Color;

/// Identifier for one section of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Moguls,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Moguls,
        SectionId::Contact,
    ];

    /// Sections listed in the floating nav (the hero is not a nav target).
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Moguls,
        SectionId::Contact,
    ];

    /// Heading shown for this section.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Moguls => "Mogul Meter",
            SectionId::Contact => "Contact",
        }
    }

    /// Next section in page order, clamped at the last.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous section in page order, clamped at the first.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[idx.saturating_sub(1)]
    }
}

/// Color theme for the portfolio accent palette.
///
/// Each theme pairs a primary accent (particles, headings, links between
/// particles) with a highlight tone (pointer links, active markers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Indigo,
    Ocean,
    Orchid,
    Ember,
    Slate,
}

impl ColorTheme {
    /// Primary accent color.
    pub fn accent(self) -> Color {
        match self {
            ColorTheme::Indigo => Color::Rgb(102, 126, 234),
            ColorTheme::Ocean => Color::Rgb(56, 178, 172),
            ColorTheme::Orchid => Color::Rgb(183, 148, 244),
            ColorTheme::Ember => Color::Rgb(237, 137, 54),
            ColorTheme::Slate => Color::Rgb(160, 174, 192),
        }
    }

    /// Highlight color for pointer links and active markers.
    pub fn highlight(self) -> Color {
        match self {
            ColorTheme::Indigo => Color::Rgb(245, 101, 101),
            ColorTheme::Ocean => Color::Rgb(237, 137, 54),
            ColorTheme::Orchid => Color::Rgb(246, 135, 179),
            ColorTheme::Ember => Color::Rgb(99, 179, 237),
            ColorTheme::Slate => Color::Rgb(245, 101, 101),
        }
    }

    /// Display name for the theme.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Indigo => "indigo",
            ColorTheme::Ocean => "ocean",
            ColorTheme::Orchid => "orchid",
            ColorTheme::Ember => "ember",
            ColorTheme::Slate => "slate",
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Indigo => ColorTheme::Ocean,
            ColorTheme::Ocean => ColorTheme::Orchid,
            ColorTheme::Orchid => ColorTheme::Ember,
            ColorTheme::Ember => ColorTheme::Slate,
            ColorTheme::Slate => ColorTheme::Indigo,
        }
    }

    /// Parse a theme from its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "indigo" => Some(ColorTheme::Indigo),
            "ocean" => Some(ColorTheme::Ocean),
            "orchid" => Some(ColorTheme::Orchid),
            "ember" => Some(ColorTheme::Ember),
            "slate" => Some(ColorTheme::Slate),
            _ => None,
        }
    }
}

/// Named tuning preset for the particle field.
///
/// The field effect ships in a few variants that differ in particle count,
/// drift damping, and zoom strength; presets keep them selectable instead of
/// blending them into one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPreset {
    #[default]
    Classic,
    Calm,
    Dense,
}

impl FieldPreset {
    /// Display name for the preset.
    pub fn name(self) -> &'static str {
        match self {
            FieldPreset::Classic => "classic",
            FieldPreset::Calm => "calm",
            FieldPreset::Dense => "dense",
        }
    }

    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        match self {
            FieldPreset::Classic => FieldPreset::Calm,
            FieldPreset::Calm => FieldPreset::Dense,
            FieldPreset::Dense => FieldPreset::Classic,
        }
    }

    /// Parse a preset from its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(FieldPreset::Classic),
            "calm" => Some(FieldPreset::Calm),
            "dense" => Some(FieldPreset::Dense),
            _ => None,
        }
    }
}
