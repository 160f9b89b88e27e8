//! Configuration loading for the myeongham portfolio.
//!
//! The config file lives at the platform config directory
//! (`…/myeongham/config.toml`). Every field has a default; a missing or
//! malformed file silently falls back to those defaults so the app always
//! starts.

use std::fs;
use std::path::PathBuf;

use myeongham_core::{ColorTheme, FieldPreset};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub particles: ParticlesConfig,
    pub rates: RatesConfig,
}

/// General interface options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (indigo, ocean, orchid, ember, slate).
    pub theme: String,
    /// Animation frame rate target.
    pub fps: u32,
    /// Freeze drifting motion; zoom and fades still apply.
    pub reduced_motion: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default().name().to_string(),
            fps: 30,
            reduced_motion: false,
        }
    }
}

impl UiConfig {
    /// Resolve the theme name, falling back to the default theme on
    /// unknown names.
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::from_name(&self.theme).unwrap_or_default()
    }
}

/// Particle backdrop options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Run the backdrop at startup.
    pub enabled: bool,
    /// Preset name (classic, calm, dense).
    pub preset: String,
    /// Override the preset's particle count.
    pub count: Option<usize>,
    /// Override the preset's zoom coefficient.
    pub zoom: Option<f64>,
    /// Override the preset's drift speed.
    pub drift: Option<f64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            preset: FieldPreset::default().name().to_string(),
            count: None,
            zoom: None,
            drift: None,
        }
    }
}

impl ParticlesConfig {
    /// Resolve the preset name, falling back to the default preset on
    /// unknown names.
    pub fn field_preset(&self) -> FieldPreset {
        FieldPreset::from_name(&self.preset).unwrap_or_default()
    }
}

/// Live earnings-rate feed options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Fetch live rates instead of relying on the built-in table.
    pub live: bool,
    /// JSON endpoint serving the rates document.
    pub url: String,
    /// Minutes between fetches.
    pub refresh_minutes: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            live: false,
            url: String::new(),
            refresh_minutes: 30,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when the file is
    /// missing or does not parse.
    pub fn load() -> Self {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| Self::from_toml(&text).ok())
            .unwrap_or_default()
    }

    /// Parse a config document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Path of the config file, if the platform exposes a config directory.
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "myeongham")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.color_theme(), ColorTheme::Indigo);
        assert_eq!(config.ui.fps, 30);
        assert!(!config.ui.reduced_motion);
        assert!(config.particles.enabled);
        assert_eq!(config.particles.field_preset(), FieldPreset::Classic);
        assert!(!config.rates.live);
        assert_eq!(config.rates.refresh_minutes, 30);
    }

    #[test]
    fn test_parse_full_document() {
        let config = Config::from_toml(
            r#"
            [ui]
            theme = "ocean"
            fps = 60
            reduced_motion = true

            [particles]
            enabled = false
            preset = "dense"
            count = 48
            zoom = 2.5

            [rates]
            live = true
            url = "https://example.com/rates.json"
            refresh_minutes = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.color_theme(), ColorTheme::Ocean);
        assert_eq!(config.ui.fps, 60);
        assert!(config.ui.reduced_motion);
        assert!(!config.particles.enabled);
        assert_eq!(config.particles.field_preset(), FieldPreset::Dense);
        assert_eq!(config.particles.count, Some(48));
        assert_eq!(config.particles.zoom, Some(2.5));
        assert_eq!(config.particles.drift, None);
        assert!(config.rates.live);
        assert_eq!(config.rates.url, "https://example.com/rates.json");
        assert_eq!(config.rates.refresh_minutes, 10);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[ui]\nfps = 24\n").unwrap();
        assert_eq!(config.ui.fps, 24);
        assert_eq!(config.particles, ParticlesConfig::default());
        assert_eq!(config.rates, RatesConfig::default());
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let config = Config::from_toml(
            "[ui]\ntheme = \"chartreuse\"\n\n[particles]\npreset = \"hyper\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.color_theme(), ColorTheme::Indigo);
        assert_eq!(config.particles.field_preset(), FieldPreset::Classic);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Config::from_toml("[ui\nfps = ").is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Config::from_toml("[ui]\nsparkle = true\n").unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }
}
