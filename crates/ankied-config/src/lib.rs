//! User configuration loaded from the platform config directory.
//!
//! An optional `ankied.toml`; a missing or malformed file never fails
//! the app, it falls back to defaults field by field. The animation is
//! decorative, so nothing here is worth surfacing an error for.

use std::fs;
use std::path::PathBuf;

use ankied_core::AnimationSpeed;
use directories::ProjectDirs;
use serde::Deserialize;

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Render the digital rain background.
    pub background: bool,
    /// Animation frame cadence.
    pub speed: AnimationSpeed,
    /// Per-frame trail decay, `0.0..=1.0`.
    pub fade_alpha: f32,
    /// Track the mouse and render the pointer glow.
    pub mouse_glow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: true,
            speed: AnimationSpeed::default(),
            fade_alpha: 0.05,
            mouse_glow: true,
        }
    }
}

/// On-disk shape of `ankied.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    background: Option<bool>,
    speed: Option<String>,
    fade_alpha: Option<f32>,
    mouse_glow: Option<bool>,
}

impl Config {
    /// Parse a TOML document, falling back to defaults for missing or
    /// unusable fields.
    pub fn parse(text: &str) -> Self {
        let raw: RawConfig = toml::from_str(text).unwrap_or_default();
        let defaults = Config::default();
        Self {
            background: raw.background.unwrap_or(defaults.background),
            speed: raw
                .speed
                .as_deref()
                .and_then(AnimationSpeed::from_name)
                .unwrap_or(defaults.speed),
            fade_alpha: raw
                .fade_alpha
                .map(|a| a.clamp(0.0, 1.0))
                .unwrap_or(defaults.fade_alpha),
            mouse_glow: raw.mouse_glow.unwrap_or(defaults.mouse_glow),
        }
    }
}

/// Path of the config file, if a platform config directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ankied").map(|dirs| dirs.config_dir().join("ankied.toml"))
}

/// Load the configuration, defaulting when no file is present.
pub fn load() -> Config {
    config_path()
        .and_then(|path| fs::read_to_string(path).ok())
        .map(|text| Config::parse(&text))
        .unwrap_or_default()
}
