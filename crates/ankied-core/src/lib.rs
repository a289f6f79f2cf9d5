//! Core types shared across the ankied crates.

use std::time::Duration;

use ratatui::style::Color;

/// One tab of the code preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTab {
    #[default]
    Html,
    Css,
    Js,
}

impl PreviewTab {
    /// All tabs, in display order.
    pub const ALL: [PreviewTab; 3] = [PreviewTab::Html, PreviewTab::Css, PreviewTab::Js];

    /// Stable identifier for the tab.
    pub fn key(self) -> &'static str {
        match self {
            PreviewTab::Html => "html",
            PreviewTab::Css => "css",
            PreviewTab::Js => "js",
        }
    }

    /// Human-readable tab title.
    pub fn title(self) -> &'static str {
        match self {
            PreviewTab::Html => "HTML",
            PreviewTab::Css => "CSS",
            PreviewTab::Js => "JavaScript",
        }
    }

    /// Icon glyph shown next to the title.
    pub fn icon(self) -> &'static str {
        match self {
            PreviewTab::Html => "<>",
            PreviewTab::Css => "{}",
            PreviewTab::Js => "JS",
        }
    }

    /// Static asset path the tab maps to.
    pub fn asset(self) -> &'static str {
        match self {
            PreviewTab::Html => "./html.jpg",
            PreviewTab::Css => "./css.jpg",
            PreviewTab::Js => "./js.jpg",
        }
    }

    /// Brand color used for the icon glyph.
    pub fn accent(self) -> Color {
        match self {
            PreviewTab::Html => Color::Rgb(228, 77, 38),
            PreviewTab::Css => Color::Rgb(38, 77, 228),
            PreviewTab::Js => Color::Rgb(247, 223, 30),
        }
    }

    /// Next tab in cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            PreviewTab::Html => PreviewTab::Css,
            PreviewTab::Css => PreviewTab::Js,
            PreviewTab::Js => PreviewTab::Html,
        }
    }
}

/// Animation speed setting controlling the frame tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Duration of one animation frame at this speed.
    pub fn tick(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(80),
            AnimationSpeed::Normal => Duration::from_millis(33),
            AnimationSpeed::Fast => Duration::from_millis(16),
        }
    }

    /// Parse a speed from its config-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "slow" => Some(AnimationSpeed::Slow),
            "normal" => Some(AnimationSpeed::Normal),
            "fast" => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }
}
