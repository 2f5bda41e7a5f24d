//! Color schemes and theme presets for the console chrome and screens.
//!
//! A [`Theme`] assigns concrete colors to every TUI surface. Ships with a
//! dark preset (default), a light preset, and a green-accented "abrigo"
//! preset. `Ctrl+T` cycles presets at runtime.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// ─── Theme Presets ──────────────────────────────────────────────────────────

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    /// Dark background theme (default).
    Dark,
    /// Light background theme.
    Light,
    /// Warm light background with the shelter-green accent.
    Abrigo,
}

impl ThemePreset {
    /// All presets in cycling order.
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Abrigo];

    /// Whether this preset uses a light background.
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light | Self::Abrigo)
    }

    /// Advance to the next preset (wrapping).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Abrigo,
            Self::Abrigo => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
            Self::Abrigo => write!(f, "abrigo"),
        }
    }
}

// ─── Serializable Color ─────────────────────────────────────────────────────

/// Serializable RGB triple convertible to a ratatui [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SerColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a ratatui color.
    #[must_use]
    pub const fn to_ratatui(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

// ─── Theme ──────────────────────────────────────────────────────────────────

/// Concrete theme with all color assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub preset: ThemePreset,
    pub bg: SerColor,
    pub fg: SerColor,
    pub status_bar_bg: SerColor,
    pub status_bar_fg: SerColor,
    pub highlight_bg: SerColor,
    pub highlight_fg: SerColor,
    pub border: SerColor,
    pub muted: SerColor,
    pub error: SerColor,
    pub warning: SerColor,
    pub success: SerColor,
    pub accent: SerColor,
}

impl Theme {
    /// Dark theme preset.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            preset: ThemePreset::Dark,
            bg: SerColor::new(0x1a, 0x1b, 0x26),
            fg: SerColor::new(0xc0, 0xca, 0xf5),
            status_bar_bg: SerColor::new(0x24, 0x28, 0x3b),
            status_bar_fg: SerColor::new(0x7a, 0xa2, 0xf7),
            highlight_bg: SerColor::new(0x33, 0x46, 0x7c),
            highlight_fg: SerColor::new(0xff, 0xff, 0xff),
            border: SerColor::new(0x3b, 0x40, 0x61),
            muted: SerColor::new(0x56, 0x5f, 0x89),
            error: SerColor::new(0xf7, 0x76, 0x8e),
            warning: SerColor::new(0xe0, 0xaf, 0x68),
            success: SerColor::new(0x9e, 0xce, 0x6a),
            accent: SerColor::new(0x7d, 0xcf, 0xff),
        }
    }

    /// Light theme preset.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            preset: ThemePreset::Light,
            bg: SerColor::new(0xf5, 0xf5, 0xf5),
            fg: SerColor::new(0x34, 0x35, 0x4e),
            status_bar_bg: SerColor::new(0xe1, 0xe2, 0xe7),
            status_bar_fg: SerColor::new(0x34, 0x54, 0x8a),
            highlight_bg: SerColor::new(0xb6, 0xd4, 0xf0),
            highlight_fg: SerColor::new(0x00, 0x00, 0x00),
            border: SerColor::new(0xc8, 0xc8, 0xd0),
            muted: SerColor::new(0x8c, 0x8c, 0xa0),
            error: SerColor::new(0xc0, 0x3c, 0x3c),
            warning: SerColor::new(0xb0, 0x76, 0x1c),
            success: SerColor::new(0x3c, 0x8a, 0x3c),
            accent: SerColor::new(0x34, 0x54, 0x8a),
        }
    }

    /// Shelter-green preset: warm paper background, green accent.
    #[must_use]
    pub const fn abrigo() -> Self {
        Self {
            preset: ThemePreset::Abrigo,
            bg: SerColor::new(0xfd, 0xfd, 0xfd),
            fg: SerColor::new(0x33, 0x33, 0x33),
            status_bar_bg: SerColor::new(0xe8, 0xf2, 0xe8),
            status_bar_fg: SerColor::new(0x2e, 0x7d, 0x32),
            highlight_bg: SerColor::new(0x4c, 0xaf, 0x50),
            highlight_fg: SerColor::new(0xff, 0xff, 0xff),
            border: SerColor::new(0xcc, 0xcc, 0xcc),
            muted: SerColor::new(0x88, 0x88, 0x88),
            error: SerColor::new(0xc6, 0x28, 0x28),
            warning: SerColor::new(0xef, 0x6c, 0x00),
            success: SerColor::new(0x4c, 0xaf, 0x50),
            accent: SerColor::new(0x4c, 0xaf, 0x50),
        }
    }

    /// Build a theme from a preset.
    #[must_use]
    pub const fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
            ThemePreset::Abrigo => Self::abrigo(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
