//! Theme system
//!
//! Provides:
//! - `Palette` with primary shades 50-900 and one accent shade
//! - `ColorMode` (light/dark) and the `ThemeProvider` that owns the active mode
//! - `Theme`, the role colors the draw code reads
//! - Hex color parsing and 256-color fallback

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named primary shades, in palette order
pub const PRIMARY_SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Static color table
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Indexed like `PRIMARY_SHADES`
    primary: [Color; 10],
    accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: [
                Color::Rgb(227, 242, 249), // #e3f2f9
                Color::Rgb(197, 228, 243), // #c5e4f3
                Color::Rgb(162, 212, 236), // #a2d4ec
                Color::Rgb(122, 193, 228), // #7ac1e4
                Color::Rgb(71, 169, 218),  // #47a9da
                Color::Rgb(0, 136, 204),   // #0088cc
                Color::Rgb(0, 122, 184),   // #007ab8
                Color::Rgb(0, 107, 161),   // #006ba1
                Color::Rgb(0, 88, 133),    // #005885
                Color::Rgb(0, 63, 94),     // #003f5e
            ],
            accent: Color::Rgb(240, 165, 0), // #f0a500
        }
    }
}

impl Palette {
    /// Look up a primary shade by name (50, 100, ... 900)
    #[cfg(test)]
    pub fn primary(&self, shade: u16) -> Option<Color> {
        PRIMARY_SHADES
            .iter()
            .position(|&s| s == shade)
            .map(|i| self.primary[i])
    }

    /// Accent 500
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Replace a primary shade. Returns false for an unknown shade name.
    pub fn set_primary(&mut self, shade: u16, color: Color) -> bool {
        match PRIMARY_SHADES.iter().position(|&s| s == shade) {
            Some(i) => {
                self.primary[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn set_accent(&mut self, color: Color) {
        self.accent = color;
    }

    // Shades below are always present; indices follow PRIMARY_SHADES.
    fn p50(&self) -> Color {
        self.primary[0]
    }
    fn p100(&self) -> Color {
        self.primary[1]
    }
    fn p200(&self) -> Color {
        self.primary[2]
    }
    fn p500(&self) -> Color {
        self.primary[5]
    }
    fn p600(&self) -> Color {
        self.primary[6]
    }
    fn p800(&self) -> Color {
        self.primary[8]
    }
    fn p900(&self) -> Color {
        self.primary[9]
    }

    /// Convert to 256-color approximation for limited terminals
    pub fn to_256_color(&self) -> Self {
        Self {
            primary: self.primary.map(approximate_256),
            accent: approximate_256(self.accent),
        }
    }
}

/// Light/dark color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

/// Owns the palette and the active color mode.
///
/// Built once at startup and handed to the app; every draw resolves a
/// `Theme` from it, so a mode flip shows on the next frame.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    palette: Palette,
    mode: ColorMode,
}

impl ThemeProvider {
    pub fn new(palette: Palette, mode: ColorMode) -> Self {
        Self { palette, mode }
    }

    #[cfg(test)]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Flip light <-> dark
    pub fn toggle_mode(&mut self) -> ColorMode {
        self.mode = self.mode.toggled();
        tracing::debug!("Color mode is now {:?}", self.mode);
        self.mode
    }

    /// Resolve role colors for the active mode
    pub fn theme(&self) -> Theme {
        Theme::resolve(&self.palette, self.mode)
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Palette::default(), ColorMode::default())
    }
}

/// Role colors for the UI, resolved from palette + mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Header bar background
    pub header_bg: Color,
    /// Header bar text and glyphs
    pub header_fg: Color,
    /// Card background
    pub card_bg: Color,
    /// Card title text
    pub title: Color,
    /// Status and release labels
    pub secondary: Color,
    /// Rating, views, favorited heart
    pub accent: Color,
    /// Outlined heart, switch labels
    pub neutral: Color,
    /// Details screen heading
    pub heading: Color,
    /// Plain body text on the details screen
    pub body: Color,
    /// Switch track when off (dark mode)
    pub track_off: Color,
    /// Switch track when on (light mode)
    pub track_on: Color,
    /// Switch thumb
    pub thumb: Color,
}

impl Theme {
    pub fn resolve(palette: &Palette, mode: ColorMode) -> Self {
        let dark = mode.is_dark();
        Self {
            background: if dark { palette.p900() } else { palette.p50() },
            header_bg: palette.p600(),
            header_fg: Color::White,
            card_bg: if dark { palette.p800() } else { palette.p100() },
            title: if dark { Color::White } else { palette.p900() },
            secondary: palette.p200(),
            accent: palette.accent(),
            neutral: palette.p500(),
            heading: if dark { palette.p800() } else { palette.p900() },
            body: if dark { palette.p50() } else { palette.p900() },
            track_off: palette.p600(),
            track_on: palette.accent(),
            thumb: Color::White,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        // #rrggbb, or #rrggbbaa with alpha ignored
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Approximate RGB color to nearest 256-color palette entry
fn approximate_256(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            // 6x6x6 color cube starts at index 16
            // Each axis: 0, 95, 135, 175, 215, 255 -> indices 0-5
            let r_idx = if r < 48 { 0 } else { (r - 35) / 40 };
            let g_idx = if g < 48 { 0 } else { (g - 35) / 40 };
            let b_idx = if b < 48 { 0 } else { (b - 35) / 40 };
            let idx = 16 + 36 * r_idx + 6 * g_idx + b_idx;
            Color::Indexed(idx)
        }
        c => c,
    }
}

/// Serde deserializer for optional hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
