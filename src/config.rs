use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ui::theme::{serde_color, ColorMode, Palette, ThemeProvider};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub palette: PaletteConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Mode the app starts in: "dark" or "light"
    pub initial_color_mode: ColorMode,
    /// Follow the system color mode. There is no system probe in a terminal,
    /// so this only records intent; `initial_color_mode` is always used.
    pub use_system_color_mode: bool,
    /// Emit 24-bit colors; when false the palette is mapped to 256 colors
    pub true_color: bool,
    /// Marker drawn in front of the selected card's title
    pub selected_marker: String,
}

/// Optional overrides for palette shades, as hex strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    #[serde(rename = "50", deserialize_with = "serde_color::deserialize_option")]
    pub p50: Option<Color>,
    #[serde(rename = "100", deserialize_with = "serde_color::deserialize_option")]
    pub p100: Option<Color>,
    #[serde(rename = "200", deserialize_with = "serde_color::deserialize_option")]
    pub p200: Option<Color>,
    #[serde(rename = "300", deserialize_with = "serde_color::deserialize_option")]
    pub p300: Option<Color>,
    #[serde(rename = "400", deserialize_with = "serde_color::deserialize_option")]
    pub p400: Option<Color>,
    #[serde(rename = "500", deserialize_with = "serde_color::deserialize_option")]
    pub p500: Option<Color>,
    #[serde(rename = "600", deserialize_with = "serde_color::deserialize_option")]
    pub p600: Option<Color>,
    #[serde(rename = "700", deserialize_with = "serde_color::deserialize_option")]
    pub p700: Option<Color>,
    #[serde(rename = "800", deserialize_with = "serde_color::deserialize_option")]
    pub p800: Option<Color>,
    #[serde(rename = "900", deserialize_with = "serde_color::deserialize_option")]
    pub p900: Option<Color>,
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Capture mouse clicks
    pub mouse: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            initial_color_mode: ColorMode::Dark,
            use_system_color_mode: false,
            true_color: true,
            selected_marker: "▌".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tick_rate_ms: 100,
        }
    }
}

impl PaletteConfig {
    /// Apply overrides on top of the built-in palette
    pub fn apply(&self, mut palette: Palette) -> Palette {
        let shades = [
            (50, self.p50),
            (100, self.p100),
            (200, self.p200),
            (300, self.p300),
            (400, self.p400),
            (500, self.p500),
            (600, self.p600),
            (700, self.p700),
            (800, self.p800),
            (900, self.p900),
        ];
        for (shade, color) in shades {
            if let Some(color) = color {
                palette.set_primary(shade, color);
            }
        }
        if let Some(accent) = self.accent {
            palette.set_accent(accent);
        }
        palette
    }
}

impl Config {
    /// `<config dir>/drakor/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drakor")
            .join("config.toml")
    }

    /// `<cache dir>/drakor/drakor.log`
    pub fn default_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("drakor")
            .join("drakor.log")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the theme provider this config describes.
    /// `mode_override` wins over `initial_color_mode` (used by `--light`).
    pub fn theme_provider(&self, mode_override: Option<ColorMode>) -> ThemeProvider {
        if self.appearance.use_system_color_mode {
            tracing::debug!("use_system_color_mode set, but no system mode is available");
        }

        let mut palette = self.palette.apply(Palette::default());
        if !self.appearance.true_color {
            palette = palette.to_256_color();
        }

        let mode = mode_override.unwrap_or(self.appearance.initial_color_mode);
        ThemeProvider::new(palette, mode)
    }
}
