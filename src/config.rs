use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::parse_css_color;
use crate::error::{EditorError, EditorResult};

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "YEARBOOK_CONFIG";
/// Config file looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "yearbook.json";

/// Style given to text created by double-clicking the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub font_size: f32,
    pub color: String,
    pub font_family: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            color: "#fff".to_owned(),
            font_family: "Arial".to_owned(),
        }
    }
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // a partial file only overrides the fields it names
pub struct EditorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Colour the surface is cleared to before every repaint.
    pub background: String,
    pub default_text: TextDefaults,
    /// Font family name -> font file. Unlisted families use the built-in font.
    pub fonts: BTreeMap<String, PathBuf>,
    /// When set, downloads are written here instead of asking for a location.
    pub download_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            background: "#1e1e1e".to_owned(),
            default_text: TextDefaults::default(),
            fonts: BTreeMap::new(),
            download_dir: None,
        }
    }
}

impl EditorConfig {
    /// Load from `$YEARBOOK_CONFIG`, else `./yearbook.json`, else defaults.
    pub fn load() -> EditorResult<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> EditorResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EditorResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(EditorError::Config(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.default_text.font_size > 0.0) {
            return Err(EditorError::Config(format!(
                "default font size must be positive, got {}",
                self.default_text.font_size
            )));
        }
        for color in [&self.background, &self.default_text.color] {
            parse_css_color(color).map_err(|e| EditorError::Config(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "canvas_width": 1024 }"#).unwrap();
        assert_eq!(config.canvas_width, 1024);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.background, "#1e1e1e");
        assert_eq!(config.default_text, TextDefaults::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "canvas_height": 0 }"#),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "background": "not-a-colour" }"#),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "default_text": { "font_size": -1 } }"#),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(EditorConfig::from_json("{"), Err(EditorError::Config(_))));
    }
}
