use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub note: NoteConfig,
    #[serde(default)]
    pub subcanvas: SubcanvasConfig,
    #[serde(default)]
    pub label: LabelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
    #[serde(default = "default_canvas_title")]
    pub canvas_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    #[serde(default = "default_note_width")]
    pub width: f32,
    #[serde(default = "default_note_height")]
    pub height: f32,
    #[serde(default = "default_note_color")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcanvasConfig {
    #[serde(default = "default_subcanvas_min")]
    pub min_width: f32,
    #[serde(default = "default_subcanvas_min")]
    pub min_height: f32,
    #[serde(default = "default_subcanvas_color")]
    pub color: String,
    #[serde(default = "default_resize_handle")]
    pub resize_handle: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_label_font_size")]
    pub font_size: f32,
    #[serde(default = "default_label_color")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Rotating log files go here when set; otherwise logs go to stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

// Default value functions
fn default_window_title() -> String {
    "Note Blocks v0.1".to_string()
}

fn default_window_width() -> f32 {
    800.0
}

fn default_window_height() -> f32 {
    600.0
}

fn default_canvas_title() -> String {
    "My Notes".to_string()
}

fn default_note_width() -> f32 {
    100.0
}

fn default_note_height() -> f32 {
    120.0
}

fn default_note_color() -> String {
    "#4e5661".to_string()
}

fn default_subcanvas_min() -> f32 {
    200.0
}

fn default_subcanvas_color() -> String {
    "#4e6159".to_string()
}

fn default_resize_handle() -> f32 {
    10.0
}

fn default_label_font_size() -> f32 {
    18.0
}

fn default_label_color() -> String {
    "#c7c7c7".to_string()
}

fn default_log_level() -> String {
    crate::logging::default_log_level().to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
            canvas_title: default_canvas_title(),
        }
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            width: default_note_width(),
            height: default_note_height(),
            color: default_note_color(),
        }
    }
}

impl Default for SubcanvasConfig {
    fn default() -> Self {
        Self {
            min_width: default_subcanvas_min(),
            min_height: default_subcanvas_min(),
            color: default_subcanvas_color(),
            resize_handle: default_resize_handle(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: default_label_font_size(),
            color: default_label_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

/// Get the path to the config file, if the platform has a config directory
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "notecanvas")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from the platform config file. A missing file means defaults.
pub fn load_config() -> Result<AppConfig, String> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, String> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
    toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_layout() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Note Blocks v0.1");
        assert_eq!(config.window.canvas_title, "My Notes");
        assert_eq!((config.note.width, config.note.height), (100.0, 120.0));
        assert_eq!(config.subcanvas.min_width, 200.0);
        assert_eq!(config.label.font_size, 18.0);
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [note]
            color = "#aa0000"

            [subcanvas]
            min_width = 300.0
            "##,
        )
        .unwrap();

        assert_eq!(config.note.color, "#aa0000");
        assert_eq!(config.note.width, 100.0);
        assert_eq!(config.subcanvas.min_width, 300.0);
        assert_eq!(config.subcanvas.min_height, 200.0);
        assert_eq!(config.window.title, "Note Blocks v0.1");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.window.width, 800.0);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ncanvas_title = \"Ideas\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.window.canvas_title, "Ideas");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window\ntitle = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
    }
}
