//! Application configuration loaded from `config.toml` in the data directory.
//!
//! The defaults file is embedded in the binary and extracted on first run, so
//! users always have a commented file to edit.

use crate::data::CanvasSize;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WIDGET_BOARD_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(skip)] // Set at runtime from where the config was found
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: u32,
    #[serde(default = "default_hover_tooltips")]
    pub hover_tooltips: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            hover_tooltips: default_hover_tooltips(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    pub width: u32,
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

fn default_poll_timeout_ms() -> u64 {
    16
}

fn default_cell_width_px() -> u32 {
    10
}

fn default_cell_height_px() -> u32 {
    20
}

fn default_hover_tooltips() -> bool {
    true
}

fn default_canvas_width() -> u32 {
    CanvasSize::default().width
}

fn default_canvas_height() -> u32 {
    CanvasSize::default().height
}

impl Config {
    /// Load `config.toml` from the data directory, extracting defaults first
    pub fn load() -> Result<Self> {
        Self::load_in(&Self::base_dir()?)
    }

    /// Load from `dir/config.toml`, creating the directory and file if needed
    pub fn load_in(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted config.toml to {:?}", config_path);
        }

        Self::load_from_path(&config_path, dir)
    }

    /// Load a config file from a custom path; relative storage paths still
    /// resolve against `data_dir`
    pub fn load_from_path(path: &Path, data_dir: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Base data directory (~/.widget-board)
    /// Can be overridden with the WIDGET_BOARD_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".widget-board"))
    }

    /// Returns: ~/.widget-board/widget-board.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("widget-board.log"))
    }

    /// Directory holding `dashboardState.json`
    pub fn state_dir(&self) -> PathBuf {
        match &self.storage.state_dir {
            Some(dir) => self.resolve(dir),
            None => self.data_dir.clone(),
        }
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> PathBuf {
        match &self.storage.export_dir {
            Some(dir) => self.resolve(dir),
            None => std::env::current_dir().unwrap_or_else(|_| self.data_dir.clone()),
        }
    }

    /// Canvas used when no stored dashboard exists
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width.max(1), self.canvas.height.max(1))
    }

    /// Canvas pixels per terminal cell, never zero
    pub fn cell_scale(&self) -> (u32, u32) {
        (self.ui.cell_width_px.max(1), self.ui.cell_height_px.max(1))
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.data_dir.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.canvas, CanvasConfig::default());
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_load_in_extracts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_in(dir.path()).unwrap();

        assert!(dir.path().join("config.toml").exists());
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.state_dir(), dir.path());
    }

    #[test]
    fn test_partial_file_fills_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[ui]\ncell_width_px = 8\n\n[storage]\nstate_dir = \"state\"\n").unwrap();

        let config = Config::load_from_path(&path, dir.path()).unwrap();
        assert_eq!(config.cell_scale(), (8, 20));
        assert!(config.ui.hover_tooltips);
        assert_eq!(config.state_dir(), dir.path().join("state"));
        assert_eq!(config.canvas_size(), CanvasSize::new(1400, 800));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[ui\npoll_timeout_ms = ").unwrap();
        assert!(Config::load_from_path(&path, dir.path()).is_err());
    }

    #[test]
    fn test_zero_scale_and_canvas_are_floored() {
        let mut config = Config::default();
        config.ui.cell_width_px = 0;
        config.canvas.height = 0;
        assert_eq!(config.cell_scale().0, 1);
        assert_eq!(config.canvas_size().height, 1);
    }

    #[test]
    fn test_absolute_export_dir_kept() {
        let mut config = Config::default();
        config.data_dir = PathBuf::from("/data");
        config.storage.export_dir = Some(PathBuf::from("/exports"));
        assert_eq!(config.export_dir(), PathBuf::from("/exports"));
    }
}
