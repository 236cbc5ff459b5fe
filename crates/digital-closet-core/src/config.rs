use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Category;

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for the closet window and its image directories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title of the main window
    pub window_title: String,

    /// Main window width in pixels
    pub window_width: u32,

    /// Main window height in pixels
    pub window_height: u32,

    /// Width every image is scaled to
    pub frame_width: u32,

    /// Height every image is scaled to
    pub frame_height: u32,

    /// Directory holding the images of tops
    pub top_directory: Option<PathBuf>,

    /// Directory holding the images of bottoms
    pub bottom_directory: Option<PathBuf>,

    /// Whether to skip directory entries without an image extension
    pub images_only: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Clueless Digital Closet".to_string(),
            window_width: 350,
            window_height: 600,
            frame_width: 250,
            frame_height: 250,
            top_directory: Some(PathBuf::from("top_images")),
            bottom_directory: Some(PathBuf::from("bottom_images")),
            images_only: true,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Directory configured for a category, if any
    pub fn directory(&self, category: Category) -> Option<&Path> {
        let dir = match category {
            Category::Top => self.top_directory.as_deref(),
            Category::Bottom => self.bottom_directory.as_deref(),
        };
        dir.filter(|d| !d.as_os_str().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::Configuration(
                "Window dimensions must be non-zero".to_string(),
            ));
        }

        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(Error::Configuration(
                "Frame dimensions must be non-zero".to_string(),
            ));
        }

        // Panes are stacked vertically
        if self.frame_width > self.window_width {
            return Err(Error::Configuration(format!(
                "Frame width {} exceeds window width {}",
                self.frame_width, self.window_width
            )));
        }

        if self.frame_height.saturating_mul(2) > self.window_height {
            return Err(Error::Configuration(format!(
                "Two frames of height {} do not fit in window height {}",
                self.frame_height, self.window_height
            )));
        }

        Ok(())
    }
}
