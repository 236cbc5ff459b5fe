use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of clothing shown in one pane of the closet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
}

impl Category {
    /// Every category, in the order they are validated and displayed
    pub const ALL: [Category; 2] = [Category::Top, Category::Bottom];

    /// Lowercase name used in messages and config keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way to move through an image set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Image formats recognised when listing a category directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
    Tiff,
    Other(String),
}

impl ImageFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            "webp" => Self::Webp,
            "tif" | "tiff" => Self::Tiff,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check if format can be decoded for display
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}
