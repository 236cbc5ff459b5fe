//! Core functionality for browsing a digital closet.
//!
//! This library provides the pieces behind the closet window:
//! - Listing the image directories of each clothing category
//! - Validating listings (missing, empty or duplicated entries)
//! - Circular navigation through each category's images
//! - Scaling the selected image to its pane

// -- External Dependencies --

use log::{debug, info};
use std::path::{Path, PathBuf};

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use image_set::ImageSet;
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod discovery;
pub mod duplicates;
pub mod frame;
pub mod image_set;
pub mod logging;
pub mod types;
pub mod validation;

/// One directory of images together with its navigation state
#[derive(Debug, Clone)]
struct Wardrobe {
    directory: PathBuf,
    images: ImageSet,
}

impl Wardrobe {
    fn from_listing(listing: validation::CategoryListing) -> Result<Self> {
        Ok(Self {
            directory: listing.directory,
            images: ImageSet::new(listing.identifiers)?,
        })
    }
}

/// Main entry point: a validated image set for every category
#[derive(Debug, Clone)]
pub struct Closet {
    top: Wardrobe,
    bottom: Wardrobe,
}

impl Closet {
    /// Check the configuration, validate its directories and position each
    /// set on its first image
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        info!("Validating image directories...");
        let listing = validation::validate_directories(config)?;
        Self::from_listing(listing)
    }

    /// Build a closet from listings that already passed validation
    pub fn from_listing(listing: validation::ClosetListing) -> Result<Self> {
        Ok(Self {
            top: Wardrobe::from_listing(listing.top)?,
            bottom: Wardrobe::from_listing(listing.bottom)?,
        })
    }

    fn wardrobe(&self, category: Category) -> &Wardrobe {
        match category {
            Category::Top => &self.top,
            Category::Bottom => &self.bottom,
        }
    }

    fn wardrobe_mut(&mut self, category: Category) -> &mut Wardrobe {
        match category {
            Category::Top => &mut self.top,
            Category::Bottom => &mut self.bottom,
        }
    }

    pub fn image_set(&self, category: Category) -> &ImageSet {
        &self.wardrobe(category).images
    }

    pub fn directory(&self, category: Category) -> &Path {
        &self.wardrobe(category).directory
    }

    /// Identifier currently shown for a category
    pub fn current(&self, category: Category) -> &str {
        self.image_set(category).current()
    }

    /// Full path of the image currently shown for a category
    pub fn current_path(&self, category: Category) -> PathBuf {
        let wardrobe = self.wardrobe(category);
        wardrobe.directory.join(wardrobe.images.current())
    }

    /// Move one category's cursor and return the newly selected identifier
    pub fn step(&mut self, category: Category, direction: Direction) -> &str {
        let current = self.wardrobe_mut(category).images.step(direction);
        debug!("{} {:?} -> {}", category, direction, current);
        current
    }
}
