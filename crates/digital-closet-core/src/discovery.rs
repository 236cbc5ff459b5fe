use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::ImageFormat;

/// List the entries of a category directory as identifiers.
///
/// Only direct children are listed, in the order the filesystem returns
/// them. With `images_only` set, entries that are not files with a
/// supported image extension are skipped; otherwise every entry is kept.
/// Symlinks are resolved only for the image check, so a dangling link is
/// skipped as a non-image rather than failing the listing.
pub fn list_identifiers(directory: &Path, images_only: bool) -> Result<Vec<String>> {
    // Check if directory exists
    if !directory.exists() {
        return Err(Error::FileNotFound(directory.to_path_buf()));
    }

    let mut identifiers = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let path = entry.path();

        if images_only && !(is_file(path) && has_image_extension(path)) {
            debug!("Skipping non-image entry {}", path.display());
            continue;
        }

        identifiers.push(entry.file_name().to_string_lossy().into_owned());
    }

    debug!(
        "Listed {} identifiers in {}",
        identifiers.len(),
        directory.display()
    );
    Ok(identifiers)
}

/// True for regular files and for symlinks that resolve to one
fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

/// Get image format from file extension
fn get_image_format(path: &Path) -> Option<ImageFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(ImageFormat::from_extension)
}

/// Returns if the given path has a displayable image extension
pub fn has_image_extension(path: &Path) -> bool {
    match get_image_format(path) {
        Some(format) => format.is_supported(),
        None => false,
    }
}

// -- Tests --
