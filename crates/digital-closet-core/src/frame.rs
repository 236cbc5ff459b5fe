use image::imageops::FilterType;
use log::debug;
use std::path::Path;

use crate::error::{Error, Result};

/// An image decoded and scaled to fill one pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

/// Decode `path` and stretch it to exactly `width` x `height`
pub fn load_frame(path: &Path, width: u32, height: u32) -> Result<Frame> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path)?;
    debug!(
        "Scaling {} from {}x{} to {}x{}",
        path.display(),
        img.width(),
        img.height(),
        width,
        height
    );

    let scaled = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();

    Ok(Frame {
        width: scaled.width(),
        height: scaled.height(),
        pixels: scaled.into_raw(),
    })
}
