//! PNG output for rendered portraits

use image::imageops::FilterType;
use image::RgbaImage;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::bitmap::Picture;

/// Error type for output operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save a picture to a PNG file, with index 0 written fully transparent.
///
/// Parent directories are created as needed.
pub fn save_png(picture: &Picture, path: &Path) -> Result<(), OutputError> {
    save_png_scaled(picture, path, 1)
}

/// Save a picture enlarged by an integer factor.
///
/// Nearest-neighbour scaling keeps the pixel edges crisp; a factor of 0 or 1
/// writes the native size.
pub fn save_png_scaled(picture: &Picture, path: &Path, factor: u8) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let image = scale_image(picture.to_rgba(), factor);
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::debug!("Wrote {}x{} portrait to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor as u32, h * factor as u32, FilterType::Nearest)
}
