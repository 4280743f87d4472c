//! Grayscale loading, thresholding to a binary raster and mask export

use image::{GrayImage, Luma};
use std::path::Path;

use crate::io::error::{FractalError, Result, file_system, invalid_input};
use crate::spatial::raster::BinaryRaster;

/// Load any supported image and convert it to 8-bit luma
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| FractalError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_luma8())
}

/// Threshold a grayscale image into a binary raster
///
/// A pixel is foreground when its intensity is strictly above `threshold`, or at
/// or below it when `invert` is set (dark cracks on a light background).
///
/// # Errors
///
/// Returns `InvalidInput` if the image has zero width or height
pub fn binarize(gray: &GrayImage, threshold: u8, invert: bool) -> Result<BinaryRaster> {
    let (width, height) = gray.dimensions();
    BinaryRaster::from_fn(height as usize, width as usize, |row, col| {
        let (Ok(x), Ok(y)) = (u32::try_from(col), u32::try_from(row)) else {
            return false;
        };
        gray.get_pixel_checked(x, y)
            .is_some_and(|pixel| (pixel.0[0] > threshold) != invert)
    })
}

/// Load an image from disk and binarize it in one step
///
/// # Errors
///
/// Returns `ImageLoad` for unreadable files and `InvalidInput` for empty images
pub fn load_binary<P: AsRef<Path>>(path: P, threshold: u8, invert: bool) -> Result<BinaryRaster> {
    let gray = load_grayscale(path)?;
    binarize(&gray, threshold, invert)
}

/// Render a raster as a black and white image, foreground white
///
/// # Errors
///
/// Returns `InvalidInput` if a dimension exceeds `u32::MAX`
pub fn raster_to_image(raster: &BinaryRaster) -> Result<GrayImage> {
    let (height, width) = raster.dimensions();
    let height = u32::try_from(height).map_err(|e| invalid_input(&e))?;
    let width = u32::try_from(width).map_err(|e| invalid_input(&e))?;

    Ok(GrayImage::from_fn(width, height, |x, y| {
        if raster.get(y as usize, x as usize) {
            Luma([255])
        } else {
            Luma([0])
        }
    }))
}

/// Save a raster as a PNG mask
///
/// # Errors
///
/// Returns an error if:
/// - The raster is too large to encode
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png<P: AsRef<Path>>(raster: &BinaryRaster, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = raster_to_image(raster)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| FractalError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
