//! Image file decoding into pixel arrays for profile extraction.

use std::path::Path;

use image::DynamicImage;
use ndarray::{Array2, Array3, ArrayD};

use crate::error::{DiffractionError, Result};

/// Convert a decoded image to the pixel array layout the extractor expects.
///
/// Color images become `(height, width, 3)` RGB arrays, grayscale images
/// become `(height, width)` luminance arrays. Values keep their 8-bit scale.
pub fn pixel_array_from_image(img: &DynamicImage, is_color: bool) -> Result<ArrayD<f64>> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    let array = if is_color {
        let raw: Vec<f64> = img.to_rgb8().into_raw().into_iter().map(f64::from).collect();
        Array3::from_shape_vec((height, width, 3), raw)
            .map_err(|e| DiffractionError::invalid_image(e.to_string()))?
            .into_dyn()
    } else {
        let raw: Vec<f64> = img.to_luma8().into_raw().into_iter().map(f64::from).collect();
        Array2::from_shape_vec((height, width), raw)
            .map_err(|e| DiffractionError::invalid_image(e.to_string()))?
            .into_dyn()
    };

    Ok(array)
}

/// Decode an image file into a pixel array.
///
/// # Errors
/// `DiffractionError::InvalidImageData` when the file is missing, unreadable
/// or not a supported image format.
pub fn load_pixel_array(path: &Path, is_color: bool) -> Result<ArrayD<f64>> {
    let img = image::open(path).map_err(|e| {
        DiffractionError::invalid_image(format!("failed to decode '{}': {e}", path.display()))
    })?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    pixel_array_from_image(&img, is_color)
}
