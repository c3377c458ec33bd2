//! RGB to grayscale conversion.

use ndarray::{Array2, ArrayView3, Axis};

use crate::error::{DiffractionError, Result};

/// Luminance weights for the R, G and B channels
pub const LUMA_WEIGHTS: [f64; 3] = [0.2989, 0.5870, 0.1140];

/// Collapse an RGB array of shape (height, width, 3) to a luminance array of
/// shape (height, width) using [`LUMA_WEIGHTS`].
///
/// # Errors
/// `DiffractionError::InvalidImageData` if the last axis is not 3 channels.
pub fn rgb_to_gray(rgb: ArrayView3<f64>) -> Result<Array2<f64>> {
    let (height, width, channels) = rgb.dim();
    if channels != 3 {
        return Err(DiffractionError::invalid_image(format!(
            "expected 3 color channels, got {channels}"
        )));
    }

    let mut gray = Array2::<f64>::zeros((height, width));
    for (channel, weight) in rgb.axis_iter(Axis(2)).zip(LUMA_WEIGHTS) {
        gray.scaled_add(weight, &channel);
    }
    Ok(gray)
}
