//! Intensity profile extraction along the middle scanline of an image.
//!
//! The extractor reads the horizontal row through the vertical midpoint
//! (`row = height / 2`) and subtracts the row minimum so the floor of the
//! profile sits at exactly zero. This removes ambient light and sensor
//! offset without changing the shape of the pattern.

use ndarray::{Array2, ArrayViewD, Ix2, Ix3};

use crate::algo::misc::{argmax_first, max_value, min_value};
use crate::error::{DiffractionError, Result};
use crate::image_proc::grayscale::rgb_to_gray;

/// Baseline-corrected 1D intensity profile of a diffraction picture.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityProfile {
    values: Vec<f64>,
    baseline: f64,
    max_intensity: f64,
    max_index: usize,
}

impl IntensityProfile {
    /// Baseline-correct a raw scanline.
    ///
    /// # Errors
    /// `DiffractionError::InvalidImageData` for an empty scanline or one
    /// containing NaN or infinite samples.
    pub fn from_scanline(scanline: &[f64]) -> Result<Self> {
        if let Some(bad) = scanline.iter().position(|v| !v.is_finite()) {
            return Err(DiffractionError::invalid_image(format!(
                "non-finite intensity at column {bad}"
            )));
        }
        let baseline = min_value(scanline)
            .ok_or_else(|| DiffractionError::invalid_image("scanline is empty"))?;

        let values: Vec<f64> = scanline.iter().map(|v| v - baseline).collect();
        let max_intensity = max_value(&values).unwrap_or(0.0);
        let max_index = argmax_first(&values).unwrap_or(0);

        Ok(Self {
            values,
            baseline,
            max_intensity,
            max_index,
        })
    }

    /// Extract the middle-row profile from a decoded pixel array.
    ///
    /// Grayscale input must be 2D `(height, width)`. Color input must be 3D
    /// `(height, width, 3)` and is converted to luminance first.
    ///
    /// # Errors
    /// `DiffractionError::InvalidImageData` if the array is empty or its
    /// dimensionality does not match `is_color`.
    pub fn extract(pixels: ArrayViewD<f64>, is_color: bool) -> Result<Self> {
        let intensity = intensity_matrix(pixels, is_color)?;
        let row = intensity.nrows() / 2;
        log::debug!(
            "Extracting scanline {row} of {}x{} intensity matrix",
            intensity.ncols(),
            intensity.nrows()
        );
        let scanline: Vec<f64> = intensity.row(row).to_vec();
        Self::from_scanline(&scanline)
    }

    /// Baseline-corrected samples
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples (`num`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw minimum that was subtracted from the scanline
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn max_intensity(&self) -> f64 {
        self.max_intensity
    }

    /// Index of the first occurrence of `max_intensity`
    pub fn max_index(&self) -> usize {
        self.max_index
    }
}

/// Reduce a decoded pixel array to a 2D intensity matrix.
fn intensity_matrix(pixels: ArrayViewD<f64>, is_color: bool) -> Result<Array2<f64>> {
    if pixels.is_empty() {
        return Err(DiffractionError::invalid_image(format!(
            "pixel array is empty (shape {:?})",
            pixels.shape()
        )));
    }

    if is_color {
        let rgb = pixels.into_dimensionality::<Ix3>().map_err(|_| {
            DiffractionError::invalid_image("color image must be a 3D (height, width, 3) array")
        })?;
        rgb_to_gray(rgb)
    } else {
        let gray = pixels.into_dimensionality::<Ix2>().map_err(|_| {
            DiffractionError::invalid_image("grayscale image must be a 2D (height, width) array")
        })?;
        Ok(gray.to_owned())
    }
}
