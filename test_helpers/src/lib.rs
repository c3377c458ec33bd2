//! Shared fixtures for diffraction tests.
//!
//! Two concerns live here:
//!
//! - Locating the workspace root and a persistent `test_output/` directory
//!   where tests drop plots and CSV files for manual inspection.
//! - Building synthetic single-slit photographs with a known peak column,
//!   so pipeline tests do not depend on real camera frames.
//!
//! ```rust
//! use test_helpers::{output_path, SlitPattern};
//!
//! let pattern = SlitPattern::new(200, 40).with_peak_column(103);
//! let pixels = pattern.gray_array();
//! assert_eq!(pixels.shape(), &[40, 200]);
//!
//! let plot = output_path("pattern_overlay.png");
//! assert!(plot.starts_with(test_helpers::get_output_dir()));
//! ```

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};
use once_cell::sync::Lazy;
use std::env;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    /// No `Cargo.toml` with a `[workspace]` table above the working directory
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),
}

/// Walk up from the working directory to the workspace `Cargo.toml`.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {}", e))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {}", e))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// `<project_root>/test_output`, created on first use.
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }

    output_dir
}

/// Path of a test artifact inside [`get_output_dir`].
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}

/// Synthetic single-slit photograph.
///
/// Every row carries the same horizontal profile
/// `background + amplitude * sinc²((col - peak) / fringe_spacing)`, with
/// `sinc(x) = sin(πx) / (πx)`, so the first dark fringes sit
/// `fringe_spacing` columns either side of the peak. Pixel values are
/// rounded to 8 bits when rendered as an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitPattern {
    pub width: usize,
    pub height: usize,
    pub peak_column: usize,
    pub fringe_spacing: f64,
    pub background: f64,
    pub amplitude: f64,
}

impl SlitPattern {
    /// Centered pattern with ambient background 12, peak 240 and dark
    /// fringes every 20 columns. The fringe is narrow enough that the peak
    /// column stays the unique 8-bit maximum.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            peak_column: width / 2,
            fringe_spacing: 20.0,
            background: 12.0,
            amplitude: 228.0,
        }
    }

    pub fn with_peak_column(self, peak_column: usize) -> Self {
        Self {
            peak_column,
            ..self
        }
    }

    pub fn with_fringe_spacing(self, fringe_spacing: f64) -> Self {
        Self {
            fringe_spacing,
            ..self
        }
    }

    pub fn with_background(self, background: f64) -> Self {
        Self { background, ..self }
    }

    /// Unquantized intensity at a column
    pub fn intensity(&self, col: usize) -> f64 {
        let x = (col as f64 - self.peak_column as f64) / self.fringe_spacing;
        let sinc = if x == 0.0 {
            1.0
        } else {
            (PI * x).sin() / (PI * x)
        };
        self.background + self.amplitude * sinc * sinc
    }

    /// 8-bit quantized intensity at a column
    pub fn pixel(&self, col: usize) -> u8 {
        self.intensity(col).round().clamp(0.0, 255.0) as u8
    }

    /// Quantized `(height, width)` luminance array
    pub fn gray_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.height, self.width), |(_, c)| f64::from(self.pixel(c)))
    }

    /// Quantized `(height, width, 3)` array with equal channels
    pub fn rgb_array(&self) -> Array3<f64> {
        Array3::from_shape_fn((self.height, self.width, 3), |(_, c, _)| {
            f64::from(self.pixel(c))
        })
    }

    pub fn gray_image(&self) -> DynamicImage {
        let img = GrayImage::from_fn(self.width as u32, self.height as u32, |x, _| {
            Luma([self.pixel(x as usize)])
        });
        DynamicImage::ImageLuma8(img)
    }

    pub fn rgb_image(&self) -> DynamicImage {
        let img = RgbImage::from_fn(self.width as u32, self.height as u32, |x, _| {
            let v = self.pixel(x as usize);
            Rgb([v, v, v])
        });
        DynamicImage::ImageRgb8(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_exists() {
        let root = find_project_root().expect("Failed to find project root");
        assert!(root.exists());
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn test_output_dir_created() {
        let output = get_output_dir();
        assert!(output.exists());
        assert!(output.is_dir());
    }

    #[test]
    fn test_output_path() {
        let path = output_path("test.png");
        assert_eq!(path, get_output_dir().join("test.png"));
    }

    #[test]
    fn test_pattern_peak_and_first_zero() {
        let pattern = SlitPattern::new(100, 4).with_peak_column(55);
        assert_eq!(pattern.pixel(55), 240);
        assert!(pattern.pixel(54) < 240);
        // First dark fringe is one fringe spacing away
        assert_eq!(pattern.pixel(35), 12);
        assert_eq!(pattern.pixel(75), 12);
        assert!(pattern.pixel(50) > pattern.pixel(47));
    }

    #[test]
    fn test_arrays_and_images_agree() {
        let pattern = SlitPattern::new(30, 6).with_peak_column(11);
        let gray = pattern.gray_array();
        let rgb = pattern.rgb_array();
        let img = pattern.rgb_image().to_rgb8();

        assert_eq!(gray.shape(), &[6, 30]);
        assert_eq!(rgb.shape(), &[6, 30, 3]);
        for c in 0..30 {
            assert_eq!(gray[[3, c]], rgb[[3, c, 1]]);
            assert_eq!(img.get_pixel(c as u32, 3)[0] as f64, gray[[3, c]]);
        }
    }
}
