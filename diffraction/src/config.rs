//! Experiment geometry for a single-slit diffraction measurement.
//!
//! Holds the physical setup of one photograph: laser wavelength, slit width,
//! slit-to-screen distance and the half-width of the screen region captured
//! in the picture. All derived geometry constants are pure functions of these
//! values.

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffractionError, Result};

/// Geometry of a single-slit diffraction experiment, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Illumination wavelength in meters
    pub wavelength: f64,
    /// Slit width in meters
    pub slit_width: f64,
    /// Slit-to-screen distance R in meters
    pub screen_distance: f64,
    /// Half-width of the imaged screen region in meters
    pub picture_half_width: f64,
    /// Whether the source image is RGB and needs grayscale conversion
    pub is_color: bool,
}

impl Default for ExperimentConfig {
    /// HeNe laser through a 0.5 mm slit onto a screen 3.64 m away
    fn default() -> Self {
        Self {
            wavelength: 632.8e-9,
            slit_width: 0.5e-3,
            screen_distance: 3.64,
            picture_half_width: 0.05,
            is_color: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_wavelength(self, wavelength: f64) -> Self {
        Self { wavelength, ..self }
    }

    pub fn with_slit_width(self, slit_width: f64) -> Self {
        Self { slit_width, ..self }
    }

    pub fn with_screen_distance(self, screen_distance: f64) -> Self {
        Self {
            screen_distance,
            ..self
        }
    }

    pub fn with_picture_half_width(self, picture_half_width: f64) -> Self {
        Self {
            picture_half_width,
            ..self
        }
    }

    pub fn with_color(self, is_color: bool) -> Self {
        Self { is_color, ..self }
    }

    /// Check that every length is positive and finite.
    ///
    /// # Errors
    /// `DiffractionError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wavelength", self.wavelength),
            ("slit_width", self.slit_width),
            ("screen_distance", self.screen_distance),
            ("picture_half_width", self.picture_half_width),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(DiffractionError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    /// Dimensionless Fresnel scale: `slit_width * sqrt(2 / (R * wavelength))`
    pub fn del_v(&self) -> f64 {
        self.slit_width * (2.0 / (self.screen_distance * self.wavelength)).sqrt()
    }

    /// Largest observation angle in the picture: `atan(pic_width / R)`
    pub fn max_angle(&self) -> f64 {
        (self.picture_half_width / self.screen_distance).atan()
    }

    /// Wavenumber `k = 2π / wavelength`
    pub fn wavenumber(&self) -> f64 {
        2.0 * PI / self.wavelength
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> std::result::Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> std::result::Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_geometry() {
        let config = ExperimentConfig::default();
        config.validate().unwrap();
        assert_relative_eq!(config.max_angle(), (0.05f64 / 3.64).atan());
        assert_relative_eq!(config.max_angle(), 0.013_735, epsilon = 1e-5);
    }

    #[test]
    fn test_del_v() {
        let config = ExperimentConfig::default();
        let expected = 0.5e-3 * (2.0_f64 / (3.64 * 632.8e-9)).sqrt();
        assert_relative_eq!(config.del_v(), expected);
        assert_relative_eq!(config.del_v(), 0.4659, epsilon = 1e-3);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let config = ExperimentConfig::default().with_slit_width(0.0);
        assert!(matches!(
            config.validate(),
            Err(DiffractionError::InvalidConfig {
                field: "slit_width",
                ..
            })
        ));

        let config = ExperimentConfig::default().with_screen_distance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(DiffractionError::InvalidConfig {
                field: "screen_distance",
                ..
            })
        ));

        let config = ExperimentConfig::default().with_wavelength(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");
        let config = ExperimentConfig::default()
            .with_slit_width(0.75e-3)
            .with_color(false);

        config.save_to_file(&path).unwrap();
        let loaded = ExperimentConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"wavelength\": ").unwrap();
        let err = ExperimentConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
