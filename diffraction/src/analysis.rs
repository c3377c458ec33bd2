//! End-to-end comparison of a diffraction photograph against both models.
//!
//! [`DiffractionAnalysis::from_pixels`] runs the whole pipeline:
//!
//! 1. Extract the baseline-corrected middle-row profile
//! 2. Align the profile peak with the center of the model grid
//! 3. Generate the Fraunhofer curve over the same `num` samples
//! 4. Generate the Fresnel curve over the same `num` samples
//!
//! Both model curves are normalized to the measured peak. The pixel array is
//! validated before any geometry is touched, so a bad image always reports
//! `InvalidImageData` regardless of the config. Every run recomputes
//! everything from scratch; identical inputs give identical outputs.

use std::path::Path;

use ndarray::ArrayViewD;

use crate::algo::quadrature::QuadratureOptions;
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::image_proc::{load_pixel_array, IntensityProfile, PeakAlignment};
use crate::models::{fraunhofer_curve, fresnel_curve, DiffractionModelCurve};

/// Tuning knobs for the numeric parts of the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Quadrature settings for the Fresnel integrals
    pub quadrature: QuadratureOptions,
}

/// Measured profile and both model curves for one photograph.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffractionAnalysis {
    config: ExperimentConfig,
    profile: IntensityProfile,
    alignment: PeakAlignment,
    fraunhofer: DiffractionModelCurve,
    fresnel: DiffractionModelCurve,
}

impl DiffractionAnalysis {
    /// Run the pipeline on a decoded pixel array.
    ///
    /// # Arguments
    /// * `pixels` - 2D grayscale or `(height, width, 3)` RGB array, per `config.is_color`
    /// * `config` - Experiment geometry
    /// * `options` - Numeric settings
    ///
    /// # Errors
    /// Any `DiffractionError`; see [`crate::error::DiffractionError::stage`]
    /// for which step failed.
    pub fn from_pixels(
        pixels: ArrayViewD<f64>,
        config: &ExperimentConfig,
        options: &AnalysisOptions,
    ) -> Result<Self> {
        let profile = IntensityProfile::extract(pixels, config.is_color)?;
        let alignment = PeakAlignment::from_profile(&profile);

        let num = profile.len();
        let max_intensity = profile.max_intensity();
        if max_intensity == 0.0 {
            log::warn!("Measured scanline is flat; model curves will be scaled to zero");
        }

        let fraunhofer = fraunhofer_curve(config, num, max_intensity)?;
        let fresnel = fresnel_curve(config, num, max_intensity, &options.quadrature)?;

        log::info!(
            "Analyzed {num} samples: peak {max_intensity:.2} at {}, offset {}, Δv = {:.4}",
            alignment.max_index(),
            alignment.start_offset(),
            config.del_v()
        );

        Ok(Self {
            config: *config,
            profile,
            alignment,
            fraunhofer,
            fresnel,
        })
    }

    /// Decode an image file and run the pipeline on it.
    pub fn from_image_file(
        path: &Path,
        config: &ExperimentConfig,
        options: &AnalysisOptions,
    ) -> Result<Self> {
        let pixels = load_pixel_array(path, config.is_color)?;
        Self::from_pixels(pixels.view(), config, options)
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn profile(&self) -> &IntensityProfile {
        &self.profile
    }

    pub fn alignment(&self) -> &PeakAlignment {
        &self.alignment
    }

    pub fn fraunhofer(&self) -> &DiffractionModelCurve {
        &self.fraunhofer
    }

    pub fn fresnel(&self) -> &DiffractionModelCurve {
        &self.fresnel
    }

    /// Measured samples from `start_offset` onward
    pub fn shifted_profile(&self) -> &[f64] {
        self.alignment.shifted_profile()
    }

    pub fn start_offset(&self) -> usize {
        self.alignment.start_offset()
    }

    pub fn num(&self) -> usize {
        self.profile.len()
    }

    pub fn max_intensity(&self) -> f64 {
        self.profile.max_intensity()
    }

    pub fn del_v(&self) -> f64 {
        self.config.del_v()
    }

    /// Write the three curves as CSV columns `position, measured, fraunhofer, fresnel`.
    ///
    /// Rows follow the model grid. The measured column is placed at its
    /// aligned position and left empty where the truncated profile has no
    /// sample.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> std::result::Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["position", "measured", "fraunhofer", "fresnel"])?;

        let positions = self.alignment.model_positions();
        let shifted = self.shifted_profile();
        for (i, x) in positions.iter().enumerate() {
            let measured = shifted.get(i).map(|v| v.to_string()).unwrap_or_default();
            wtr.write_record([
                x.to_string(),
                measured,
                self.fraunhofer.values()[i].to_string(),
                self.fresnel.values()[i].to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
