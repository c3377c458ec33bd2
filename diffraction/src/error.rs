//! Error taxonomy for the diffraction analysis pipeline.
//!
//! Every failure names the pipeline [`Stage`] that raised it so a caller can
//! report which part of the analysis aborted. Per-sample failures additionally
//! carry the sample index. Inputs are deterministic, so nothing is retried.

use std::fmt;

use thiserror::Error;

use crate::algo::quadrature::QuadratureError;

/// Pipeline stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    Alignment,
    Fraunhofer,
    Fresnel,
    Normalization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Extraction => write!(f, "extraction"),
            Stage::Alignment => write!(f, "alignment"),
            Stage::Fraunhofer => write!(f, "Fraunhofer model"),
            Stage::Fresnel => write!(f, "Fresnel model"),
            Stage::Normalization => write!(f, "normalization"),
        }
    }
}

/// Errors raised by the analysis pipeline.
#[derive(Debug, Error)]
pub enum DiffractionError {
    /// Pixel array is empty, has the wrong shape, or could not be decoded.
    #[error("Invalid image data: {reason}")]
    InvalidImageData { reason: String },

    /// A geometry parameter is non-positive or non-finite.
    #[error("Invalid config: `{field}` must be positive and finite, got {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    /// Adaptive quadrature did not converge for one Fresnel sample.
    #[error("Fresnel integration failed at sample {index} (v1 = {v1:.6}, v2 = {v2:.6})")]
    IntegrationFailure {
        index: usize,
        v1: f64,
        v2: f64,
        #[source]
        source: QuadratureError,
    },

    /// A raw model curve has no positive maximum, so it cannot be rescaled.
    #[error("Degenerate {stage} curve: maximum is {max}, scale factor is undefined")]
    DegenerateCurve { stage: Stage, max: f64 },
}

impl DiffractionError {
    pub(crate) fn invalid_image(reason: impl Into<String>) -> Self {
        DiffractionError::InvalidImageData {
            reason: reason.into(),
        }
    }

    /// Stage of the pipeline that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            DiffractionError::InvalidImageData { .. } => Stage::Extraction,
            // Geometry is first consumed by the Fraunhofer generator
            DiffractionError::InvalidConfig { .. } => Stage::Fraunhofer,
            DiffractionError::IntegrationFailure { .. } => Stage::Fresnel,
            DiffractionError::DegenerateCurve { stage, .. } => *stage,
        }
    }

    /// Sample index for per-sample failures.
    pub fn sample_index(&self) -> Option<usize> {
        match self {
            DiffractionError::IntegrationFailure { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffractionError>;
