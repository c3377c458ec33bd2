//! Theoretical single-slit intensity models
//!
//! Both generators produce `num` samples across the picture's angular range
//! and rescale them so their peak matches the measured peak intensity.
//!
//! - [`fraunhofer`]: analytic far-field `sinc²` pattern
//! - [`fresnel`]: near-field pattern from numerically integrated Fresnel integrands

pub mod fraunhofer;
pub mod fresnel;
pub mod normalize;

use std::fmt;

use crate::algo::misc::max_value;

pub use fraunhofer::fraunhofer_curve;
pub use fresnel::{fresnel_curve, fresnel_integrals};
pub use normalize::normalize_to_peak;

/// Which diffraction model produced a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Fraunhofer,
    Fresnel,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Fraunhofer => write!(f, "Fraunhofer Model"),
            ModelKind::Fresnel => write!(f, "Fresnel Model"),
        }
    }
}

/// Normalized model intensities with the observation angles they were
/// evaluated at.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffractionModelCurve {
    kind: ModelKind,
    angles: Vec<f64>,
    intensity: Vec<f64>,
}

impl DiffractionModelCurve {
    pub(crate) fn new(kind: ModelKind, angles: Vec<f64>, intensity: Vec<f64>) -> Self {
        debug_assert_eq!(angles.len(), intensity.len());
        Self {
            kind,
            angles,
            intensity,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Signed observation angles in radians
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Normalized intensities
    pub fn values(&self) -> &[f64] {
        &self.intensity
    }

    pub fn len(&self) -> usize {
        self.intensity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensity.is_empty()
    }

    /// Peak intensity; equals the reference the curve was normalized to
    pub fn max(&self) -> f64 {
        max_value(&self.intensity).unwrap_or(0.0)
    }
}
