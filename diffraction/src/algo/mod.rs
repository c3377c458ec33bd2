//! Numeric algorithms used by the diffraction models
//!
//! Adaptive quadrature for the Fresnel integrals and small helpers for
//! building and scanning sample series.

pub mod misc;
pub mod quadrature;

pub use misc::{argmax_first, linspace, max_value, min_value};
pub use quadrature::{integrate, QuadratureError, QuadratureOptions, QuadratureResult};
