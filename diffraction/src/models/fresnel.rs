//! Fresnel (near-field) single-slit diffraction model.
//!
//! # Physics Background
//!
//! The near-field pattern is expressed through the Fresnel integrands
//!
//! ```text
//! S(x) = sin(πx²/2),    C(x) = cos(πx²/2)
//! ```
//!
//! integrated between two bounds in the dimensionless Fresnel coordinate. For
//! an observation angle `θ` the aperture edges map to
//!
//! ```text
//! v1 = -(θ/d + 1/2)·Δv,    v2 = -(θ/d - 1/2)·Δv,    Δv = d·sqrt(2 / (R·λ))
//! ```
//!
//! and the intensity sample is `(∫S)² + (∫C)²` over `[v1, v2]`.
//!
//! # Evaluation
//!
//! Each sample is a pure function of its angle and the geometry
//! ([`sample_intensity`]), so the curve is a parallel map over the angle grid.
//! Results are collected in index order before normalization, so the output
//! does not depend on the number of worker threads.
//!
//! If any sample fails to converge the whole curve fails with
//! `DiffractionError::IntegrationFailure` naming that sample. No placeholder
//! values are substituted.

use std::f64::consts::FRAC_PI_2;

use rayon::prelude::*;

use crate::algo::misc::linspace;
use crate::algo::quadrature::{integrate, QuadratureError, QuadratureOptions};
use crate::config::ExperimentConfig;
use crate::error::{DiffractionError, Result, Stage};
use crate::models::normalize::normalize_to_peak;
use crate::models::{DiffractionModelCurve, ModelKind};

/// Sine Fresnel integrand `sin(πx²/2)`
pub fn sine_integrand(x: f64) -> f64 {
    (FRAC_PI_2 * x * x).sin()
}

/// Cosine Fresnel integrand `cos(πx²/2)`
pub fn cosine_integrand(x: f64) -> f64 {
    (FRAC_PI_2 * x * x).cos()
}

/// Fresnel-coordinate bounds `(v1, v2)` of the aperture seen at `angle`.
pub fn fresnel_bounds(angle: f64, config: &ExperimentConfig) -> (f64, f64) {
    let del_v = config.del_v();
    let u = angle / config.slit_width;
    let v1 = -(u + 0.5) * del_v;
    let v2 = -(u - 0.5) * del_v;
    (v1, v2)
}

/// Unnormalized Fresnel intensity `(∫S)² + (∫C)²` between two bounds.
pub fn intensity_between(
    v1: f64,
    v2: f64,
    options: &QuadratureOptions,
) -> std::result::Result<f64, QuadratureError> {
    let s = integrate(sine_integrand, v1, v2, options)?.value;
    let c = integrate(cosine_integrand, v1, v2, options)?.value;
    Ok(s * s + c * c)
}

/// Unnormalized Fresnel intensity at one observation angle.
pub fn sample_intensity(
    angle: f64,
    config: &ExperimentConfig,
    options: &QuadratureOptions,
) -> std::result::Result<f64, QuadratureError> {
    let (v1, v2) = fresnel_bounds(angle, config);
    intensity_between(v1, v2, options)
}

/// Standard Fresnel integrals `(C(t), S(t))` from 0 to `t`.
///
/// `C² + S²` traces the intensity along the Cornu spiral; both integrals tend
/// to 1/2 as `t → ∞`.
pub fn fresnel_integrals(
    t: f64,
    options: &QuadratureOptions,
) -> std::result::Result<(f64, f64), QuadratureError> {
    let c = integrate(cosine_integrand, 0.0, t, options)?.value;
    let s = integrate(sine_integrand, 0.0, t, options)?.value;
    Ok((c, s))
}

/// Generate the normalized Fresnel curve.
///
/// # Arguments
/// * `config` - Experiment geometry
/// * `num` - Number of samples, matching the measured profile length
/// * `reference_max` - Measured peak intensity the curve is scaled to
/// * `options` - Quadrature tolerances and subdivision budget
///
/// # Errors
/// * `DiffractionError::InvalidConfig` for non-positive geometry
/// * `DiffractionError::IntegrationFailure` for the first failing sample found
/// * `DiffractionError::DegenerateCurve` if every sample is zero or `num` is zero
pub fn fresnel_curve(
    config: &ExperimentConfig,
    num: usize,
    reference_max: f64,
    options: &QuadratureOptions,
) -> Result<DiffractionModelCurve> {
    config.validate()?;
    let max_angle = config.max_angle();
    let angles = linspace(-max_angle, max_angle, num);

    let (v_first, _) = fresnel_bounds(-max_angle, config);
    let (_, v_last) = fresnel_bounds(max_angle, config);
    log::debug!(
        "Fresnel: {num} samples over ±{max_angle:.6} rad, Δv = {:.4}, v ∈ [{:.3}, {:.3}]",
        config.del_v(),
        v_last.min(v_first),
        v_last.max(v_first)
    );

    let raw: Vec<f64> = angles
        .par_iter()
        .enumerate()
        .map(|(index, &angle)| {
            sample_intensity(angle, config, options).map_err(|source| {
                let (v1, v2) = fresnel_bounds(angle, config);
                DiffractionError::IntegrationFailure {
                    index,
                    v1,
                    v2,
                    source,
                }
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let intensity = normalize_to_peak(&raw, reference_max, Stage::Fresnel)?;
    Ok(DiffractionModelCurve::new(ModelKind::Fresnel, angles, intensity))
}
