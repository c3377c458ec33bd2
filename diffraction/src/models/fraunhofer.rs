//! Fraunhofer (far-field) single-slit diffraction model.
//!
//! # Physics Background
//!
//! For a slit of width `d` illuminated at wavelength `λ`, the far-field
//! intensity at observation angle `θ` is
//!
//! ```text
//! I(θ) = I₀ * [sin(β) / β]²,    β = k·d·sin(θ) / 2,    k = 2π / λ
//! ```
//!
//! `β = 0` is a removable singularity with limit 1. [`sinc`] handles it with
//! an explicit small-argument branch, so the center sample is exactly 1
//! before normalization and no offset epsilon angle is needed.
//!
//! # Sample Grid
//!
//! The right half is `num - num / 2` points over `[0, max_angle]`, starting at
//! zero. The left half negates the last `num / 2` of them in reverse. For even
//! `num` that is the whole right half, so both central samples sit at `θ = 0`.
//! For odd `num` the shared zero is skipped, the left half ends at `-step`,
//! and the single middle sample is `θ = 0`. The left half reuses the right
//! half's values, so the curve is exactly symmetric:
//! `curve[i] == curve[num - 1 - i]`.

use crate::algo::misc::linspace;
use crate::config::ExperimentConfig;
use crate::error::{Result, Stage};
use crate::models::normalize::normalize_to_peak;
use crate::models::{DiffractionModelCurve, ModelKind};

/// Below this `|β|` the Taylor form `1 - β²/6` replaces `sin(β)/β`
const SINC_SERIES_THRESHOLD: f64 = 1e-4;

/// Unnormalized `sin(x) / x` with the `x → 0` limit handled explicitly.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_SERIES_THRESHOLD {
        1.0 - x * x / 6.0
    } else {
        x.sin() / x
    }
}

/// Phase parameter `β = k·d·sin(θ) / 2` at observation angle `theta`.
pub fn beta(theta: f64, config: &ExperimentConfig) -> f64 {
    config.wavenumber() * config.slit_width * theta.sin() / 2.0
}

/// Relative far-field intensity `(sin β / β)²` at angle `theta` (radians).
///
/// Equals 1 at `θ = 0`.
pub fn intensity_at(theta: f64, config: &ExperimentConfig) -> f64 {
    let s = sinc(beta(theta, config));
    s * s
}

/// Non-negative half-range angles `[0, max_angle]` for the right half of the
/// grid: `num - num / 2` points.
fn half_range(max_angle: f64, num: usize) -> Vec<f64> {
    linspace(0.0, max_angle, num - num / 2)
}

/// Signed angle grid of `num` samples covering `[-max_angle, max_angle]`.
pub fn angle_grid(max_angle: f64, num: usize) -> Vec<f64> {
    let right = half_range(max_angle, num);
    let skip = right.len() - num / 2;
    right[skip..]
        .iter()
        .rev()
        .map(|theta| -theta)
        .chain(right.iter().copied())
        .collect()
}

/// Generate the normalized Fraunhofer curve.
///
/// # Arguments
/// * `config` - Experiment geometry
/// * `num` - Number of samples, matching the measured profile length
/// * `reference_max` - Measured peak intensity the curve is scaled to
///
/// # Errors
/// * `DiffractionError::InvalidConfig` for non-positive geometry
/// * `DiffractionError::DegenerateCurve` if `num` is zero
pub fn fraunhofer_curve(
    config: &ExperimentConfig,
    num: usize,
    reference_max: f64,
) -> Result<DiffractionModelCurve> {
    config.validate()?;
    let max_angle = config.max_angle();

    let right = half_range(max_angle, num);
    let right_values: Vec<f64> = right.iter().map(|&t| intensity_at(t, config)).collect();

    // Mirror the right half; for odd num the shared zero-angle sample appears once
    let skip = right.len() - num / 2;
    let raw: Vec<f64> = right_values[skip..]
        .iter()
        .rev()
        .chain(right_values.iter())
        .copied()
        .collect();

    log::debug!(
        "Fraunhofer: {num} samples over ±{max_angle:.6} rad, β_max = {:.3}",
        beta(max_angle, config)
    );

    let intensity = normalize_to_peak(&raw, reference_max, Stage::Fraunhofer)?;
    Ok(DiffractionModelCurve::new(
        ModelKind::Fraunhofer,
        angle_grid(max_angle, num),
        intensity,
    ))
}
