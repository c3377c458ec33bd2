//! Peak normalization shared by the model generators.

use crate::algo::misc::max_value;
use crate::error::{DiffractionError, Result, Stage};

/// Rescale `raw` so its maximum equals `reference_max`.
///
/// Computes `raw[i] * (reference_max / max(raw))`, evaluated as
/// `(raw[i] / max(raw)) * reference_max` so the peak sample maps onto
/// `reference_max` exactly.
///
/// # Arguments
/// * `raw` - Unnormalized model intensities
/// * `reference_max` - Target peak, usually the measured `max_intensity`
/// * `stage` - Generator requesting the rescale, reported on failure
///
/// # Errors
/// `DiffractionError::DegenerateCurve` when `max(raw)` is zero, negative,
/// non-finite, or the curve is empty.
pub fn normalize_to_peak(raw: &[f64], reference_max: f64, stage: Stage) -> Result<Vec<f64>> {
    let peak = max_value(raw).unwrap_or(0.0);
    if !(peak.is_finite() && peak > 0.0) {
        return Err(DiffractionError::DegenerateCurve { stage, max: peak });
    }
    if reference_max <= 0.0 {
        log::warn!("{stage} curve normalized against a non-positive peak ({reference_max})");
    }

    Ok(raw.iter().map(|v| (v / peak) * reference_max).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_matches_reference_exactly() {
        let raw = [0.1, 0.3, 0.7, 0.2];
        let scaled = normalize_to_peak(&raw, 183.0, Stage::Fraunhofer).unwrap();
        assert_eq!(scaled[2], 183.0);
        assert_relative_eq!(scaled[0], 183.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_awkward_ratio_still_exact() {
        // 0.3 * (7 / 0.3) is not 7 in floating point, (0.3 / 0.3) * 7 is
        let scaled = normalize_to_peak(&[0.3, 0.1], 7.0, Stage::Fresnel).unwrap();
        assert_eq!(scaled[0], 7.0);
    }

    #[test]
    fn test_flat_zero_curve_is_degenerate() {
        let result = normalize_to_peak(&[0.0; 5], 10.0, Stage::Fresnel);
        assert!(matches!(
            result,
            Err(DiffractionError::DegenerateCurve {
                stage: Stage::Fresnel,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_and_nan_are_degenerate() {
        assert!(normalize_to_peak(&[], 1.0, Stage::Fraunhofer).is_err());
        assert!(normalize_to_peak(&[f64::NAN, f64::NAN], 1.0, Stage::Fraunhofer).is_err());
    }
}
