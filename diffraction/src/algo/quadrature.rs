//! Adaptive Gauss-Kronrod quadrature
//!
//! Globally adaptive 7/15-point Gauss-Kronrod integration. The interval with
//! the largest error estimate is bisected until the summed error estimate
//! drops below the requested tolerance or the subdivision budget runs out.
//! The budget bounds the work per call, so a non-converging integrand
//! reports [`QuadratureError::MaxSubdivisions`] instead of looping.

use thiserror::Error;

/// Kronrod abscissae on [-1, 1], positive half, descending. Odd indices are
/// shared with the embedded 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// 15-point Kronrod weights matching `XGK`
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// 7-point Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]`, `XGK[7]`
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Errors that can occur during adaptive integration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("Integration bounds must be finite, got [{0}, {1}]")]
    NonFiniteBounds(f64, f64),

    #[error("Tolerances must be non-negative and not both zero (abs = {abs_tol}, rel = {rel_tol})")]
    InvalidTolerance { abs_tol: f64, rel_tol: f64 },

    #[error("Integrand returned a non-finite value at x = {0}")]
    NonFiniteIntegrand(f64),

    #[error("No convergence after {limit} subdivisions (estimated error {estimated_error:e})")]
    MaxSubdivisions { limit: usize, estimated_error: f64 },

    #[error("Interval [{a}, {b}] cannot be bisected further in floating point")]
    IntervalTooSmall { a: f64, b: f64 },
}

/// Tolerances and work budget for [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOptions {
    /// Absolute error target
    pub abs_tol: f64,
    /// Relative error target, scaled by the magnitude of the result
    pub rel_tol: f64,
    /// Maximum number of subintervals held at once
    pub max_subdivisions: usize,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            abs_tol: 1e-10,
            rel_tol: 1e-8,
            max_subdivisions: 200,
        }
    }
}

/// Converged integral with its error estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    pub value: f64,
    pub estimated_error: f64,
    pub subdivisions: usize,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Apply the 15-point Kronrod rule to [a, b], returning (integral, |K15 - G7|).
fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> Result<(f64, f64), QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);

    let eval = |x: f64| -> Result<f64, QuadratureError> {
        let y = f(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadratureError::NonFiniteIntegrand(x))
        }
    };

    let f_center = eval(center)?;
    let mut kronrod = f_center * WGK[7];
    let mut gauss = f_center * WG[3];

    for (j, (&node, &weight)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half_length * node;
        let pair = eval(center - dx)? + eval(center + dx)?;
        kronrod += weight * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    let value = kronrod * half_length;
    let error = ((kronrod - gauss) * half_length).abs();
    Ok((value, error))
}

/// Integrate `f` from `a` to `b` with globally adaptive Gauss-Kronrod quadrature.
///
/// Reversed bounds (`a > b`) give the negated integral. Equal bounds give zero
/// without evaluating `f`.
///
/// # Arguments
///
/// * `f` - The integrand; must be finite everywhere on [a, b]
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Tolerances and subdivision budget
///
/// # Errors
///
/// * `QuadratureError::NonFiniteBounds` - a bound is NaN or infinite
/// * `QuadratureError::InvalidTolerance` - negative tolerances or both zero
/// * `QuadratureError::NonFiniteIntegrand` - `f` produced NaN or infinity
/// * `QuadratureError::MaxSubdivisions` - budget exhausted before convergence
/// * `QuadratureError::IntervalTooSmall` - bisection hit floating point resolution
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    options: &QuadratureOptions,
) -> Result<QuadratureResult, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(QuadratureError::NonFiniteBounds(a, b));
    }
    let QuadratureOptions {
        abs_tol,
        rel_tol,
        max_subdivisions,
    } = *options;
    if !(abs_tol >= 0.0 && rel_tol >= 0.0) || (abs_tol == 0.0 && rel_tol == 0.0) {
        return Err(QuadratureError::InvalidTolerance { abs_tol, rel_tol });
    }

    if a == b {
        return Ok(QuadratureResult {
            value: 0.0,
            estimated_error: 0.0,
            subdivisions: 0,
        });
    }

    let (value, error) = gauss_kronrod_15(&f, a, b)?;
    let mut segments = vec![Segment { a, b, value, error }];

    loop {
        let total: f64 = segments.iter().map(|s| s.value).sum();
        let total_error: f64 = segments.iter().map(|s| s.error).sum();
        let tolerance = abs_tol.max(rel_tol * total.abs());

        if total_error <= tolerance {
            return Ok(QuadratureResult {
                value: total,
                estimated_error: total_error,
                subdivisions: segments.len(),
            });
        }

        if segments.len() >= max_subdivisions.max(1) {
            return Err(QuadratureError::MaxSubdivisions {
                limit: max_subdivisions,
                estimated_error: total_error,
            });
        }

        // Bisect the segment contributing the most error
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let Segment { a: left, b: right, .. } = segments.swap_remove(worst);
        let mid = 0.5 * (left + right);
        if mid == left || mid == right {
            return Err(QuadratureError::IntervalTooSmall { a: left, b: right });
        }

        let (v1, e1) = gauss_kronrod_15(&f, left, mid)?;
        let (v2, e2) = gauss_kronrod_15(&f, mid, right)?;
        segments.push(Segment {
            a: left,
            b: mid,
            value: v1,
            error: e1,
        });
        segments.push(Segment {
            a: mid,
            b: right,
            value: v2,
            error: e2,
        });
    }
}
