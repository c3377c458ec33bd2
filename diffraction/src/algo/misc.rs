//! Miscellaneous numeric helpers for 1D sample series.
//!
//! - **Sampling grids**: evenly spaced points with fixed endpoints
//! - **Extrema**: minimum, maximum and first-occurrence arg-max of a series

/// Evenly spaced samples over the closed interval [start, stop].
///
/// Follows the usual `linspace` conventions: `num == 0` gives an empty vector,
/// `num == 1` gives `[start]`, and otherwise the last sample is exactly `stop`.
///
/// # Examples
///
/// ```rust
/// use diffraction::algo::misc::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            out[num - 1] = stop;
            out
        }
    }
}

/// Smallest value in the series, `None` when empty.
pub fn min_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value in the series, `None` when empty.
pub fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Index of the first occurrence of the maximum value.
///
/// Ties resolve to the lowest index. Returns `None` for an empty series.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-0.3, 0.7, 11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], -0.3);
        assert_eq!(xs[10], 0.7);
    }

    #[test]
    fn test_linspace_descending() {
        assert_eq!(linspace(1.0, 0.0, 3), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(4.0, 9.0, 1), vec![4.0]);
    }

    #[test]
    fn test_argmax_first_breaks_ties_low() {
        assert_eq!(argmax_first(&[1.0, 5.0, 3.0, 5.0]), Some(1));
        assert_eq!(argmax_first(&[2.0, 2.0, 2.0]), Some(0));
        assert_eq!(argmax_first(&[]), None);
    }

    #[test]
    fn test_extrema() {
        let values = [3.0, -1.0, 7.5, 0.0];
        assert_eq!(min_value(&values), Some(-1.0));
        assert_eq!(max_value(&values), Some(7.5));
        assert_eq!(max_value(&[]), None);
    }
}
