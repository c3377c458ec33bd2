//! Peak alignment of a measured profile against centered model curves.
//!
//! Model curves are generated with their peak at the center sample. The
//! measured profile is truncated from `start_offset = |num/2 - max_index|`
//! onward so that, once the plot abscissa is shifted by the same offset, its
//! peak lands on the model peak. Alignment is sample-granular: no smoothing
//! and no interpolation.
//!
//! The truncated series is shorter than `num`. It is meant for overlay
//! against the full-length model curves using [`PeakAlignment::measured_positions`]
//! and [`PeakAlignment::model_positions`], not for element-wise comparison.

use crate::algo::misc::linspace;
use crate::image_proc::profile::IntensityProfile;

/// Measured profile aligned to the center of the model sample grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakAlignment {
    num: usize,
    max_index: usize,
    start_offset: usize,
    shifted_profile: Vec<f64>,
}

impl PeakAlignment {
    pub fn from_profile(profile: &IntensityProfile) -> Self {
        let num = profile.len();
        let max_index = profile.max_index();
        let start_offset = (num / 2).abs_diff(max_index);
        let shifted_profile = profile.values()[start_offset..].to_vec();

        log::debug!("Peak at sample {max_index} of {num}, aligning from offset {start_offset}");

        Self {
            num,
            max_index,
            start_offset,
            shifted_profile,
        }
    }

    /// Number of samples in the source profile
    pub fn num(&self) -> usize {
        self.num
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Profile samples from `start_offset` onward
    pub fn shifted_profile(&self) -> &[f64] {
        &self.shifted_profile
    }

    /// Plot abscissae for the model curves: `num` points spanning [0, num].
    pub fn model_positions(&self) -> Vec<f64> {
        linspace(0.0, self.num as f64, self.num)
    }

    /// Plot abscissae for the shifted profile, starting at zero.
    ///
    /// These are the model positions from `start_offset` onward, shifted so
    /// the first one is zero.
    pub fn measured_positions(&self) -> Vec<f64> {
        let positions = self.model_positions();
        let origin = positions[self.start_offset];
        positions[self.start_offset..]
            .iter()
            .map(|x| x - origin)
            .collect()
    }
}
