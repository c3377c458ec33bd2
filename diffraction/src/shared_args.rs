use crate::config::ExperimentConfig;
use clap::Parser;
use std::path::PathBuf;

/// Experiment geometry flags shared by the command line tools.
///
/// Lengths are given in lab-friendly units and converted to meters. Any flag
/// left unset falls back to the `--config` file, then to the built-in lab
/// defaults.
#[derive(Parser, Debug, Clone, Default)]
pub struct ExperimentArgs {
    /// JSON file with an ExperimentConfig; individual flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Laser wavelength in nanometers (default 632.8)
    #[arg(long)]
    pub wavelength_nm: Option<f64>,

    /// Slit-to-screen distance in meters (default 3.64)
    #[arg(long)]
    pub screen_distance: Option<f64>,

    /// Half-width of the imaged screen region in meters (default 0.05)
    #[arg(long)]
    pub picture_half_width: Option<f64>,

    /// Treat the images as grayscale instead of RGB
    #[arg(long, default_value_t = false)]
    pub grayscale: bool,
}

impl ExperimentArgs {
    /// Resolve the base config: file (if any) overridden by explicit flags.
    ///
    /// The slit width is not set here; it is paired per image.
    pub fn base_config(&self) -> Result<ExperimentConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::load_from_file(path).map_err(|e| {
                format!("Failed to load config from '{}': {}", path.display(), e)
            })?,
            None => ExperimentConfig::default(),
        };

        if let Some(nm) = self.wavelength_nm {
            config.wavelength = nm * 1e-9;
        }
        if let Some(r) = self.screen_distance {
            config.screen_distance = r;
        }
        if let Some(w) = self.picture_half_width {
            config.picture_half_width = w;
        }
        if self.grayscale {
            config.is_color = false;
        }

        Ok(config)
    }
}

/// Pair every image with a slit width in millimeters.
///
/// A single width applies to all images; otherwise the counts must match.
/// No widths means every image keeps `default_width` (meters).
pub fn pair_slit_widths(
    images: &[PathBuf],
    widths_mm: &[f64],
    default_width: f64,
) -> Result<Vec<(PathBuf, f64)>, String> {
    let widths: Vec<f64> = match widths_mm.len() {
        0 => vec![default_width; images.len()],
        1 => vec![widths_mm[0] * 1e-3; images.len()],
        n if n == images.len() => widths_mm.iter().map(|w| w * 1e-3).collect(),
        n => {
            return Err(format!(
                "Got {} images but {} slit widths; pass one width or one per image",
                images.len(),
                n
            ))
        }
    };
    Ok(images.iter().cloned().zip(widths).collect())
}
