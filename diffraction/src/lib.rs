//! Single-slit diffraction analysis
//!
//! Compares the intensity profile measured from a photograph of a single-slit
//! diffraction pattern with the far-field (Fraunhofer) and near-field
//! (Fresnel) predictions for the same geometry. The three curves share a
//! common sample count and peak intensity so they can be overlaid directly.
//!
//! ```no_run
//! use diffraction::{AnalysisOptions, DiffractionAnalysis, ExperimentConfig};
//! use std::path::Path;
//!
//! let config = ExperimentConfig::default().with_slit_width(0.75e-3);
//! let analysis = DiffractionAnalysis::from_image_file(
//!     Path::new("pattern.jpg"),
//!     &config,
//!     &AnalysisOptions::default(),
//! )?;
//! println!("Δv = {:.4}, peak = {}", analysis.del_v(), analysis.max_intensity());
//! # Ok::<(), diffraction::DiffractionError>(())
//! ```

pub mod algo;
pub mod analysis;
pub mod config;
pub mod error;
pub mod image_proc;
pub mod models;
pub mod plot;
pub mod shared_args;

pub use analysis::{AnalysisOptions, DiffractionAnalysis};
pub use config::ExperimentConfig;
pub use error::{DiffractionError, Stage};
pub use models::{DiffractionModelCurve, ModelKind};
