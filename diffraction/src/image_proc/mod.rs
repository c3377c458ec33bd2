//! Image processing for diffraction photographs
//!
//! Turns a decoded picture into a baseline-corrected intensity profile and
//! aligns that profile with the center of the model sample grid.

pub mod alignment;
pub mod grayscale;
pub mod io;
pub mod profile;

// Re-export key functionality for easier access
pub use alignment::PeakAlignment;
pub use grayscale::rgb_to_gray;
pub use io::{load_pixel_array, pixel_array_from_image};
pub use profile::IntensityProfile;
