//! Compare diffraction photographs against Fraunhofer and Fresnel models
//!
//! Loads one or more pictures of single-slit diffraction patterns, extracts
//! the middle-row intensity profile of each, and generates both model curves
//! for the matching geometry. Each run can write an overlay PNG and a CSV of
//! the three curves.
//!
//! ```text
//! slit_compare 11.5.jpg 11.25.jpg --slit-width-mm 0.5 --slit-width-mm 0.75 --plot-dir plots
//! ```

use clap::Parser;
use diffraction::algo::QuadratureOptions;
use diffraction::plot::render_overlay;
use diffraction::shared_args::{pair_slit_widths, ExperimentArgs};
use diffraction::{AnalysisOptions, DiffractionAnalysis};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "Slit Compare",
    about = "Compares single-slit diffraction photographs with Fraunhofer and Fresnel models",
    long_about = None
)]
struct Args {
    /// Diffraction pattern images
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Slit width in millimeters; give one for all images or one per image
    #[arg(long = "slit-width-mm")]
    slit_widths_mm: Vec<f64>,

    #[command(flatten)]
    experiment: ExperimentArgs,

    /// Directory for overlay plots (one PNG per image)
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Directory for curve CSV files (one per image)
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Relative tolerance for the Fresnel quadrature
    #[arg(long, default_value_t = 1e-8)]
    rel_tol: f64,

    /// Maximum quadrature subdivisions per integral
    #[arg(long, default_value_t = 200)]
    max_subdivisions: usize,
}

fn output_file(dir: &Path, image: &Path, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pattern".to_string());
    dir.join(format!("{stem}_overlay.{extension}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let base = args.experiment.base_config()?;
    let runs = pair_slit_widths(&args.images, &args.slit_widths_mm, base.slit_width)?;
    let options = AnalysisOptions {
        quadrature: QuadratureOptions {
            rel_tol: args.rel_tol,
            max_subdivisions: args.max_subdivisions,
            ..Default::default()
        },
    };

    for dir in [&args.plot_dir, &args.csv_dir].into_iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }

    println!(
        "{:<24} {:>10} {:>8} {:>10} {:>8} {:>8}",
        "Image", "Slit (mm)", "Δv", "Peak", "Samples", "Offset"
    );
    println!("{:-<73}", "");

    let mut failures = 0;
    for (image, slit_width) in runs {
        let config = base.with_slit_width(slit_width);
        let analysis = match DiffractionAnalysis::from_image_file(&image, &config, &options) {
            Ok(analysis) => analysis,
            Err(e) => {
                eprintln!(
                    "Error analyzing {} ({} stage): {}",
                    image.display(),
                    e.stage(),
                    e
                );
                failures += 1;
                continue;
            }
        };

        println!(
            "{:<24} {:>10.3} {:>8.4} {:>10.2} {:>8} {:>8}",
            image.display().to_string(),
            slit_width * 1e3,
            analysis.del_v(),
            analysis.max_intensity(),
            analysis.num(),
            analysis.start_offset()
        );

        if let Some(dir) = &args.plot_dir {
            render_overlay(&analysis, &output_file(dir, &image, "png"))?;
        }
        if let Some(dir) = &args.csv_dir {
            let file = File::create(output_file(dir, &image, "csv"))?;
            analysis.write_csv(file)?;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} image(s) failed to analyze").into());
    }
    Ok(())
}
