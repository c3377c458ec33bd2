//! Overlay plot of the measured profile against both model curves.

use std::path::Path;

use plotters::prelude::*;

use crate::algo::misc::max_value;
use crate::analysis::DiffractionAnalysis;

/// Render the aligned measured profile and both model curves to a PNG.
///
/// The measured series is drawn at its aligned positions (shifted so its
/// first sample sits at zero) while the model curves span the full grid.
pub fn render_overlay(
    analysis: &DiffractionAnalysis,
    save_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let alignment = analysis.alignment();
    let model_x = alignment.model_positions();
    let measured_x = alignment.measured_positions();

    let x_max = analysis.num() as f64;
    let peak = [
        max_value(analysis.shifted_profile()),
        max_value(analysis.fraunhofer().values()),
        max_value(analysis.fresnel().values()),
    ]
    .into_iter()
    .flatten()
    .fold(0.0, f64::max);
    let y_max = peak.max(1.0) * 1.05;

    let root = BitMapBackend::new(save_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Δv = {:.6}", analysis.del_v()),
            ("sans-serif", 28).into_font().color(&BLACK),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal Pixel")
        .y_desc("Relative Intensity")
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 16))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            measured_x
                .iter()
                .zip(analysis.shifted_profile())
                .map(|(&x, &y)| (x, y)),
            BLUE,
        ))?
        .label("Diffraction Data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            model_x
                .iter()
                .zip(analysis.fraunhofer().values())
                .map(|(&x, &y)| (x, y)),
            RED,
        ))?
        .label(analysis.fraunhofer().kind().to_string())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            model_x
                .iter()
                .zip(analysis.fresnel().values())
                .map(|(&x, &y)| (x, y)),
            GREEN,
        ))?
        .label(analysis.fresnel().kind().to_string())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()?;

    root.present()?;
    log::info!("Overlay plot saved to {}", save_path.display());

    Ok(())
}
