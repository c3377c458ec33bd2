use diffraction::algo::{linspace, QuadratureOptions};
use diffraction::models::fresnel::fresnel_integrals;
use plotters::prelude::*;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fresnel Integrals Demonstration");
    println!("===============================");
    println!();

    let options = QuadratureOptions::default();
    let ts = linspace(0.0, 5.0, 201);

    let mut cs = Vec::with_capacity(ts.len());
    let mut ss = Vec::with_capacity(ts.len());
    for &t in &ts {
        let (c, s) = fresnel_integrals(t, &options)?;
        cs.push(c);
        ss.push(s);
    }
    let intensity: Vec<f64> = cs.iter().zip(&ss).map(|(c, s)| c * c + s * s).collect();

    println!("Function Values at Key Points:");
    for &t in &[0.5, 1.0, 2.0, 5.0] {
        let (c, s) = fresnel_integrals(t, &options)?;
        println!(
            "  t = {:.1}: C = {:.6}, S = {:.6}, C² + S² = {:.6}",
            t,
            c,
            s,
            c * c + s * s
        );
    }
    println!("  Limit t → ∞: C = S = 0.5, C² + S² = 0.5");
    println!();

    if !Path::new("plots").exists() {
        std::fs::create_dir("plots")?;
    }

    let plot_path = "plots/fresnel_integrals.png";
    let root = BitMapBackend::new(plot_path, (1600, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(800);

    // Left panel: Cornu spiral
    let mut spiral = ChartBuilder::on(&left)
        .caption("Cornu Spiral", ("sans-serif", 28).into_font().color(&BLACK))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..0.9, 0.0..0.8)?;
    spiral
        .configure_mesh()
        .x_desc("C(t)")
        .y_desc("S(t)")
        .draw()?;
    spiral.draw_series(LineSeries::new(
        cs.iter().zip(&ss).map(|(&c, &s)| (c, s)),
        BLUE,
    ))?;

    // Right panel: C² + S² against t
    let mut curve = ChartBuilder::on(&right)
        .caption(
            "C(t)² + S(t)²",
            ("sans-serif", 28).into_font().color(&BLACK),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..5.0, 0.0..1.0)?;
    curve
        .configure_mesh()
        .x_desc("t")
        .y_desc("Intensity")
        .draw()?;
    curve.draw_series(LineSeries::new(
        ts.iter().zip(&intensity).map(|(&t, &i)| (t, i)),
        RED,
    ))?;

    root.present()?;
    println!("Plot saved to: {}", plot_path);

    Ok(())
}
