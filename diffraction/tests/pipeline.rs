use approx::assert_relative_eq;
use diffraction::algo::argmax_first;
use diffraction::error::Stage;
use diffraction::image_proc::load_pixel_array;
use diffraction::plot::render_overlay;
use diffraction::{AnalysisOptions, DiffractionAnalysis, DiffractionError, ExperimentConfig};
use ndarray::{Array, IxDyn};
use test_helpers::{output_path, SlitPattern};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn analyze(pixels: ndarray::ArrayViewD<f64>, config: &ExperimentConfig) -> DiffractionAnalysis {
    DiffractionAnalysis::from_pixels(pixels, config, &AnalysisOptions::default())
        .expect("pipeline should succeed on a synthetic pattern")
}

#[test]
fn test_color_pattern_end_to_end() {
    init_logging();
    let pattern = SlitPattern::new(500, 40).with_peak_column(262);
    let config = ExperimentConfig::default();
    let pixels = pattern.rgb_array().into_dyn();

    let analysis = analyze(pixels.view(), &config);

    assert_eq!(analysis.num(), 500);
    assert_eq!(analysis.profile().max_index(), 262);
    assert_eq!(analysis.start_offset(), 12);
    assert_eq!(analysis.shifted_profile().len(), 488);
    assert_eq!(
        analysis.shifted_profile()[0],
        analysis.profile().values()[analysis.start_offset()]
    );

    // Baseline removal puts the dark fringes at zero
    assert_eq!(analysis.profile().values().iter().cloned().fold(f64::MAX, f64::min), 0.0);
    assert_relative_eq!(
        analysis.max_intensity(),
        (240.0 - 12.0) * 0.9999,
        epsilon = 1e-9
    );

    // Both models share the grid length and peak at the measured maximum
    assert_eq!(analysis.fraunhofer().len(), 500);
    assert_eq!(analysis.fresnel().len(), 500);
    assert_eq!(analysis.fraunhofer().max(), analysis.max_intensity());
    assert_eq!(analysis.fresnel().max(), analysis.max_intensity());
}

#[test]
fn test_fraunhofer_curve_is_symmetric_and_centered() {
    let pattern = SlitPattern::new(501, 9);
    let config = ExperimentConfig::default().with_color(false);
    let pixels = pattern.gray_array().into_dyn();

    let analysis = analyze(pixels.view(), &config);
    let values = analysis.fraunhofer().values();
    let n = values.len();

    for i in 0..n {
        assert_eq!(values[i], values[n - 1 - i], "asymmetry at sample {i}");
    }
    assert_eq!(values[n / 2], analysis.max_intensity());
    assert_eq!(analysis.start_offset(), 0);
}

#[test]
fn test_fresnel_peak_near_center() {
    let pattern = SlitPattern::new(300, 5).with_peak_column(140);
    let config = ExperimentConfig::default().with_color(false);
    let pixels = pattern.gray_array().into_dyn();

    let analysis = analyze(pixels.view(), &config);
    let values = analysis.fresnel().values();
    let peak_index = argmax_first(values).unwrap();

    assert!(peak_index.abs_diff(values.len() / 2) <= 1);
    assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn test_repeated_runs_are_identical() {
    let pattern = SlitPattern::new(256, 12).with_peak_column(120);
    let config = ExperimentConfig::default().with_slit_width(0.75e-3);
    let pixels = pattern.rgb_array().into_dyn();

    let first = analyze(pixels.view(), &config);
    let second = analyze(pixels.view(), &config);
    assert_eq!(first, second);
}

#[test]
fn test_empty_image_reports_extraction_stage() {
    let config = ExperimentConfig::default().with_color(false);
    let pixels = Array::<f64, IxDyn>::zeros(IxDyn(&[0, 0]));

    let err = DiffractionAnalysis::from_pixels(pixels.view(), &config, &AnalysisOptions::default())
        .unwrap_err();
    assert!(matches!(err, DiffractionError::InvalidImageData { .. }));
    assert_eq!(err.stage(), Stage::Extraction);
}

#[test]
fn test_invalid_geometry_reports_config_field() {
    let pattern = SlitPattern::new(64, 4);
    let config = ExperimentConfig::default()
        .with_color(false)
        .with_screen_distance(0.0);
    let pixels = pattern.gray_array().into_dyn();

    let err = DiffractionAnalysis::from_pixels(pixels.view(), &config, &AnalysisOptions::default())
        .unwrap_err();
    match err {
        DiffractionError::InvalidConfig { field, .. } => assert_eq!(field, "screen_distance"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_image_file_round_trip() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.png");
    let pattern = SlitPattern::new(180, 20).with_peak_column(97);
    pattern.rgb_image().save(&path).unwrap();

    let config = ExperimentConfig::default();
    let from_file =
        DiffractionAnalysis::from_image_file(&path, &config, &AnalysisOptions::default()).unwrap();
    let pixels = load_pixel_array(&path, true).unwrap();
    let from_array = analyze(pixels.view(), &config);

    assert_eq!(from_file, from_array);
    assert_eq!(from_file.start_offset(), 7);
}

#[test]
fn test_missing_file_is_invalid_image() {
    let err = DiffractionAnalysis::from_image_file(
        std::path::Path::new("does/not/exist.png"),
        &ExperimentConfig::default(),
        &AnalysisOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.stage(), Stage::Extraction);
}

#[test]
fn test_overlay_and_csv_outputs() {
    init_logging();
    let pattern = SlitPattern::new(400, 16).with_peak_column(215);
    let config = ExperimentConfig::default();
    let pixels = pattern.rgb_array().into_dyn();
    let analysis = analyze(pixels.view(), &config);

    let plot_path = output_path("pipeline_overlay.png");
    render_overlay(&analysis, &plot_path).unwrap();
    assert!(plot_path.exists());

    let mut buffer = Vec::new();
    analysis.write_csv(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "position,measured,fraunhofer,fresnel");
    assert_eq!(lines.len(), 401);
    // Truncated measured series leaves the tail of the column empty
    assert!(lines[400].split(',').nth(1).unwrap().is_empty());
    assert!(!lines[1].split(',').nth(1).unwrap().is_empty());
}

#[test]
fn test_background_level_does_not_change_models() {
    let config = ExperimentConfig::default().with_color(false);
    let dim = SlitPattern::new(220, 8)
        .with_peak_column(104)
        .with_fringe_spacing(12.0);
    let bright = dim.with_background(25.0);

    let dim_pixels = dim.gray_array().into_dyn();
    let bright_pixels = bright.gray_array().into_dyn();
    let dim_run = analyze(dim_pixels.view(), &config);
    let bright_run = analyze(bright_pixels.view(), &config);

    assert_eq!(dim_run.profile().values(), bright_run.profile().values());
    assert_eq!(dim_run.fraunhofer(), bright_run.fraunhofer());
    assert_eq!(dim_run.fresnel(), bright_run.fresnel());
    assert_eq!(bright_run.profile().baseline() - dim_run.profile().baseline(), 13.0);
}

#[test]
fn test_grayscale_file_matches_grayscale_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    let pattern = SlitPattern::new(120, 10).with_peak_column(58);
    pattern.gray_image().save(&path).unwrap();

    let config = ExperimentConfig::default().with_color(false);
    let from_file =
        DiffractionAnalysis::from_image_file(&path, &config, &AnalysisOptions::default()).unwrap();
    let pixels = pattern.gray_array().into_dyn();

    assert_eq!(from_file, analyze(pixels.view(), &config));
    assert_eq!(from_file.start_offset(), 2);
}
