//! End-to-end filter runs: PNG in, filter, PNG out.

mod common;

use common::*;
use pixelator::models::AppConfig;
use pixelator::rendering::read_png;
use pixelator::services::FilterPipeline;
use pixelator_engine::{FilterKind, Pixel, PixelMatrix};
use pretty_assertions::assert_eq;

#[test]
fn test_every_filter_writes_same_sized_png() {
    let dir = tempfile::tempdir().unwrap();
    let image = noisy(21, 10, 7);
    let input = write_fixture_png(dir.path(), "input.png", &image);
    let pipeline = FilterPipeline::new(&AppConfig::default()).unwrap();

    for kind in FilterKind::ALL {
        let output = dir.path().join(format!("{kind}.png"));
        pipeline.process_file(kind, &input, &output).unwrap();

        let filtered = read_png(&output).unwrap();
        assert_same_dimensions(&filtered, &image);
    }
}

#[test]
fn test_source_file_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let image = two_tone(8, 8);
    let input = write_fixture_png(dir.path(), "input.png", &image);
    let before = std::fs::read(&input).unwrap();

    let pipeline = FilterPipeline::new(&AppConfig::default()).unwrap();
    pipeline
        .process_file(FilterKind::EdgeDetect, &input, &dir.path().join("out.png"))
        .unwrap();

    assert_eq!(std::fs::read(&input).unwrap(), before);
}

#[test]
fn test_grid_space_paints_cells_from_corner() {
    let image = noisy(12, 8, 3);
    let pipeline = FilterPipeline::new(&AppConfig::default()).unwrap();
    let out = pipeline.run(FilterKind::GridSpace, &image).unwrap();

    for row in 0..8 {
        for col in 0..12 {
            let corner = image[(row / 4 * 4, col / 4 * 4)];
            assert_eq!(out[(row, col)], corner, "({row}, {col})");
        }
    }
}

#[test]
fn test_edge_detect_marks_boundary() {
    let pipeline = FilterPipeline::new(&AppConfig::default()).unwrap();
    let out = pipeline.run(FilterKind::EdgeDetect, &two_tone(8, 4)).unwrap();

    for row in 0..4 {
        assert_eq!(out[(row, 2)], colors::RED);
        assert_eq!(out[(row, 3)], Pixel::BLACK);
        assert_eq!(out[(row, 4)], colors::BLUE);
    }
}

#[test]
fn test_cluster_filter_limits_colors() {
    let mut config = AppConfig::default();
    config.cluster.size = 3;
    let pipeline = FilterPipeline::new(&config).unwrap();

    let image = horizontal_ramp(40, 4);
    let palette = pipeline.cluster_palette(&image).unwrap();
    let out = pipeline.run(FilterKind::Cluster, &image).unwrap();

    assert_eq!(palette.colors().len(), 3);
    assert_max_colors(&out, 3);
    assert_colors_within(&out, palette.colors());
}

#[test]
fn test_linear_difference_collapses_flat_regions() {
    let pipeline = FilterPipeline::new(&AppConfig::default()).unwrap();
    let image = two_tone(10, 6);

    for kind in [
        FilterKind::LinearDifference,
        FilterKind::LinearDifference2,
        FilterKind::LinearDifference3,
        FilterKind::LinearDifference4,
    ] {
        let out = pipeline.run(kind, &image).unwrap();
        assert_colors_within(&out, &[colors::RED, colors::BLUE]);
    }
}

#[test]
fn test_gradient_palette_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), "linear_palette: gradient\ndistance: ciede2000\n");
    let config = AppConfig::load(&config_path).unwrap();
    let pipeline = FilterPipeline::new(&config).unwrap();

    let image = noisy(9, 9, 11);
    let first = pipeline.run(FilterKind::LinearDifference3, &image).unwrap();
    let second = pipeline.run(FilterKind::LinearDifference3, &image).unwrap();

    assert_same_dimensions(&first, &image);
    assert_eq!(first, second);
}

#[test]
fn test_contrast_adjustment_applies_before_filter() {
    let mut config = AppConfig::default();
    config.adjust.contrast = Some(80);
    let pipeline = FilterPipeline::new(&config).unwrap();

    let image = PixelMatrix::new(8, 8, colors::GREEN);
    let prepared = pipeline.prepare(&image);
    assert_ne!(prepared, image);

    let out = pipeline.run(FilterKind::GridSpace, &image).unwrap();
    assert_eq!(out, prepared);
}
