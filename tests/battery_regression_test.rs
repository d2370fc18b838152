// tests/battery_regression_test.rs
//
// End-to-end: CSV on disk -> parse -> extract series -> OLS fit. The drain
// estimate printed by the binary is this exact pipeline.

use std::fmt::Write as _;
use std::io::Write;

use tempfile::NamedTempFile;

use usage_stats_render::data_analysis::linear_regression::linear_regression;
use usage_stats_render::data_analysis::series::extract_series;
use usage_stats_render::data_input::log_data::Column;
use usage_stats_render::data_input::log_parser::parse_log_file;

#[test]
fn battery_drain_slope_matches_synthetic_log() {
    // 200 samples, 4.10 V draining 0.5 mV per sample, state cycling 0..=9.
    let mut contents = String::from("BatteryLevel,State\n");
    for i in 0..200 {
        let v = 4.10 - 0.0005 * i as f64;
        writeln!(contents, "{:.6},{}", v, i % 10).unwrap();
    }

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("write failed");

    let (rows, flags) = parse_log_file(file.path()).expect("parse failed");
    let series = extract_series(&rows, &flags, Column::BatteryLevel).expect("extract failed");
    let fit = linear_regression(&series).expect("regression failed");

    assert_eq!(fit.n, 200);
    // Fixture values are rounded to 6 decimals, so allow a small tolerance.
    assert!((fit.slope - (-0.0005)).abs() < 1e-9, "slope = {}", fit.slope);
    assert!((fit.intercept - 4.10).abs() < 1e-6, "intercept = {}", fit.intercept);
    assert!(fit.r_squared > 0.999999, "r_squared = {}", fit.r_squared);
}

#[test]
fn regression_is_skippable_when_log_is_too_short() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(b"BatteryLevel,State\n3.9,0\n").expect("write failed");

    let (rows, flags) = parse_log_file(file.path()).expect("parse failed");
    let series = extract_series(&rows, &flags, Column::BatteryLevel).expect("extract failed");
    assert!(linear_regression(&series).is_err());
}
