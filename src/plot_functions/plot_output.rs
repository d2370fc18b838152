// src/plot_functions/plot_output.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_OUTPUT_EXPECTED, COLOR_OUTPUT_MAIN, LINE_WIDTH_PLOT};
use crate::data_analysis::series::{extract_series, series_value_bounds};
use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, PlotConfig, PlotSeries, SeriesMarker,
};
use crate::wheel_names::{wheel_name, WHEEL_NAMES};

/// Generates the per-wheel motor output plot: commanded output vs the
/// expected output the stall checker compares against, one pane per wheel.
pub fn plot_output(
    log_data: &[LogRowData],
    flags: &ColumnFlags,
    output_prefix: &Path,
) -> Result<(), Box<dyn Error>> {
    // Keep the image next to the input file; the on-image label stays the stem.
    let output_file = format!("{}_Output.png", output_prefix.display());
    let root_name = output_prefix.file_stem().unwrap_or_default().to_string_lossy();
    let plot_type_name = "Output";

    let output_columns = [Column::OutputL, Column::OutputR];
    let expected_columns = [Column::ExpectedL, Column::ExpectedR];

    let pane_configs: Vec<Option<PlotConfig>> = (0..WHEEL_NAMES.len())
        .map(|wheel| {
            let output = extract_series(log_data, flags, output_columns[wheel]).unwrap_or_default();
            let expected =
                extract_series(log_data, flags, expected_columns[wheel]).unwrap_or_default();
            if output.is_empty() && expected.is_empty() {
                return None;
            }

            let mut x_min = f64::INFINITY;
            let mut x_max = f64::NEG_INFINITY;
            for (x, _) in output.iter().chain(expected.iter()) {
                x_min = x_min.min(*x);
                x_max = x_max.max(*x);
            }
            let (val_min, val_max) = series_value_bounds(&[&output, &expected])?;
            let (y_min, y_max) = calculate_range(val_min, val_max);

            let mut series = Vec::new();
            if !output.is_empty() {
                series.push(PlotSeries {
                    data: output,
                    label: output_columns[wheel].name().to_string(),
                    color: *COLOR_OUTPUT_MAIN,
                    stroke_width: LINE_WIDTH_PLOT,
                    marker: SeriesMarker::Line,
                });
            }
            if !expected.is_empty() {
                series.push(PlotSeries {
                    data: expected,
                    label: expected_columns[wheel].name().to_string(),
                    color: *COLOR_OUTPUT_EXPECTED,
                    stroke_width: LINE_WIDTH_PLOT,
                    marker: SeriesMarker::Line,
                });
            }

            Some(PlotConfig {
                title: format!("{} Wheel Output vs Expected", wheel_name(wheel)),
                x_range: x_min..x_max.max(x_min + 1e-9),
                y_range: y_min..y_max,
                series,
                x_label: "Sample".to_string(),
                y_label: "Output".to_string(),
            })
        })
        .collect();

    draw_stacked_plot(
        &output_file,
        &root_name,
        plot_type_name,
        &WHEEL_NAMES,
        move |pane_index| pane_configs[pane_index].clone(),
    )
}

// src/plot_functions/plot_output.rs
