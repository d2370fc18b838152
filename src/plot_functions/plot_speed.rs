// src/plot_functions/plot_speed.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_SPEED_BUFF, COLOR_SPEED_EXP, LINE_WIDTH_PLOT};
use crate::data_analysis::series::{extract_series, series_value_bounds};
use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, PlotConfig, PlotSeries, SeriesMarker,
};
use crate::wheel_names::{wheel_name, WHEEL_NAMES};

/// Generates the per-wheel speed comparison plot: exponential-moving-average
/// speed vs buffered (windowed) speed, one pane per wheel.
pub fn plot_speed(
    log_data: &[LogRowData],
    flags: &ColumnFlags,
    output_prefix: &Path,
) -> Result<(), Box<dyn Error>> {
    // Keep the image next to the input file; the on-image label stays the stem.
    let output_file = format!("{}_Speed.png", output_prefix.display());
    let root_name = output_prefix.file_stem().unwrap_or_default().to_string_lossy();
    let plot_type_name = "Speed";

    let exp_columns = [Column::SpeedLExp, Column::SpeedRExp];
    let buff_columns = [Column::SpeedLBuff, Column::SpeedRBuff];

    let pane_configs: Vec<Option<PlotConfig>> = (0..WHEEL_NAMES.len())
        .map(|wheel| {
            let exp = extract_series(log_data, flags, exp_columns[wheel]).unwrap_or_default();
            let buff = extract_series(log_data, flags, buff_columns[wheel]).unwrap_or_default();
            if exp.is_empty() && buff.is_empty() {
                return None;
            }

            let mut x_min = f64::INFINITY;
            let mut x_max = f64::NEG_INFINITY;
            for (x, _) in exp.iter().chain(buff.iter()) {
                x_min = x_min.min(*x);
                x_max = x_max.max(*x);
            }
            let (val_min, val_max) = series_value_bounds(&[&exp, &buff])?;
            let (y_min, y_max) = calculate_range(val_min, val_max);

            let mut series = Vec::new();
            if !exp.is_empty() {
                series.push(PlotSeries {
                    data: exp,
                    label: format!("{} (exp avg)", exp_columns[wheel].name()),
                    color: *COLOR_SPEED_EXP,
                    stroke_width: LINE_WIDTH_PLOT,
                    marker: SeriesMarker::Line,
                });
            }
            if !buff.is_empty() {
                series.push(PlotSeries {
                    data: buff,
                    label: format!("{} (buffered)", buff_columns[wheel].name()),
                    color: *COLOR_SPEED_BUFF,
                    stroke_width: LINE_WIDTH_PLOT,
                    marker: SeriesMarker::Line,
                });
            }

            Some(PlotConfig {
                title: format!("{} Wheel Speed", wheel_name(wheel)),
                x_range: x_min..x_max.max(x_min + 1e-9),
                y_range: y_min..y_max,
                series,
                x_label: "Sample".to_string(),
                y_label: "Speed".to_string(),
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

// src/plot_functions/plot_speed.rs
