// src/plot_functions/plot_overview.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_BATTERY_FIT, COLOR_BATTERY_MAIN, COLOR_LEFT_WHEEL, COLOR_RIGHT_WHEEL, COLOR_STATE_MAIN,
    LINE_WIDTH_FIT, LINE_WIDTH_PLOT,
};
use crate::data_analysis::linear_regression::RegressionFit;
use crate::data_analysis::series::{extract_series, series_value_bounds};
use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, PlotConfig, PlotSeries, SeriesMarker,
};

const PANE_NAMES: [&str; 4] = ["Battery", "State", "Distance", "Speed"];

/// Generates the four-pane overview plot: battery level (with the regression
/// overlay when a fit is available), controller state, wheel distances, and
/// exp-avg wheel speeds. Mirrors the recorder's primary inspection view.
pub fn plot_overview(
    log_data: &[LogRowData],
    flags: &ColumnFlags,
    battery_fit: Option<&RegressionFit>,
    output_prefix: &Path,
) -> Result<(), Box<dyn Error>> {
    // Keep the image next to the input file; the on-image label stays the stem.
    let output_file = format!("{}_Overview.png", output_prefix.display());
    let root_name = output_prefix.file_stem().unwrap_or_default().to_string_lossy();
    let plot_type_name = "Overview";

    let battery = extract_series(log_data, flags, Column::BatteryLevel).ok();
    let state = extract_series(log_data, flags, Column::State).ok();
    let distance_l = extract_series(log_data, flags, Column::DistanceL).ok();
    let distance_r = extract_series(log_data, flags, Column::DistanceR).ok();
    let speed_l = extract_series(log_data, flags, Column::SpeedLExp).ok();
    let speed_r = extract_series(log_data, flags, Column::SpeedRExp).ok();

    let pane_configs: Vec<Option<PlotConfig>> = vec![
        battery.as_deref().and_then(|series| {
            battery_pane_config(series, battery_fit)
        }),
        state.as_deref().and_then(state_pane_config),
        wheel_pair_pane_config(
            "Wheel Distance",
            "Distance",
            distance_l.as_deref(),
            distance_r.as_deref(),
        ),
        wheel_pair_pane_config(
            "Wheel Speed (exp avg)",
            "Speed",
            speed_l.as_deref(),
            speed_r.as_deref(),
        ),
    ];

    draw_stacked_plot(
        &output_file,
        &root_name,
        plot_type_name,
        &PANE_NAMES,
        move |pane_index| pane_configs[pane_index].clone(),
    )
}

fn battery_pane_config(
    series: &[(f64, f64)],
    battery_fit: Option<&RegressionFit>,
) -> Option<PlotConfig> {
    if series.is_empty() {
        return None;
    }
    let (x_min, x_max) = (series[0].0, series[series.len() - 1].0);
    let (val_min, val_max) = series_value_bounds(&[series])?;
    let (y_min, y_max) = calculate_range(val_min, val_max);

    let mut plot_series = vec![PlotSeries {
        data: series.to_vec(),
        label: "BatteryLevel".to_string(),
        color: *COLOR_BATTERY_MAIN,
        stroke_width: LINE_WIDTH_PLOT,
        marker: SeriesMarker::Line,
    }];
    if let Some(fit) = battery_fit {
        plot_series.push(PlotSeries {
            data: vec![(x_min, fit.sample(x_min)), (x_max, fit.sample(x_max))],
            label: format!("OLS fit (slope {:+.3e}/sample)", fit.slope),
            color: *COLOR_BATTERY_FIT,
            stroke_width: LINE_WIDTH_FIT,
            marker: SeriesMarker::Line,
        });
    }

    Some(PlotConfig {
        title: "Battery Level".to_string(),
        x_range: x_min..x_max.max(x_min + 1e-9),
        y_range: y_min..y_max,
        series: plot_series,
        x_label: "Sample".to_string(),
        y_label: "Battery (V)".to_string(),
    })
}

fn state_pane_config(series: &[(f64, f64)]) -> Option<PlotConfig> {
    if series.is_empty() {
        return None;
    }
    let (x_min, x_max) = (series[0].0, series[series.len() - 1].0);
    let (val_min, val_max) = series_value_bounds(&[series])?;
    let (y_min, y_max) = calculate_range(val_min, val_max);

    Some(PlotConfig {
        title: "Controller State".to_string(),
        x_range: x_min..x_max.max(x_min + 1e-9),
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data: series.to_vec(),
            label: "State".to_string(),
            color: *COLOR_STATE_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Scatter,
        }],
        x_label: "Sample".to_string(),
        y_label: "State Code".to_string(),
    })
}

fn wheel_pair_pane_config(
    title: &str,
    y_label: &str,
    left: Option<&[(f64, f64)]>,
    right: Option<&[(f64, f64)]>,
) -> Option<PlotConfig> {
    let left = left.unwrap_or(&[]);
    let right = right.unwrap_or(&[]);
    if left.is_empty() && right.is_empty() {
        return None;
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for (x, _) in left.iter().chain(right.iter()) {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
    }
    let (val_min, val_max) = series_value_bounds(&[left, right])?;
    let (y_min, y_max) = calculate_range(val_min, val_max);

    let mut series = Vec::new();
    if !left.is_empty() {
        series.push(PlotSeries {
            data: left.to_vec(),
            label: "Left".to_string(),
            color: *COLOR_LEFT_WHEEL,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Line,
        });
    }
    if !right.is_empty() {
        series.push(PlotSeries {
            data: right.to_vec(),
            label: "Right".to_string(),
            color: *COLOR_RIGHT_WHEEL,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Line,
        });
    }

    Some(PlotConfig {
        title: title.to_string(),
        x_range: x_min..x_max.max(x_min + 1e-9),
        y_range: y_min..y_max,
        series,
        x_label: "Sample".to_string(),
        y_label: y_label.to_string(),
    })
}

// src/plot_functions/plot_overview.rs
