// src/plot_functions/plot_battery.rs

use std::error::Error;
use std::path::Path;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{COLOR_BATTERY_FIT, COLOR_BATTERY_MAIN, LINE_WIDTH_FIT, LINE_WIDTH_PLOT};
use crate::data_analysis::linear_regression::RegressionFit;
use crate::data_analysis::series::extract_series;
use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, PlotConfig, PlotSeries, SeriesMarker,
};

const PANE_NAMES: [&str; 1] = ["Battery"];

/// Generates the single-pane battery level plot with the OLS drain-estimate
/// overlay. The caption carries slope and R² so a glance at the PNG answers
/// "how fast is it draining and how linear is the drain".
pub fn plot_battery(
    log_data: &[LogRowData],
    flags: &ColumnFlags,
    battery_fit: Option<&RegressionFit>,
    output_prefix: &Path,
) -> Result<(), Box<dyn Error>> {
    // Keep the image next to the input file; the on-image label stays the stem.
    let output_file = format!("{}_Battery.png", output_prefix.display());
    let root_name = output_prefix.file_stem().unwrap_or_default().to_string_lossy();
    let plot_type_name = "Battery";

    let battery = extract_series(log_data, flags, Column::BatteryLevel).ok();

    let pane_config: Option<PlotConfig> = battery.as_deref().and_then(|series| {
        if series.is_empty() {
            return None;
        }
        let (x_min, x_max) = (series[0].0, series[series.len() - 1].0);

        let values = Array1::from_iter(series.iter().map(|(_, v)| *v));
        let val_min = *values.min().ok()?;
        let val_max = *values.max().ok()?;
        let (y_min, y_max) = calculate_range(val_min, val_max);

        let title = match battery_fit {
            Some(fit) => format!(
                "Battery Level (slope {:+.3e} V/sample, R² {:.4})",
                fit.slope, fit.r_squared
            ),
            None => "Battery Level".to_string(),
        };

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
                label: "OLS fit".to_string(),
                color: *COLOR_BATTERY_FIT,
                stroke_width: LINE_WIDTH_FIT,
                marker: SeriesMarker::Line,
            });
        }

        Some(PlotConfig {
            title,
            x_range: x_min..x_max.max(x_min + 1e-9),
            y_range: y_min..y_max,
            series: plot_series,
            x_label: "Sample".to_string(),
            y_label: "Battery (V)".to_string(),
        })
    });

    draw_stacked_plot(
        &output_file,
        &root_name,
        plot_type_name,
        &PANE_NAMES,
        move |_pane_index| pane_config.clone(),
    )
}

// src/plot_functions/plot_battery.rs
