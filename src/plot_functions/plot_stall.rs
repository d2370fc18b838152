// src/plot_functions/plot_stall.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_FREE_CNT, COLOR_MAX_STALL, COLOR_STALL_CNT, COLOR_STUCK_FLAG, LINE_WIDTH_PLOT,
};
use crate::data_analysis::series::{extract_series, series_value_bounds};
use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::plot_framework::{
    calculate_range, draw_stacked_plot, PlotConfig, PlotSeries, SeriesMarker,
};
use crate::wheel_names::{wheel_name, WHEEL_NAMES};

/// Generates the per-wheel stall diagnostics plot: cumulative stall count,
/// the 0/1 stuck flag, successful get-free count, and the stall-count
/// shutdown ceiling, one pane per wheel.
pub fn plot_stall(
    log_data: &[LogRowData],
    flags: &ColumnFlags,
    output_prefix: &Path,
) -> Result<(), Box<dyn Error>> {
    // Keep the image next to the input file; the on-image label stays the stem.
    let output_file = format!("{}_Stall.png", output_prefix.display());
    let root_name = output_prefix.file_stem().unwrap_or_default().to_string_lossy();
    let plot_type_name = "Stall";

    let stall_columns = [Column::StallCntL, Column::StallCntR];
    let stuck_columns = [Column::StuckL, Column::StuckR];
    let free_columns = [Column::FreeCntL, Column::FreeCntR];
    let max_stall_columns = [Column::MaxStallL, Column::MaxStallR];

    let pane_configs: Vec<Option<PlotConfig>> = (0..WHEEL_NAMES.len())
        .map(|wheel| {
            let stall = extract_series(log_data, flags, stall_columns[wheel]).unwrap_or_default();
            let stuck = extract_series(log_data, flags, stuck_columns[wheel]).unwrap_or_default();
            let free = extract_series(log_data, flags, free_columns[wheel]).unwrap_or_default();
            let max_stall =
                extract_series(log_data, flags, max_stall_columns[wheel]).unwrap_or_default();
            if stall.is_empty() && stuck.is_empty() && free.is_empty() && max_stall.is_empty() {
                return None;
            }

            let mut x_min = f64::INFINITY;
            let mut x_max = f64::NEG_INFINITY;
            for (x, _) in stall
                .iter()
                .chain(stuck.iter())
                .chain(free.iter())
                .chain(max_stall.iter())
            {
                x_min = x_min.min(*x);
                x_max = x_max.max(*x);
            }
            let (val_min, val_max) = series_value_bounds(&[&stall, &stuck, &free, &max_stall])?;
            let (y_min, y_max) = calculate_range(val_min, val_max);

            let series_defs: [(&Vec<(f64, f64)>, &str, &plotters::style::RGBColor); 4] = [
                (&stall, stall_columns[wheel].name(), COLOR_STALL_CNT),
                (&stuck, stuck_columns[wheel].name(), COLOR_STUCK_FLAG),
                (&free, free_columns[wheel].name(), COLOR_FREE_CNT),
                (&max_stall, max_stall_columns[wheel].name(), COLOR_MAX_STALL),
            ];
            let series = series_defs
                .iter()
                .filter(|(data, _, _)| !data.is_empty())
                .map(|(data, label, color)| PlotSeries {
                    data: (*data).clone(),
                    label: label.to_string(),
                    color: **color,
                    stroke_width: LINE_WIDTH_PLOT,
                    marker: SeriesMarker::Line,
                })
                .collect();

            Some(PlotConfig {
                title: format!("{} Wheel Stall Diagnostics", wheel_name(wheel)),
                x_range: x_min..x_max.max(x_min + 1e-9),
                y_range: y_min..y_max,
                series,
                x_label: "Sample".to_string(),
                y_label: "Count / Flag".to_string(),
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

// src/plot_functions/plot_stall.rs
