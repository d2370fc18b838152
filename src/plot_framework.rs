// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, SCATTER_POINT_SIZE,
};

/// How a series is rendered: a connected line, or discrete points
/// (the State chart scatters its categorical codes).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SeriesMarker {
    Line,
    Scatter,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker: SeriesMarker,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a plot pane.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    pane_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{pane_name} {plot_type} Data Unavailable:\n{reason}");

    // Estimate text dimensions for centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Draws a single chart pane from a PlotConfig.
fn draw_single_pane_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(5)
        .y_label_formatter(&|y| {
            // Cumulative distances can get large; use k notation there but keep
            // decimals for small values like battery volts and outputs.
            if y.abs() >= 1000.0 {
                format!("{:.0}k", y / 1000.0)
            } else if y.abs() < 10.0 && y.fract() != 0.0 {
                format!("{:.2}", y)
            } else {
                format!("{:.0}", y)
            }
        })
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }

        match s.marker {
            SeriesMarker::Line => {
                let series = chart.draw_series(LineSeries::new(
                    s.data.iter().cloned(),
                    s.color.stroke_width(s.stroke_width),
                ))?;
                if !s.label.is_empty() {
                    let color = s.color;
                    series.label(&s.label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
                    });
                    legend_series_count += 1;
                }
            }
            SeriesMarker::Scatter => {
                let series = chart.draw_series(
                    s.data
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), SCATTER_POINT_SIZE, s.color.filled())),
                )?;
                if !s.label.is_empty() {
                    let color = s.color;
                    series.label(&s.label).legend(move |(x, y)| {
                        Circle::new((x + 10, y), SCATTER_POINT_SIZE + 1, color.filled())
                    });
                    legend_series_count += 1;
                }
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates a stacked plot image with one vertically stacked pane per entry in
/// `pane_names`. The closure supplies each pane's chart data; panes returning
/// `None` render a placeholder message instead of failing the whole image.
pub fn draw_stacked_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    pane_names: &[&str],
    mut get_pane_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(40, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((pane_names.len(), 1));
    let mut any_pane_plotted = false;

    for (pane_index, pane_name) in pane_names.iter().enumerate() {
        let area = &sub_plot_areas[pane_index];
        match get_pane_plot_data(pane_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_pane_chart(area, &plot_config)?;
                    any_pane_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, pane_name, plot_type_name, reason)?;
                }
            }
            None => {
                let reason = "Column Missing or No Valid Rows";
                draw_unavailable_message(area, pane_name, plot_type_name, reason)?;
            }
        }
    }

    if any_pane_plotted {
        root_area.present()?;
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!(
            "  Saved '{output_filename}' with placeholder panes only: no data available for any pane."
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - (-1.5)).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_degenerate_gets_fixed_padding() {
        let (min, max) = calculate_range(5.0, 5.0);
        assert!((min - 4.5).abs() < 1e-12);
        assert!((max - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_swapped_inputs() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0 && max > 10.0);
    }
}
