// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{
    AMBER, BLUEGREY, GREEN, LIGHTBLUE, ORANGE, PURPLE, RED, TEAL,
};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---
pub const COLOR_BATTERY_MAIN: &RGBColor = &GREEN;
pub const COLOR_BATTERY_FIT: &RGBColor = &RED;
pub const COLOR_STATE_MAIN: &RGBColor = &PURPLE;
pub const COLOR_LEFT_WHEEL: &RGBColor = &ORANGE;
pub const COLOR_RIGHT_WHEEL: &RGBColor = &LIGHTBLUE;
pub const COLOR_SPEED_EXP: &RGBColor = &TEAL;
pub const COLOR_SPEED_BUFF: &RGBColor = &AMBER;
pub const COLOR_OUTPUT_MAIN: &RGBColor = &LIGHTBLUE;
pub const COLOR_OUTPUT_EXPECTED: &RGBColor = &ORANGE;
pub const COLOR_STALL_CNT: &RGBColor = &RED;
pub const COLOR_STUCK_FLAG: &RGBColor = &PURPLE;
pub const COLOR_FREE_CNT: &RGBColor = &GREEN;
pub const COLOR_MAX_STALL: &RGBColor = &BLUEGREY;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_FIT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Radius of scatter markers (State chart).
pub const SCATTER_POINT_SIZE: i32 = 2;

// src/constants.rs
