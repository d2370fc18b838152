// src/plot_functions/mod.rs

pub mod plot_battery;
pub mod plot_output;
pub mod plot_overview;
pub mod plot_speed;
pub mod plot_stall;
