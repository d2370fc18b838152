// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use usage_stats_render::data_analysis::linear_regression::{linear_regression, RegressionFit};
use usage_stats_render::data_analysis::series::extract_series;
use usage_stats_render::data_input::log_data::Column;
use usage_stats_render::data_input::log_parser::parse_log_file;
use usage_stats_render::plot_functions::plot_battery::plot_battery;
use usage_stats_render::plot_functions::plot_output::plot_output;
use usage_stats_render::plot_functions::plot_overview::plot_overview;
use usage_stats_render::plot_functions::plot_speed::plot_speed;
use usage_stats_render::plot_functions::plot_stall::plot_stall;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_file.csv>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    // Output PNGs sit next to the input file, sharing its stem.
    let output_prefix = input_path.with_extension("");

    // --- Parse Log File ---
    let (all_log_data, column_flags) = parse_log_file(input_path)?;

    if all_log_data.is_empty() {
        println!("No valid data rows read, cannot generate plots.");
        return Ok(());
    }

    // --- Battery Drain Regression ---
    println!("\n--- Battery Level Regression ---");
    let battery_fit: Option<RegressionFit> =
        match extract_series(&all_log_data, &column_flags, Column::BatteryLevel) {
            Ok(series) => match linear_regression(&series) {
                Ok(fit) => {
                    println!("  Samples used: {}", fit.n);
                    println!("  Slope: {:+.6e} V/sample", fit.slope);
                    println!("  Intercept: {:.4} V", fit.intercept);
                    println!("  R²: {:.4}", fit.r_squared);
                    Some(fit)
                }
                Err(e) => {
                    println!("  Skipping regression: {}", e);
                    None
                }
            },
            Err(e) => {
                println!("  Skipping regression: {}", e);
                None
            }
        };

    // --- Generate Plots ---
    println!("\n--- Generating Overview Plot ---");
    plot_overview(&all_log_data, &column_flags, battery_fit.as_ref(), &output_prefix)?;

    println!("\n--- Generating Battery Plot ---");
    plot_battery(&all_log_data, &column_flags, battery_fit.as_ref(), &output_prefix)?;

    println!("\n--- Generating Speed Plot ---");
    plot_speed(&all_log_data, &column_flags, &output_prefix)?;

    println!("\n--- Generating Output Plot ---");
    plot_output(&all_log_data, &column_flags, &output_prefix)?;

    println!("\n--- Generating Stall Plot ---");
    plot_stall(&all_log_data, &column_flags, &output_prefix)?;

    Ok(())
}
