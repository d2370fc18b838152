// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::error::LogError;

/// Parses the usage-stats CSV log file, extracts data rows, and determines
/// header presence for every known column.
///
/// Returns a tuple containing:
/// 1. `Vec<LogRowData>`: All parsed log data rows, in file order. The sample
///    index of row `i` is `i` and is the x-value for every chart.
/// 2. `ColumnFlags`: Per-column header presence flags.
///
/// `BatteryLevel` is the only essential column; its absence is a fatal
/// `LogError::MissingEssentialColumn`. All other columns are optional and
/// only disable their dependent charts.
pub fn parse_log_file(input_file_path: &Path) -> Result<(Vec<LogRowData>, ColumnFlags), LogError> {
    // --- Header Index Mapping ---
    let mut column_flags = ColumnFlags::default();
    let header_indices: Vec<Option<usize>>;

    // Read CSV header and map known columns to indices.
    {
        let file = File::open(input_file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));
        let header_record = reader.headers()?.clone();
        println!("Headers found in CSV: {:?}", header_record);

        header_indices = Column::ALL
            .iter()
            .map(|column| {
                let primary = header_record.iter().position(|h| h.trim() == column.name());
                // Older logs use SpeedL/SpeedR for the exp-avg speeds; only fall
                // back to the alias when the primary spelling is absent.
                match (primary, column.alias()) {
                    (None, Some(alias)) => header_record.iter().position(|h| h.trim() == alias),
                    (found, _) => found,
                }
            })
            .collect();

        println!("Header mapping status:");
        for (i, column) in Column::ALL.iter().enumerate() {
            let found = header_indices[i].is_some();
            column_flags.set_found(*column, found);
            let note = match column {
                Column::BatteryLevel => " (Essential)",
                Column::SpeedLExp | Column::SpeedRExp => " (Optional, alias SpeedL/SpeedR)",
                _ => " (Optional)",
            };
            println!(
                "  '{}': {}{}",
                column.name(),
                if found { "Found" } else { "Not Found" },
                note
            );
        }

        if !column_flags.is_found(Column::BatteryLevel) {
            return Err(LogError::MissingEssentialColumn(Column::BatteryLevel));
        }
    }

    // --- Data Reading and Storage ---
    let mut all_log_data: Vec<LogRowData> = Vec::new();
    println!("\nReading data rows...");
    {
        let file = File::open(input_file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        for (row_index, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let mut current_row_data = LogRowData::default();

                    // Helper closure to parse a value from the record using the
                    // known-column index mapping.
                    let parse_f64_by_column_idx = |column_idx: usize| -> Option<f64> {
                        header_indices
                            .get(column_idx)
                            .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                            .and_then(|&csv_idx| record.get(csv_idx))
                            .and_then(|val_str| val_str.parse::<f64>().ok())
                    };

                    for (i, column) in Column::ALL.iter().enumerate() {
                        current_row_data.set(*column, parse_f64_by_column_idx(i));
                    }

                    // Rows without a single parseable value still occupy a
                    // sample index, but warn so corrupt tails are visible.
                    if Column::ALL.iter().all(|c| current_row_data.get(*c).is_none()) {
                        eprintln!(
                            "Warning: Row {} has no parseable values for any known column",
                            row_index + 1
                        );
                    }

                    all_log_data.push(current_row_data);
                }
                Err(e) => {
                    eprintln!("Warning: Skipping row {} due to CSV read error: {}", row_index + 1, e);
                }
            }
        }
    }

    println!("Finished reading {} data rows.", all_log_data.len());

    Ok((all_log_data, column_flags))
}

// src/data_input/log_parser.rs
