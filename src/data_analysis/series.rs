// src/data_analysis/series.rs

use crate::data_input::log_data::{Column, ColumnFlags, LogRowData};
use crate::error::LogError;

/// Extracts one column as (sample index, value) pairs.
///
/// Rows where the value is missing or was unparseable are skipped, but they
/// still consume their sample index, so gaps stay visible on the x-axis.
/// Requesting a column whose header was never found is a typed error rather
/// than an empty series.
pub fn extract_series(
    rows: &[LogRowData],
    flags: &ColumnFlags,
    column: Column,
) -> Result<Vec<(f64, f64)>, LogError> {
    if !flags.is_found(column) {
        return Err(LogError::MissingColumn(column));
    }

    let series = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.get(column).map(|v| (i as f64, v)))
        .collect();
    Ok(series)
}

/// Minimum and maximum values of one or more series, for y-range scans.
/// Returns `None` when every series is empty.
pub fn series_value_bounds(series_list: &[&[(f64, f64)]]) -> Option<(f64, f64)> {
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for series in series_list {
        for (_, v) in series.iter() {
            val_min = val_min.min(*v);
            val_max = val_max.max(*v);
        }
    }
    if val_min.is_infinite() {
        None
    } else {
        Some((val_min, val_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with_battery(values: &[Option<f64>]) -> (Vec<LogRowData>, ColumnFlags) {
        let mut flags = ColumnFlags::default();
        flags.set_found(Column::BatteryLevel, true);
        let rows = values
            .iter()
            .map(|v| LogRowData {
                battery_level: *v,
                ..Default::default()
            })
            .collect();
        (rows, flags)
    }

    #[test]
    fn test_extract_series_preserves_sample_index() {
        let (rows, flags) = rows_with_battery(&[Some(3.9), None, Some(3.7)]);
        let series = extract_series(&rows, &flags, Column::BatteryLevel).unwrap();
        // Row 1 is skipped but row 2 keeps index 2.0.
        assert_eq!(series, vec![(0.0, 3.9), (2.0, 3.7)]);
    }

    #[test]
    fn test_extract_series_missing_column_is_typed_error() {
        let (rows, flags) = rows_with_battery(&[Some(3.9)]);
        let err = extract_series(&rows, &flags, Column::StallCntL).unwrap_err();
        match err {
            LogError::MissingColumn(Column::StallCntL) => {}
            other => panic!("expected MissingColumn(stallCntL), got: {}", other),
        }
    }

    #[test]
    fn test_series_value_bounds() {
        let a = [(0.0, 1.0), (1.0, -2.0)];
        let b = [(0.0, 5.0)];
        assert_eq!(series_value_bounds(&[&a, &b]), Some((-2.0, 5.0)));
        assert_eq!(series_value_bounds(&[&[]]), None);
    }
}
