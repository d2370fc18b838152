// src/data_input/log_data.rs

/// All columns the usage-stats recorder is known to write.
///
/// `name()` returns the exact CSV header spelling. `SpeedLExp`/`SpeedRExp`
/// additionally match the older `SpeedL`/`SpeedR` spellings at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    BatteryLevel,
    State,
    DistanceL,
    DistanceR,
    SpeedLExp,
    SpeedRExp,
    SpeedLBuff,
    SpeedRBuff,
    OutputL,
    OutputR,
    ExpectedL,
    ExpectedR,
    StallCntL,
    StallCntR,
    StuckL,
    StuckR,
    FreeCntL,
    FreeCntR,
    MaxStallL,
    MaxStallR,
}

impl Column {
    pub const ALL: [Column; 20] = [
        Column::BatteryLevel,
        Column::State,
        Column::DistanceL,
        Column::DistanceR,
        Column::SpeedLExp,
        Column::SpeedRExp,
        Column::SpeedLBuff,
        Column::SpeedRBuff,
        Column::OutputL,
        Column::OutputR,
        Column::ExpectedL,
        Column::ExpectedR,
        Column::StallCntL,
        Column::StallCntR,
        Column::StuckL,
        Column::StuckR,
        Column::FreeCntL,
        Column::FreeCntR,
        Column::MaxStallL,
        Column::MaxStallR,
    ];

    /// CSV header spelling for this column.
    pub fn name(&self) -> &'static str {
        match self {
            Column::BatteryLevel => "BatteryLevel",
            Column::State => "State",
            Column::DistanceL => "DistanceL",
            Column::DistanceR => "DistanceR",
            Column::SpeedLExp => "SpeedLExp",
            Column::SpeedRExp => "SpeedRExp",
            Column::SpeedLBuff => "SpeedLBuff",
            Column::SpeedRBuff => "SpeedRBuff",
            Column::OutputL => "OutputL",
            Column::OutputR => "OutputR",
            Column::ExpectedL => "ExpectedL",
            Column::ExpectedR => "ExpectedR",
            Column::StallCntL => "stallCntL",
            Column::StallCntR => "stallCntR",
            Column::StuckL => "stuckL",
            Column::StuckR => "stuckR",
            Column::FreeCntL => "freeCntL",
            Column::FreeCntR => "freeCntR",
            Column::MaxStallL => "maxStallL",
            Column::MaxStallR => "maxStallR",
        }
    }

    /// Older logs write the exp-avg wheel speeds without the `Exp` suffix.
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Column::SpeedLExp => Some("SpeedL"),
            Column::SpeedRExp => Some("SpeedR"),
            _ => None,
        }
    }

    /// Position in `Column::ALL`, used to index `ColumnFlags`.
    pub fn index(&self) -> usize {
        Column::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

/// Per-column header presence, reported by the parser and consulted by the
/// plot functions to decide which charts/panes are possible.
#[derive(Debug, Default, Clone)]
pub struct ColumnFlags {
    found: [bool; Column::ALL.len()],
}

impl ColumnFlags {
    pub fn set_found(&mut self, column: Column, found: bool) {
        self.found[column.index()] = found;
    }

    pub fn is_found(&self, column: Column) -> bool {
        self.found[column.index()]
    }

    /// True if either column of a left/right pair is present.
    pub fn any_found(&self, columns: &[Column]) -> bool {
        columns.iter().any(|c| self.is_found(*c))
    }
}

/// Structure to hold data parsed from a single row of the CSV log.
/// Uses `Option<f64>` to handle potentially missing or unparseable values.
/// Two-element arrays are indexed [Left, Right].
#[derive(Debug, Default, Clone)]
pub struct LogRowData {
    pub battery_level: Option<f64>, // EMA-smoothed battery voltage.
    pub state: Option<f64>,         // Controller state code (0..=9, categorical).
    pub distance: [Option<f64>; 2], // Cumulative wheel distance [Left, Right].
    pub speed_exp: [Option<f64>; 2], // Exp-avg wheel speed [Left, Right].
    pub speed_buff: [Option<f64>; 2], // Buffered wheel speed [Left, Right].
    pub output: [Option<f64>; 2],   // Commanded motor output [Left, Right].
    pub expected: [Option<f64>; 2], // Expected output fed to the stall checker.
    pub stall_cnt: [Option<f64>; 2], // Cumulative stall detections [Left, Right].
    pub stuck: [Option<f64>; 2],    // Stuck-detector 0/1 flag [Left, Right].
    pub free_cnt: [Option<f64>; 2], // Successful get-free maneuvers [Left, Right].
    pub max_stall: [Option<f64>; 2], // Stall-count shutdown ceiling [Left, Right].
}

impl LogRowData {
    /// Value of one column in this row.
    pub fn get(&self, column: Column) -> Option<f64> {
        match column {
            Column::BatteryLevel => self.battery_level,
            Column::State => self.state,
            Column::DistanceL => self.distance[0],
            Column::DistanceR => self.distance[1],
            Column::SpeedLExp => self.speed_exp[0],
            Column::SpeedRExp => self.speed_exp[1],
            Column::SpeedLBuff => self.speed_buff[0],
            Column::SpeedRBuff => self.speed_buff[1],
            Column::OutputL => self.output[0],
            Column::OutputR => self.output[1],
            Column::ExpectedL => self.expected[0],
            Column::ExpectedR => self.expected[1],
            Column::StallCntL => self.stall_cnt[0],
            Column::StallCntR => self.stall_cnt[1],
            Column::StuckL => self.stuck[0],
            Column::StuckR => self.stuck[1],
            Column::FreeCntL => self.free_cnt[0],
            Column::FreeCntR => self.free_cnt[1],
            Column::MaxStallL => self.max_stall[0],
            Column::MaxStallR => self.max_stall[1],
        }
    }

    pub fn set(&mut self, column: Column, value: Option<f64>) {
        match column {
            Column::BatteryLevel => self.battery_level = value,
            Column::State => self.state = value,
            Column::DistanceL => self.distance[0] = value,
            Column::DistanceR => self.distance[1] = value,
            Column::SpeedLExp => self.speed_exp[0] = value,
            Column::SpeedRExp => self.speed_exp[1] = value,
            Column::SpeedLBuff => self.speed_buff[0] = value,
            Column::SpeedRBuff => self.speed_buff[1] = value,
            Column::OutputL => self.output[0] = value,
            Column::OutputR => self.output[1] = value,
            Column::ExpectedL => self.expected[0] = value,
            Column::ExpectedR => self.expected[1] = value,
            Column::StallCntL => self.stall_cnt[0] = value,
            Column::StallCntR => self.stall_cnt[1] = value,
            Column::StuckL => self.stuck[0] = value,
            Column::StuckR => self.stuck[1] = value,
            Column::FreeCntL => self.free_cnt[0] = value,
            Column::FreeCntR => self.free_cnt[1] = value,
            Column::MaxStallL => self.max_stall[0] = value,
            Column::MaxStallR => self.max_stall[1] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_roundtrip() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut row = LogRowData::default();
        for (i, column) in Column::ALL.iter().enumerate() {
            row.set(*column, Some(i as f64));
        }
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(row.get(*column), Some(i as f64));
        }
    }

    #[test]
    fn test_speed_aliases() {
        assert_eq!(Column::SpeedLExp.alias(), Some("SpeedL"));
        assert_eq!(Column::SpeedRExp.alias(), Some("SpeedR"));
        assert_eq!(Column::BatteryLevel.alias(), None);
    }

    #[test]
    fn test_column_flags_default_not_found() {
        let flags = ColumnFlags::default();
        assert!(!flags.is_found(Column::BatteryLevel));
        assert!(!flags.any_found(&[Column::OutputL, Column::OutputR]));
    }
}
