//! CSV export of the lamp schedule.
//!
//! Plain-text twin of the XLSX export: the header row comes from the
//! serde column renames on [`Room`](crate::Room), so both formats stay in
//! lockstep.

use std::path::Path;

use anyhow::{Context, Result};

use crate::session::Session;

/// Default output name next to the spreadsheet export.
pub const DEFAULT_CSV_NAME: &str = "Lamp_Calculation.csv";

/// Writes the session's rooms to a CSV file, header row included.
pub fn write_csv(path: &Path, session: &Session) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for room in session.rooms() {
        writer
            .serialize(room)
            .with_context(|| format!("Failed to serialize room '{}'", room.area_name))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{RoomDraft, SCHEDULE_COLUMNS};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv_headers_and_values() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("schedule.csv");

        let mut session = Session::new();
        session.add(RoomDraft {
            area_name: "Meeting room".to_string(),
            description: "Surface LED batten".to_string(),
            watts: 24.0,
            illuminance_lux: 300.0,
            area_m2: 24.0,
            flux_lm: 2900.0,
            utilization_factor: 56.0,
        })?;

        write_csv(&path, &session)?;

        let text = fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(SCHEDULE_COLUMNS.join(",").as_str()));

        let row = lines.next().expect("one data row");
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], "Meeting room");
        assert_eq!(fields[1], "Surface LED batten");

        // N = (300 * 24) / (2900 * 0.56 * 0.80)
        let n: f64 = fields[8].parse()?;
        assert!((n - 7200.0 / 1299.2).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_write_csv_one_row_per_room() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("two_rooms.csv");

        let mut session = Session::new();
        for name in ["Room A", "Room B"] {
            session.add(RoomDraft {
                area_name: name.to_string(),
                description: "Downlight".to_string(),
                watts: 12.0,
                illuminance_lux: 150.0,
                area_m2: 10.0,
                flux_lm: 900.0,
                utilization_factor: 48.0,
            })?;
        }

        write_csv(&path, &session)?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(text.lines().count(), 3, "header plus two data rows");
        Ok(())
    }
}
