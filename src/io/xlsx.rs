//! XLSX export of the lamp schedule.
//!
//! Writes one worksheet named "Lamp Calculation" with a header row followed
//! by one row per room, in the column order of
//! [`SCHEDULE_COLUMNS`](crate::room::SCHEDULE_COLUMNS).

use std::path::Path;

use anyhow::{Context, Result};
use xlsxwriter::Workbook;

use crate::room::SCHEDULE_COLUMNS;
use crate::session::Session;

/// Default schedule file name used by the interactive calculator.
pub const DEFAULT_XLSX_NAME: &str = "Lamp_Calculation.xlsx";

/// Writes the session's rooms to an XLSX workbook.
///
/// # Arguments
/// * `path` - Path to the output file
/// * `session` - The session whose rooms are exported
pub fn write_xlsx(path: &Path, session: &Session) -> Result<()> {
    let filename = path
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
    let workbook = Workbook::new(filename)
        .with_context(|| format!("Failed to create workbook: {}", path.display()))?;
    let mut sheet = workbook
        .add_worksheet(Some("Lamp Calculation"))
        .context("Failed to add worksheet")?;

    for (col, header) in SCHEDULE_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, header, None)?;
    }

    for (i, room) in session.rooms().iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &room.area_name, None)?;
        sheet.write_string(row, 1, &room.description, None)?;
        sheet.write_number(row, 2, room.watts, None)?;
        sheet.write_number(row, 3, room.illuminance_lux, None)?;
        sheet.write_number(row, 4, room.area_m2, None)?;
        sheet.write_number(row, 5, room.flux_lm, None)?;
        sheet.write_number(row, 6, room.utilization_factor, None)?;
        sheet.write_number(row, 7, room.maintenance_factor, None)?;
        sheet.write_number(row, 8, room.num_lamps, None)?;
    }

    workbook
        .close()
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomDraft;
    use std::fs;
    use tempfile::tempdir;

    fn session_with_room() -> Session {
        let mut session = Session::new();
        session
            .add(RoomDraft {
                area_name: "Open office".to_string(),
                description: "Recessed LED panel".to_string(),
                watts: 36.0,
                illuminance_lux: 500.0,
                area_m2: 50.0,
                flux_lm: 3000.0,
                utilization_factor: 70.0,
            })
            .unwrap();
        session
    }

    #[test]
    fn test_write_xlsx_produces_zip_container() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("schedule.xlsx");

        write_xlsx(&path, &session_with_room())?;

        let bytes = fs::read(&path)?;
        assert!(!bytes.is_empty(), "workbook file should not be empty");
        // XLSX is a ZIP container.
        assert_eq!(&bytes[..2], b"PK", "workbook should start with ZIP magic");
        Ok(())
    }

    #[test]
    fn test_write_xlsx_empty_session() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.xlsx");

        write_xlsx(&path, &Session::new())?;

        // Header-only workbook is still a valid file.
        let bytes = fs::read(&path)?;
        assert!(!bytes.is_empty());
        Ok(())
    }
}
