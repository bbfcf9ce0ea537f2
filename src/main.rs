use std::io::{self, Write as _};
use std::path::Path;

use anyhow::Result;

use luxplan::io::{write_csv, write_xlsx, DEFAULT_CSV_NAME, DEFAULT_XLSX_NAME};
use luxplan::utilization::{CEILING_REFLECTANCE_LEVELS, WALL_REFLECTANCE_LEVELS};
use luxplan::{
    lamps_required, room_cavity_ratio, RoomDraft, Session, UtilizationFactorTable,
    DEFAULT_MAINTENANCE_FACTOR,
};

fn main() -> Result<()> {
    println!("Lamp Requirement & Utilization Factor Calculator");
    println!("{:=<48}", "");
    println!();

    let table = UtilizationFactorTable::standard();
    let mut session = Session::new();

    loop {
        let Some(()) = add_room(&table, &mut session)? else {
            break;
        };
        match prompt_yes_no("Add another room? [y/n] ")? {
            Some(true) => println!(),
            _ => break,
        }
    }

    if session.is_empty() {
        return Ok(());
    }

    println!();
    println!("Added Rooms");
    print!("{}", session.schedule_table());

    write_xlsx(Path::new(DEFAULT_XLSX_NAME), &session)?;
    write_csv(Path::new(DEFAULT_CSV_NAME), &session)?;
    println!();
    println!("Wrote {DEFAULT_XLSX_NAME} and {DEFAULT_CSV_NAME}");

    Ok(())
}

/// Walks one room through the calculator: cavity ratio, utilization factor,
/// lamp count, then the schedule submission. Returns `None` when stdin is
/// exhausted mid-dialogue; whatever was added so far is still exported.
fn add_room(table: &UtilizationFactorTable, session: &mut Session) -> Result<Option<()>> {
    // Room cavity ratio
    let rcr = loop {
        let Some(height) = prompt_f64("Height from lighting to work area (m): ")? else {
            return Ok(None);
        };
        let Some(perimeter) = prompt_f64("Perimeter of the room (m): ")? else {
            return Ok(None);
        };
        let Some(area) = prompt_f64("Area of the room (m2): ")? else {
            return Ok(None);
        };
        match room_cavity_ratio(height, perimeter, area) {
            Some(rcr) => {
                println!("Calculated RCR: {rcr:.2}");
                break rcr;
            }
            None => println!("Please enter valid room dimensions."),
        }
    };

    // Utilization factor from the reflectance table
    let utilization_factor = loop {
        let Some(ceiling) = prompt_level("Ceiling reflectance", &CEILING_REFLECTANCE_LEVELS)?
        else {
            return Ok(None);
        };
        let Some(wall) = prompt_level("Wall reflectance", &WALL_REFLECTANCE_LEVELS)? else {
            return Ok(None);
        };
        match table.resolve(ceiling, wall, rcr) {
            Some(factor) => {
                println!("Utilization Factor: {factor:.2}");
                break factor;
            }
            None => {
                println!("No matching reflectance values found in the table.");
                match prompt_yes_no("Try different reflectance values? [y/n] ")? {
                    Some(true) => {}
                    Some(false) => return Ok(Some(())),
                    None => return Ok(None),
                }
            }
        }
    };

    // Lamp requirement
    let Some(area_name) = prompt("Enter Area Name: ")? else {
        return Ok(None);
    };
    let Some(description) = prompt("Enter Description of Fitting: ")? else {
        return Ok(None);
    };
    let Some(watts) = prompt_f64("Enter Watts of the Fitting: ")? else {
        return Ok(None);
    };
    let Some(illuminance_lux) = prompt_f64("Enter the illuminance level required (lux): ")? else {
        return Ok(None);
    };
    let Some(area_m2) = prompt_f64("Enter the area at working plane height (m2): ")? else {
        return Ok(None);
    };
    let Some(flux_lm) = prompt_f64("Enter the average luminous flux from each lamp (lm): ")? else {
        return Ok(None);
    };

    match lamps_required(
        illuminance_lux,
        area_m2,
        flux_lm,
        utilization_factor,
        DEFAULT_MAINTENANCE_FACTOR,
    ) {
        Some(num_lamps) => println!("Number of lamps required: {num_lamps:.2}"),
        None => {
            println!("Please enter valid values for luminous flux and illuminance.");
            return Ok(Some(()));
        }
    }

    match prompt_yes_no("Add this room to the schedule? [y/n] ")? {
        Some(true) => {}
        Some(false) => return Ok(Some(())),
        None => return Ok(None),
    }

    let draft = RoomDraft {
        area_name,
        description,
        watts,
        illuminance_lux,
        area_m2,
        flux_lm,
        utilization_factor,
    };
    match session.add(draft) {
        Ok(room) => println!("Room '{}' added successfully!", room.area_name),
        Err(_) => println!("Please fill in all required fields before adding."),
    }

    Ok(Some(()))
}

/// Prints a prompt and reads one trimmed line. `None` means end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads a non-negative number, re-prompting until the input parses.
fn prompt_f64(label: &str) -> Result<Option<f64>> {
    loop {
        let Some(text) = prompt(label)? else {
            return Ok(None);
        };
        match text.parse::<f64>() {
            Ok(value) if value >= 0.0 => return Ok(Some(value)),
            _ => println!("Please enter a non-negative number."),
        }
    }
}

/// Reads a reflectance percentage restricted to the published levels.
fn prompt_level(label: &str, levels: &[u8]) -> Result<Option<u8>> {
    loop {
        let Some(text) = prompt(&format!("{label} {levels:?}: "))? else {
            return Ok(None);
        };
        match text.parse::<u8>() {
            Ok(value) if levels.contains(&value) => return Ok(Some(value)),
            _ => println!("Please choose one of the listed values."),
        }
    }
}

fn prompt_yes_no(label: &str) -> Result<Option<bool>> {
    loop {
        let Some(text) = prompt(label)? else {
            return Ok(None);
        };
        match text.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => println!("Please answer y or n."),
        }
    }
}
