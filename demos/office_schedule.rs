use std::path::Path;

use anyhow::{Context, Result};
use luxplan::io::{write_csv, write_xlsx};
use luxplan::{room_cavity_ratio, RoomDraft, Session, UtilizationFactorTable};

/// One line of the lighting brief: room geometry, target illuminance and
/// the chosen fitting.
struct Program {
    name: &'static str,
    fitting: &'static str,
    watts: f64,
    /// Height from the fitting down to the working plane [m].
    height_m: f64,
    perimeter_m: f64,
    area_m2: f64,
    ceiling_reflectance: u8,
    wall_reflectance: u8,
    illuminance_lux: f64,
    flux_lm: f64,
}

fn office_program() -> Vec<Program> {
    vec![
        Program {
            name: "Open office",
            fitting: "Recessed LED panel",
            watts: 49.0,
            height_m: 2.0,
            perimeter_m: 36.0,
            area_m2: 80.0,
            ceiling_reflectance: 80,
            wall_reflectance: 70,
            illuminance_lux: 500.0,
            flux_lm: 3350.0,
        },
        Program {
            name: "Meeting room",
            fitting: "Surface LED batten",
            watts: 32.0,
            height_m: 2.1,
            perimeter_m: 20.0,
            area_m2: 24.0,
            ceiling_reflectance: 90,
            wall_reflectance: 70,
            illuminance_lux: 300.0,
            flux_lm: 2900.0,
        },
        Program {
            name: "Corridor",
            fitting: "Slim downlight",
            watts: 18.0,
            height_m: 2.3,
            perimeter_m: 44.0,
            area_m2: 40.0,
            ceiling_reflectance: 90,
            wall_reflectance: 50,
            illuminance_lux: 100.0,
            flux_lm: 1200.0,
        },
        Program {
            name: "Store",
            fitting: "IP65 batten",
            watts: 24.0,
            height_m: 2.5,
            perimeter_m: 12.0,
            area_m2: 9.0,
            ceiling_reflectance: 90,
            wall_reflectance: 60,
            illuminance_lux: 150.0,
            flux_lm: 1800.0,
        },
    ]
}

fn main() -> Result<()> {
    let table = UtilizationFactorTable::standard();
    let mut session = Session::new();

    println!("Sizing lamps for a small office floor...");
    println!();

    for program in office_program() {
        let rcr = room_cavity_ratio(program.height_m, program.perimeter_m, program.area_m2)
            .with_context(|| format!("Invalid dimensions for '{}'", program.name))?;
        let utilization_factor = table
            .resolve(program.ceiling_reflectance, program.wall_reflectance, rcr)
            .with_context(|| format!("No utilization factor for '{}'", program.name))?;

        println!(
            "  {:14} RCR {:>5.2}  reflectances {}/{}  U.F {:>6.2}",
            program.name,
            rcr,
            program.ceiling_reflectance,
            program.wall_reflectance,
            utilization_factor,
        );

        session.add(RoomDraft {
            area_name: program.name.to_string(),
            description: program.fitting.to_string(),
            watts: program.watts,
            illuminance_lux: program.illuminance_lux,
            area_m2: program.area_m2,
            flux_lm: program.flux_lm,
            utilization_factor,
        })?;
    }

    println!();
    println!("Added Rooms");
    print!("{}", session.schedule_table());
    println!();

    write_xlsx(Path::new("office_schedule.xlsx"), &session)?;
    write_csv(Path::new("office_schedule.csv"), &session)?;
    println!("Wrote office_schedule.xlsx and office_schedule.csv");

    Ok(())
}
