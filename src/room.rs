use serde::Serialize;

/// Column headers of the exported lamp schedule, in row order.
pub const SCHEDULE_COLUMNS: [&str; 9] = [
    "Area Name",
    "Description",
    "Watts",
    "E",
    "A",
    "F",
    "U.F",
    "M.F",
    "N",
];

/// One computed row of the lamp schedule.
///
/// Created by [`Session::add`](crate::Session::add) once a submission
/// validates; immutable afterwards and held only for the current session.
/// Serde renames map the fields onto the spreadsheet columns in
/// [`SCHEDULE_COLUMNS`].
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    /// Area name, e.g. "Open office".
    #[serde(rename = "Area Name")]
    pub area_name: String,
    /// Description of the fitting.
    #[serde(rename = "Description")]
    pub description: String,
    /// Wattage of the fitting.
    #[serde(rename = "Watts")]
    pub watts: f64,
    /// Illuminance target E at the working plane [lux].
    #[serde(rename = "E")]
    pub illuminance_lux: f64,
    /// Area at working plane height A [m^2].
    #[serde(rename = "A")]
    pub area_m2: f64,
    /// Average luminous flux from each lamp F [lm].
    #[serde(rename = "F")]
    pub flux_lm: f64,
    /// Resolved utilization factor U.F [%].
    #[serde(rename = "U.F")]
    pub utilization_factor: f64,
    /// Maintenance factor M.F.
    #[serde(rename = "M.F")]
    pub maintenance_factor: f64,
    /// Number of lamps required N.
    #[serde(rename = "N")]
    pub num_lamps: f64,
}

/// Caller-filled inputs for one room submission.
///
/// The lamp count and maintenance factor are filled in by
/// [`Session::add`](crate::Session::add) when the draft validates.
#[derive(Debug, Clone, Default)]
pub struct RoomDraft {
    pub area_name: String,
    pub description: String,
    /// Wattage of the fitting.
    pub watts: f64,
    /// Illuminance target E [lux].
    pub illuminance_lux: f64,
    /// Area at working plane height A [m^2].
    pub area_m2: f64,
    /// Average luminous flux from each lamp F [lm].
    pub flux_lm: f64,
    /// Utilization factor [%] resolved from the reflectance table.
    pub utilization_factor: f64,
}
