use anyhow::Result;

use crate::photometry::{lamps_required, DEFAULT_MAINTENANCE_FACTOR};
use crate::room::{Room, RoomDraft, SCHEDULE_COLUMNS};

/// Append-only list of computed rooms for one interactive session.
///
/// Rooms are immutable once added and live only as long as the session;
/// there is no persistence. Rejected submissions store nothing.
#[derive(Debug, Default)]
pub struct Session {
    rooms: Vec<Room>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a submission, computes the lamp count and stores the room.
    ///
    /// A draft is rejected when the area name or fitting description is
    /// empty, or when the luminous flux or utilization factor is not
    /// positive. Returns the stored record on success.
    pub fn add(&mut self, draft: RoomDraft) -> Result<&Room> {
        anyhow::ensure!(
            !draft.area_name.trim().is_empty(),
            "area name must not be empty"
        );
        anyhow::ensure!(
            !draft.description.trim().is_empty(),
            "fitting description must not be empty"
        );
        anyhow::ensure!(
            draft.flux_lm > 0.0,
            "luminous flux per lamp must be positive, got {}",
            draft.flux_lm
        );
        anyhow::ensure!(
            draft.utilization_factor > 0.0,
            "utilization factor must be positive, got {}",
            draft.utilization_factor
        );

        let Some(num_lamps) = lamps_required(
            draft.illuminance_lux,
            draft.area_m2,
            draft.flux_lm,
            draft.utilization_factor,
            DEFAULT_MAINTENANCE_FACTOR,
        ) else {
            anyhow::bail!("lamp count undefined for the submitted inputs");
        };

        self.rooms.push(Room {
            area_name: draft.area_name,
            description: draft.description,
            watts: draft.watts,
            illuminance_lux: draft.illuminance_lux,
            area_m2: draft.area_m2,
            flux_lm: draft.flux_lm,
            utilization_factor: draft.utilization_factor,
            maintenance_factor: DEFAULT_MAINTENANCE_FACTOR,
            num_lamps,
        });
        Ok(&self.rooms[self.rooms.len() - 1])
    }

    /// Rooms added so far, in submission order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Formats the schedule as an aligned text table for terminal output.
    pub fn schedule_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<20}  {:<24}  {:>8}  {:>8}  {:>8}  {:>9}  {:>7}  {:>5}  {:>8}\n",
            SCHEDULE_COLUMNS[0],
            SCHEDULE_COLUMNS[1],
            SCHEDULE_COLUMNS[2],
            SCHEDULE_COLUMNS[3],
            SCHEDULE_COLUMNS[4],
            SCHEDULE_COLUMNS[5],
            SCHEDULE_COLUMNS[6],
            SCHEDULE_COLUMNS[7],
            SCHEDULE_COLUMNS[8],
        ));
        out.push_str(&format!("{:-<113}\n", ""));
        for room in &self.rooms {
            out.push_str(&format!(
                "{:<20}  {:<24}  {:>8.1}  {:>8.1}  {:>8.1}  {:>9.1}  {:>7.2}  {:>5.2}  {:>8.2}\n",
                room.area_name,
                room.description,
                room.watts,
                room.illuminance_lux,
                room.area_m2,
                room.flux_lm,
                room.utilization_factor,
                room.maintenance_factor,
                room.num_lamps,
            ));
        }
        out
    }
}
