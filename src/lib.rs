pub mod io;
pub mod photometry;
pub mod room;
pub mod session;
pub mod utilization;

// Prelude
pub use photometry::{lamps_required, room_cavity_ratio, DEFAULT_MAINTENANCE_FACTOR};
pub use room::{Room, RoomDraft};
pub use session::Session;
pub use utilization::UtilizationFactorTable;
