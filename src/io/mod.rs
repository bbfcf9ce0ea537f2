//! File output for lamp schedules.
//!
//! This module provides writers for exporting the session's room list,
//! one per format. Both produce the same columns in the same order.

pub mod csv;
pub mod xlsx;

pub use self::csv::{write_csv, DEFAULT_CSV_NAME};
pub use self::xlsx::{write_xlsx, DEFAULT_XLSX_NAME};
