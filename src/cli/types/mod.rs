//! Type-safe wrappers and enums for command-line arguments.

pub mod date;
pub mod mode;


pub use date::{CalendarDate, DATE_FORMAT};
pub use mode::OutputMode;
