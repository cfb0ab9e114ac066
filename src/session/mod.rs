//! Session files: export of the active history and validated import.

pub mod clock;
pub mod file;
