//! Frame-boundary debouncing of interactive edits.

pub mod debounce;
