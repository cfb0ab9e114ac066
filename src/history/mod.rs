//! Undo/redo history and the editor facade that owns it.

/// Editor facade: base image + log + config.
pub mod editor;
/// Bounded operation log with a cursor.
pub mod log;
