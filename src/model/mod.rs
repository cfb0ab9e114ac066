//! Persisted edit model: the operation vocabulary and the preset catalog.

pub mod operation;
pub mod preset;
