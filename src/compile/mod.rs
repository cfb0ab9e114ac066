//! Fold an operation prefix into a render state.

pub mod state;
