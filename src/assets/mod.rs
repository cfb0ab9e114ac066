//! Image ingestion and export boundaries.

pub mod export;
pub mod ingest;
