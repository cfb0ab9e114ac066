//! Retouch is a non-destructive raster adjustment engine.
//!
//! Edits are recorded as an ordered log of [`Operation`]s over an immutable base image. Every
//! render folds the active prefix of the log into a [`RenderState`] and paints it in three phases:
//!
//! - geometry (crop, rotation, flips) and the compound tonal filter
//! - pixel operations in a fixed order (temperature through split toning)
//! - composite effects (grain, then vignette)
//!
//! [`Editor`] ties a base image, its [`OperationLog`], and an [`EditorConfig`] together and adds
//! flatten, session import/export, and histogram sampling.
#![forbid(unsafe_code)]

pub mod assets;
pub mod color;
pub mod compile;
pub mod effects;
pub mod foundation;
pub mod history;
pub mod model;
pub mod render;
pub mod schedule;
pub mod session;

pub use crate::assets::export::{ExportFormat, ExportOptions, ExportedImage, encode_surface};
pub use crate::assets::ingest::ingest_image;
pub use crate::compile::state::{RenderState, TonalDescriptor, compute_render_state};
pub use crate::foundation::config::{EditorConfig, GrainSeed, RenderOpts};
pub use crate::foundation::core::{Affine, Canvas, CropRect, Point, Rect, Vec2};
pub use crate::foundation::error::{IngestError, RetouchError, RetouchResult, SessionError};
pub use crate::history::editor::Editor;
pub use crate::history::log::OperationLog;
pub use crate::model::operation::{FlipDirection, Operation};
pub use crate::model::preset::{PRESETS, Preset, PresetCategory, find_preset};
pub use crate::render::compositor::{render, render_into, render_original};
pub use crate::render::histogram::{Histogram, compute_histogram};
pub use crate::render::surface::Surface;
pub use crate::schedule::debounce::{ControlGroup, FrameScheduler, PendingSlot};
pub use crate::session::file::{SessionFile, parse_session};
