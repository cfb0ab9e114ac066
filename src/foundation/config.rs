use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RetouchError, RetouchResult};

/// Default maximum number of operations retained in the history log.
pub const DEFAULT_HISTORY_CAP: usize = 100;
/// Default maximum encoded upload size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Default width above which ingested images are downsampled.
pub const DEFAULT_MAX_IMAGE_WIDTH: u32 = 2000;
/// Session format version written on export.
pub const SESSION_VERSION: &str = "1.1";

/// Editor-wide limits and boundary policies.
///
/// Every field has a default, so a config file only needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum retained history length; older operations are evicted past this.
    pub history_cap: usize,
    /// Largest accepted encoded image, in bytes.
    pub max_upload_bytes: usize,
    /// Images wider than this are downsampled to exactly this width on load.
    pub max_image_width: u32,
    /// Allowed relative deviation between session and current image dimensions.
    pub session_dimension_tolerance: f64,
    /// Version string stamped into exported sessions.
    pub session_version: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_image_width: DEFAULT_MAX_IMAGE_WIDTH,
            session_dimension_tolerance: 0.15,
            session_version: SESSION_VERSION.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(s: &str) -> RetouchResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RetouchError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> RetouchResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> RetouchResult<()> {
        if self.history_cap == 0 {
            return Err(RetouchError::validation("history_cap must be > 0"));
        }
        if self.max_image_width == 0 {
            return Err(RetouchError::validation("max_image_width must be > 0"));
        }
        if self.max_upload_bytes == 0 {
            return Err(RetouchError::validation("max_upload_bytes must be > 0"));
        }
        let tol = self.session_dimension_tolerance;
        if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
            return Err(RetouchError::validation(
                "session_dimension_tolerance must be in [0, 1)",
            ));
        }
        if self.session_version.trim().is_empty() {
            return Err(RetouchError::validation("session_version must be non-empty"));
        }
        Ok(())
    }
}

/// Source of the grain noise field.
///
/// Grain is the one render element that is not a pure function of the log: with
/// [`GrainSeed::Random`] every render draws a fresh field. `Fixed` pins the field for
/// reproducible output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrainSeed {
    #[default]
    Random,
    Fixed(u64),
}

impl GrainSeed {
    pub(crate) fn resolve(self) -> u64 {
        match self {
            Self::Random => rand::random::<u64>(),
            Self::Fixed(seed) => seed,
        }
    }
}

/// Per-render options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    pub grain: GrainSeed,
}

impl RenderOpts {
    pub fn with_grain_seed(mut self, seed: u64) -> Self {
        self.grain = GrainSeed::Fixed(seed);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
