/// Convenience result type used across the engine.
pub type RetouchResult<T> = Result<T, RetouchError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RetouchError {
    /// Invalid caller-provided data (buffer sizes, empty rectangles, bad config).
    #[error("validation error: {0}")]
    Validation(String),

    /// The image could not be accepted as a new base image.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// A session file was rejected; the operation log is left untouched.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Flattening could not materialize a new base image; prior state stays valid.
    #[error("flatten error: {0}")]
    Flatten(String),

    /// Internal render invariant violated.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RetouchError {
    /// Build a [`RetouchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RetouchError::Flatten`] value.
    pub fn flatten(msg: impl Into<String>) -> Self {
        Self::Flatten(msg.into())
    }

    /// Build a [`RetouchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RetouchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Reasons an uploaded image is refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Only JPEG, PNG and WebP are accepted.
    #[error("invalid file type '{0}', please upload JPG, PNG, or WebP")]
    UnsupportedMime(String),

    /// The encoded file exceeds the configured byte limit.
    #[error("file too large ({size} bytes), maximum size is {max} bytes")]
    TooLarge {
        /// Encoded size in bytes.
        size: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// The bytes could not be decoded as an image.
    #[error("failed to load image, the file may be corrupted: {0}")]
    Decode(String),
}

/// Reasons a session import is refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The payload is not valid JSON or an operation has the wrong shape.
    #[error("corrupted session file, could not parse: {0}")]
    Malformed(String),

    /// `version` is missing or `operations` is not a list.
    #[error("invalid session file format")]
    MissingFields,

    /// The recorded image size differs from the current base image beyond tolerance.
    #[error(
        "image dimensions mismatch: session {}x{}, current {}x{}",
        session.0,
        session.1,
        current.0,
        current.1
    )]
    DimensionMismatch {
        /// Width and height stored in the session metadata.
        session: (u32, u32),
        /// Width and height of the current base image.
        current: (u32, u32),
    },

    /// An operation tag outside the known set.
    #[error("unknown operation type \"{0}\"")]
    UnknownOperation(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
