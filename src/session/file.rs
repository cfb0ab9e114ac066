use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::foundation::core::Canvas;
use crate::foundation::error::{RetouchResult, SessionError};
use crate::model::operation::Operation;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    pub image_width: u32,
    pub image_height: u32,
    pub created_at: String,
}

/// Persisted edit session: the active operation prefix plus the image size it was made on.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionFile {
    pub version: String,
    pub operations: Vec<Operation>,
    pub metadata: SessionMetadata,
}

impl SessionFile {
    pub fn to_json_pretty(&self) -> RetouchResult<String> {
        Ok(serde_json::to_string_pretty(self).context("serialize session")?)
    }

    pub fn write_to(&self, path: &Path) -> RetouchResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("write session file {}", path.display()))?;
        Ok(())
    }
}

/// Build a session from the active prefix.
pub fn export_session(
    active: &[Operation],
    image: Canvas,
    version: &str,
    created_at: String,
) -> SessionFile {
    SessionFile {
        version: version.to_string(),
        operations: active.to_vec(),
        metadata: SessionMetadata {
            image_width: image.width,
            image_height: image.height,
            created_at,
        },
    }
}

/// Download-style file name, `session_<unix millis>.json`.
pub fn session_file_name(unix_millis: u128) -> String {
    format!("session_{unix_millis}.json")
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn positive_dim(v: Option<&Value>) -> Option<f64> {
    v.filter(|v| is_truthy(v)).and_then(Value::as_f64)
}

/// Validate and decode a session file against the current base image size.
///
/// Checks run in order, and the first failure is returned:
/// 1. the text is JSON
/// 2. `version` is present and non-empty and `operations` is an array
/// 3. when the metadata carries both dimensions, each `current / session` ratio is within
///    `1 ± tolerance`
/// 4. every operation's `type` is a known tag
/// 5. every operation has the fields its tag requires
pub fn parse_session(
    text: &str,
    current: Canvas,
    tolerance: f64,
) -> Result<Vec<Operation>, SessionError> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| SessionError::Malformed(e.to_string()))?;

    let version_ok = root.get("version").is_some_and(is_truthy);
    let Some(raw_ops) = root.get("operations").and_then(Value::as_array) else {
        return Err(SessionError::MissingFields);
    };
    if !version_ok {
        return Err(SessionError::MissingFields);
    }

    let meta = root.get("metadata");
    let sw = positive_dim(meta.and_then(|m| m.get("imageWidth")));
    let sh = positive_dim(meta.and_then(|m| m.get("imageHeight")));
    if let (Some(sw), Some(sh)) = (sw, sh) {
        let wr = f64::from(current.width) / sw;
        let hr = f64::from(current.height) / sh;
        if (wr - 1.0).abs() > tolerance || (hr - 1.0).abs() > tolerance {
            return Err(SessionError::DimensionMismatch {
                session: (sw.round() as u32, sh.round() as u32),
                current: (current.width, current.height),
            });
        }
    }

    for op in raw_ops {
        let tag = op.get("type").and_then(Value::as_str).unwrap_or("undefined");
        if !Operation::is_known_tag(tag) {
            return Err(SessionError::UnknownOperation(tag.to_string()));
        }
    }

    raw_ops
        .iter()
        .enumerate()
        .map(|(i, op)| {
            serde_json::from_value(op.clone())
                .map_err(|e| SessionError::Malformed(format!("operation {i}: {e}")))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/session/file.rs"]
mod tests;
