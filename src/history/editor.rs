use crate::{
    assets::ingest::ingest_image,
    foundation::{
        config::{EditorConfig, RenderOpts},
        error::{RetouchError, RetouchResult},
    },
    history::log::OperationLog,
    model::operation::Operation,
    render::{
        compositor::{render_into, render_original},
        histogram::{Histogram, compute_histogram},
        surface::Surface,
    },
    session::file::{SessionFile, export_session, parse_session},
};

/// Editing session: one base image, its operation log, and the limits that govern both.
///
/// Every fallible mutation is all-or-nothing. When a load, import, or flatten fails, the
/// previous base image and log are left exactly as they were.
#[derive(Clone, Debug)]
pub struct Editor {
    base: Option<Surface>,
    log: OperationLog,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            base: None,
            log: OperationLog::with_cap(config.history_cap),
            config,
        }
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> RetouchResult<Self> {
        config.validate()?;
        Ok(Self {
            base: None,
            log: OperationLog::with_cap(config.history_cap),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn base(&self) -> Option<&Surface> {
        self.base.as_ref()
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Replace the base image and start a fresh history.
    pub fn load_image(&mut self, base: Surface) {
        tracing::debug!(w = base.width, h = base.height, "base image loaded");
        self.base = Some(base);
        self.log.reset();
    }

    /// Decode an upload and make it the base image. Rejected uploads change nothing.
    pub fn load_bytes(&mut self, bytes: &[u8], declared_mime: Option<&str>) -> RetouchResult<()> {
        let surface = ingest_image(bytes, declared_mime, &self.config)?;
        self.load_image(surface);
        Ok(())
    }

    pub fn push(&mut self, op: Operation) {
        self.log.append(op);
    }

    pub fn undo(&mut self) -> bool {
        self.log.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.log.redo()
    }

    /// Clear the history, keeping the base image.
    pub fn reset(&mut self) {
        self.log.reset();
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    fn require_base(&self) -> RetouchResult<&Surface> {
        self.base
            .as_ref()
            .ok_or_else(|| RetouchError::validation("no image loaded"))
    }

    pub fn render_into(&self, out: &mut Surface, opts: &RenderOpts) -> RetouchResult<()> {
        let base = self.require_base()?;
        render_into(out, base, self.log.operations(), self.log.cursor(), opts)
    }

    pub fn render(&self, opts: &RenderOpts) -> RetouchResult<Surface> {
        let mut out = Surface::new(self.require_base()?.size())?;
        self.render_into(&mut out, opts)?;
        Ok(out)
    }

    /// The base image with no edits applied.
    pub fn render_original(&self) -> RetouchResult<Surface> {
        Ok(render_original(self.require_base()?))
    }

    /// Histogram of the current render.
    pub fn histogram(&self, opts: &RenderOpts) -> RetouchResult<Option<Histogram>> {
        Ok(compute_histogram(&self.render(opts)?))
    }

    /// Collapse the active edits into a new base image and clear the history.
    ///
    /// Irreversible once it succeeds. On failure the previous base and log stay usable.
    #[tracing::instrument(skip(self, opts), fields(active = self.log.active_count()))]
    pub fn flatten(&mut self, opts: &RenderOpts) -> RetouchResult<()> {
        if self.base.is_none() {
            return Err(RetouchError::flatten("no image loaded"));
        }
        if self.log.is_empty() {
            return Err(RetouchError::flatten("no operations to flatten"));
        }
        let flattened = self
            .render(opts)
            .map_err(|e| RetouchError::flatten(e.to_string()))?;
        if flattened.is_empty() {
            return Err(RetouchError::flatten("flattened image has zero area"));
        }
        self.load_image(flattened);
        Ok(())
    }

    /// Validate a session file and replace the log with its operations.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn import_session(&mut self, text: &str) -> RetouchResult<usize> {
        let current = self.require_base()?.size();
        let ops = parse_session(text, current, self.config.session_dimension_tolerance)
            .inspect_err(|e| tracing::warn!(error = %e, "session import rejected"))?;
        self.log.import(ops);
        Ok(self.log.len())
    }

    pub fn export_session(&self, created_at: String) -> RetouchResult<SessionFile> {
        let base = self.require_base()?;
        Ok(export_session(
            self.log.active(),
            base.size(),
            &self.config.session_version,
            created_at,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/editor.rs"]
mod tests;
