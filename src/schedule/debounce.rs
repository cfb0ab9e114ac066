use crate::{
    foundation::{config::RenderOpts, error::RetouchResult},
    history::editor::Editor,
    model::operation::Operation,
    render::{
        histogram::{Histogram, compute_histogram},
        surface::Surface,
    },
};

/// Single-slot pending task: scheduling replaces whatever was waiting.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSlot<T> {
    pending: Option<T>,
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> PendingSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`, discarding any task not yet run. Returns the superseded task.
    pub fn schedule(&mut self, task: T) -> Option<T> {
        self.pending.replace(task)
    }

    /// Remove the pending task so it can run.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Slider groups whose pushes are rate-limited independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlGroup {
    /// Preset intensity.
    Intensity,
    /// Every color, detail, and effect control shares one slot.
    Adjustment,
}

/// Result of one flushed frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub surface: Surface,
    pub histogram: Option<Histogram>,
}

/// Frame-boundary scheduler for interactive edits.
///
/// Between two frames each control group keeps only its latest value, and at most one render
/// is outstanding. [`FrameScheduler::on_frame`] is the frame boundary.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    intensity: PendingSlot<Operation>,
    adjustment: PendingSlot<Operation>,
    render: PendingSlot<()>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, group: ControlGroup) -> &mut PendingSlot<Operation> {
        match group {
            ControlGroup::Intensity => &mut self.intensity,
            ControlGroup::Adjustment => &mut self.adjustment,
        }
    }

    /// Queue a push for `group`, superseding that group's earlier pending value.
    pub fn schedule_push(&mut self, group: ControlGroup, op: Operation) {
        if let Some(prev) = self.slot(group).schedule(op) {
            tracing::trace!(?group, superseded = prev.tag(), "pending push replaced");
        }
    }

    /// Ask for a redraw at the next frame, e.g. after undo or redo.
    pub fn request_render(&mut self) {
        self.render.schedule(());
    }

    pub fn cancel(&mut self, group: ControlGroup) -> bool {
        self.slot(group).cancel()
    }

    pub fn is_idle(&self) -> bool {
        !self.intensity.is_pending() && !self.adjustment.is_pending() && !self.render.is_pending()
    }

    /// Flush pending pushes into the log, then render once if anything changed.
    ///
    /// Returns `None` when nothing was pending or no image is loaded.
    pub fn on_frame(
        &mut self,
        editor: &mut Editor,
        opts: &RenderOpts,
    ) -> RetouchResult<Option<Frame>> {
        for group in [ControlGroup::Intensity, ControlGroup::Adjustment] {
            if let Some(op) = self.slot(group).take() {
                editor.push(op);
                self.render.schedule(());
            }
        }
        if self.render.take().is_none() || editor.base().is_none() {
            return Ok(None);
        }
        let surface = editor.render(opts)?;
        let histogram = compute_histogram(&surface);
        Ok(Some(Frame { surface, histogram }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/debounce.rs"]
mod tests;
