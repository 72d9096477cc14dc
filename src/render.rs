use crate::{core::SlideIndex, eval::DeckFrame};

/// The rendering collaborator: receives the continuous per-slide opacities
/// on every update and the discrete navigation highlight when it changes.
pub trait RenderSink {
    /// Apply a freshly evaluated frame (one opacity per slide).
    fn apply_frame(&mut self, frame: &DeckFrame);

    /// The navigation-active slide changed (also called once at mount with
    /// the initial value).
    fn set_highlight(&mut self, active: SlideIndex);
}

/// Sink that discards everything. Useful for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn apply_frame(&mut self, _frame: &DeckFrame) {}

    fn set_highlight(&mut self, _active: SlideIndex) {}
}
