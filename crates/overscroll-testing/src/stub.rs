use std::cell::Cell;
use std::rc::Rc;

use overscroll_ui::{HostedView, OverscrollPolicy};
use overscroll_ui_graphics::Rect;

/// Hosted view that remembers every placement it received.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingView {
    placements: Vec<Rect>,
}

impl RecordingView {
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    pub fn last_placement(&self) -> Option<Rect> {
        self.placements.last().copied()
    }
}

impl HostedView for RecordingView {
    fn place(&mut self, bounds: Rect) {
        self.placements.push(bounds);
    }
}

/// Policy whose permission can be flipped from the test while the container
/// owns it.
#[derive(Debug, Clone)]
pub struct StubPolicy {
    at_end: Rc<Cell<bool>>,
    queries: Rc<Cell<u32>>,
    views_created: Rc<Cell<u32>>,
}

impl StubPolicy {
    pub fn new(at_end: bool) -> Self {
        Self {
            at_end: Rc::new(Cell::new(at_end)),
            queries: Rc::new(Cell::new(0)),
            views_created: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_at_end(&self, at_end: bool) {
        self.at_end.set(at_end);
    }

    /// Number of `can_overscroll_at_end` calls so far.
    pub fn queries(&self) -> u32 {
        self.queries.get()
    }

    pub fn views_created(&self) -> u32 {
        self.views_created.get()
    }
}

impl OverscrollPolicy for StubPolicy {
    type View = RecordingView;

    fn can_overscroll_at_end(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.at_end.get()
    }

    fn create_view(&mut self) -> RecordingView {
        self.views_created.set(self.views_created.get() + 1);
        RecordingView::default()
    }
}
