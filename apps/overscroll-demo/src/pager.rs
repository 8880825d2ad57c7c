use std::cell::Cell;
use std::rc::Rc;

use overscroll_ui::{HostedView, OverscrollPolicy, Rect};

pub const PAGE_COUNT: usize = 3;

const TITLES: [&str; PAGE_COUNT] = ["Welcome", "Sync your notes", "You're all set"];

/// Slides of the intro screen.
#[derive(Debug, Default)]
pub struct Slides {
    bounds: Rect,
}

impl Slides {
    pub fn title(&self, page: usize) -> &'static str {
        TITLES.get(page).copied().unwrap_or("")
    }
}

impl HostedView for Slides {
    fn place(&mut self, bounds: Rect) {
        log::debug!("slides placed at {bounds:?}");
        self.bounds = bounds;
    }
}

/// Pager that only lets the last slide overscroll.
#[derive(Debug, Clone, Default)]
pub struct IntroPager {
    page: Rc<Cell<usize>>,
}

impl IntroPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn next_page(&self) {
        self.page.set((self.page.get() + 1).min(PAGE_COUNT - 1));
    }
}

impl OverscrollPolicy for IntroPager {
    type View = Slides;

    fn can_overscroll_at_end(&self) -> bool {
        self.page.get() + 1 == PAGE_COUNT
    }

    fn create_view(&mut self) -> Slides {
        Slides::default()
    }
}
