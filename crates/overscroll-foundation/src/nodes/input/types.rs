use overscroll_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

/// Pointer event with consumption tracking.
///
/// A handler that claims a gesture consumes its events so the host stops
/// routing them to descendants. Consumption is shared between copies of the
/// same event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub global_position: Point,
    /// Event timestamp in nanoseconds on the host's frame timeline.
    pub time_nanos: u64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            phase: kind.phase(),
            position,
            global_position,
            time_nanos: 0,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Event at local `(x, y)` whose global position is the same point.
    pub fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        let position = Point::new(x, y);
        Self::new(kind, position, position)
    }

    pub fn with_time_nanos(mut self, time_nanos: u64) -> Self {
        self.time_nanos = time_nanos;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
