//! Recogniser for a horizontal overscroll drag past the trailing edge.
//!
//! The recogniser watches one pointer stream at a time. After `Down` it waits
//! for the pointer to travel more than the touch slop horizontally; past the
//! slop every move asks whether overscroll is allowed. Only a leftward drag
//! with permission is claimed. A refusal from the policy holds until the
//! next `Down`; a pointer that is merely on the wrong side of the slop can
//! still start the drag once it comes back leftwards.

use crate::nodes::input::types::PointerEventKind;

/// What the recogniser made of one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    /// The event is not claimed and should reach the hosted view.
    Ignored,
    /// A new gesture started at the given x.
    Pressed { x: f32 },
    /// The slop was crossed leftwards with permission; the drag is claimed
    /// from this event on.
    DragStarted { offset: f32 },
    /// Continued drag; `offset` is the cumulative horizontal distance.
    Dragged { offset: f32 },
    /// The claimed drag ended with this offset.
    Released { offset: f32 },
}

impl GestureUpdate {
    /// Whether the container owns this event.
    pub fn is_claimed(&self) -> bool {
        matches!(
            self,
            GestureUpdate::DragStarted { .. }
                | GestureUpdate::Dragged { .. }
                | GestureUpdate::Released { .. }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SlopDecision {
    Undecided,
    Declined,
}

#[derive(Clone, Debug)]
pub struct OverscrollDragGesture {
    touch_slop: f32,
    is_dragging: bool,
    drag_start_x: Option<f32>,
    last_offset: f32,
    decision: SlopDecision,
}

impl OverscrollDragGesture {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            is_dragging: false,
            drag_start_x: None,
            last_offset: 0.0,
            decision: SlopDecision::Undecided,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_start_x(&self) -> Option<f32> {
        self.drag_start_x
    }

    /// Feeds one event. `can_overscroll_at_end` is consulted for a move past
    /// the slop until it refuses or the drag starts.
    pub fn on_event(
        &mut self,
        kind: PointerEventKind,
        x: f32,
        can_overscroll_at_end: impl FnOnce() -> bool,
    ) -> GestureUpdate {
        match kind {
            PointerEventKind::Down => {
                if self.is_dragging {
                    log::warn!("pointer down while dragging; dropping previous gesture");
                }
                self.drag_start_x = Some(x);
                self.is_dragging = false;
                self.last_offset = 0.0;
                self.decision = SlopDecision::Undecided;
                GestureUpdate::Pressed { x }
            }
            PointerEventKind::Move => {
                let Some(start) = self.drag_start_x else {
                    log::warn!("pointer move at x={x} without a preceding down; ignoring");
                    return GestureUpdate::Ignored;
                };
                let offset = x - start;
                if self.is_dragging {
                    self.last_offset = offset;
                    return GestureUpdate::Dragged { offset };
                }
                if self.decision == SlopDecision::Declined || offset.abs() <= self.touch_slop {
                    return GestureUpdate::Ignored;
                }
                if !can_overscroll_at_end() {
                    log::trace!("slop crossed at offset {offset} but overscroll declined");
                    self.decision = SlopDecision::Declined;
                    return GestureUpdate::Ignored;
                }
                if offset > 0.0 {
                    return GestureUpdate::Ignored;
                }
                log::debug!("overscroll drag started at offset {offset}");
                self.is_dragging = true;
                self.last_offset = offset;
                GestureUpdate::DragStarted { offset }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let start = self.drag_start_x.take();
                self.decision = SlopDecision::Undecided;
                if !self.is_dragging {
                    return GestureUpdate::Ignored;
                }
                self.is_dragging = false;
                let offset = match (kind, start) {
                    (PointerEventKind::Up, Some(start)) => x - start,
                    _ => self.last_offset,
                };
                log::debug!("overscroll drag released at offset {offset}");
                GestureUpdate::Released { offset }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/overscroll_drag_tests.rs"]
mod tests;
