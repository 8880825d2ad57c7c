//! Frame-driven return of an integer offset to its rest position.

use crate::animation::AnimationSpec;

/// Output of one [`ReturnAnimation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Offset to apply this frame; `None` when the tick only latched the
    /// start time or the run is no longer active.
    pub offset: Option<i32>,
    /// `true` once the run must not be rescheduled.
    pub done: bool,
}

/// A single eased run from `from` to `to`.
///
/// The first tick records the start time and moves nothing. Every later tick
/// samples the easing curve at the elapsed fraction and rounds the distance
/// travelled to whole pixels, so the run lands exactly on `to` once the
/// duration has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnAnimation {
    from: i32,
    to: i32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    current: Option<i32>,
    active: bool,
}

impl ReturnAnimation {
    /// Run from `from` back to zero.
    pub fn new(from: i32, spec: AnimationSpec) -> Self {
        Self::between(from, 0, spec)
    }

    pub fn between(from: i32, to: i32, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            spec,
            start_time_nanos: None,
            current: None,
            active: true,
        }
    }

    pub fn from(&self) -> i32 {
        self.from
    }

    pub fn target(&self) -> i32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Last offset produced, if any tick has moved the value yet.
    pub fn current(&self) -> Option<i32> {
        self.current
    }

    pub fn start_time_nanos(&self) -> Option<u64> {
        self.start_time_nanos
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.current == Some(self.to)
    }

    /// Stops the run. Later ticks produce no offset and report `done`.
    pub fn cancel(&mut self) {
        if self.active {
            log::debug!(
                "return animation {} -> {} cancelled at {:?}",
                self.from,
                self.to,
                self.current
            );
        }
        self.active = false;
    }

    /// Advances the run to `frame_time_nanos`.
    pub fn tick(&mut self, frame_time_nanos: u64) -> AnimationFrame {
        if !self.active {
            return AnimationFrame {
                offset: None,
                done: true,
            };
        }

        let Some(start) = self.start_time_nanos else {
            self.start_time_nanos = Some(frame_time_nanos);
            return AnimationFrame {
                offset: None,
                done: false,
            };
        };

        let elapsed = frame_time_nanos.saturating_sub(start);
        let linear = (elapsed as f64 / self.spec.duration_nanos() as f64).clamp(0.0, 1.0) as f32;
        let eased = self.spec.easing.transform(linear);
        let travelled = ((self.from as f32 - self.to as f32) * eased).round() as i32;
        let position = self.from.saturating_sub(travelled);
        self.current = Some(position);
        log::trace!(
            "return animation tick: linear={linear:.3} eased={eased:.3} offset={position}"
        );

        let done = position == self.to;
        if done {
            self.active = false;
        }
        AnimationFrame {
            offset: Some(position),
            done,
        }
    }
}

#[cfg(test)]
#[path = "tests/return_animation_tests.rs"]
mod tests;
