use std::sync::Arc;

use overscroll_core::{NoopScheduler, Runtime};
use overscroll_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
use overscroll_ui::{OverscrollConfig, OverscrollContainer, OverscrollState, TouchDisposition};
use overscroll_ui_graphics::{Dp, Size};

use crate::stub::StubPolicy;

/// 60 Hz frame interval.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Headless harness for exercising an [`OverscrollContainer`].
///
/// The rule owns its runtime and a synthetic frame clock, so a test decides
/// exactly when frames happen and what time they carry. Offsets observed
/// after each frame are kept in [`OverscrollTestRule::offset_history`].
pub struct OverscrollTestRule {
    runtime: Runtime,
    policy: StubPolicy,
    container: OverscrollContainer<StubPolicy>,
    frame_time_nanos: u64,
    offset_history: Vec<f32>,
}

impl OverscrollTestRule {
    /// Rule with overscroll permitted and a 10px touch slop.
    pub fn new() -> Self {
        Self::with_policy(StubPolicy::new(true))
    }

    pub fn with_policy(policy: StubPolicy) -> Self {
        let config = ViewConfiguration::default()
            .with_touch_slop(Dp(10.0))
            .map(|view_configuration| {
                OverscrollConfig::default().with_view_configuration(view_configuration)
            })
            .unwrap_or_default();
        Self::with_config(policy, config)
    }

    pub fn with_config(policy: StubPolicy, config: OverscrollConfig) -> Self {
        let runtime = Runtime::new(Arc::new(NoopScheduler));
        let container =
            OverscrollContainer::with_config(policy.clone(), runtime.frame_clock(), config);
        container.layout(Size::new(360.0, 640.0));
        Self {
            runtime,
            policy,
            container,
            frame_time_nanos: 0,
            offset_history: Vec::new(),
        }
    }

    pub fn container(&self) -> &OverscrollContainer<StubPolicy> {
        &self.container
    }

    pub fn policy(&self) -> &StubPolicy {
        &self.policy
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> OverscrollState {
        self.container.state()
    }

    pub fn offset(&self) -> f32 {
        self.container.offset()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn send(&mut self, kind: PointerEventKind, x: f32) -> TouchDisposition {
        let event = PointerEvent::at(kind, x, 100.0).with_time_nanos(self.frame_time_nanos);
        self.container.on_pointer_event(&event)
    }

    pub fn down(&mut self, x: f32) -> TouchDisposition {
        self.send(PointerEventKind::Down, x)
    }

    pub fn move_to(&mut self, x: f32) -> TouchDisposition {
        self.send(PointerEventKind::Move, x)
    }

    pub fn up(&mut self, x: f32) -> TouchDisposition {
        self.send(PointerEventKind::Up, x)
    }

    pub fn cancel(&mut self, x: f32) -> TouchDisposition {
        self.send(PointerEventKind::Cancel, x)
    }

    /// Down, a series of moves, then up at the last x.
    pub fn swipe(&mut self, from: f32, moves: &[f32]) -> Vec<TouchDisposition> {
        let mut dispositions = vec![self.down(from)];
        for x in moves {
            dispositions.push(self.move_to(*x));
        }
        let last = moves.last().copied().unwrap_or(from);
        dispositions.push(self.up(last));
        dispositions
    }

    /// Advance the synthetic clock and drain one frame.
    pub fn advance_frame_by_nanos(&mut self, delta_nanos: u64) {
        self.frame_time_nanos += delta_nanos;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.offset_history.push(self.container.offset());
    }

    pub fn advance_frame_by_millis(&mut self, delta_millis: u64) {
        self.advance_frame_by_nanos(delta_millis * 1_000_000);
    }

    pub fn advance_frame(&mut self) {
        self.advance_frame_by_nanos(FRAME_INTERVAL_NANOS);
    }

    /// Drain 60 Hz frames until no callback is pending. Returns the number of
    /// frames drained.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.has_frame_callbacks() {
            frames += 1;
            if frames > 1_000 {
                panic!("run_until_idle: frame callbacks never settled");
            }
            self.advance_frame();
        }
        frames
    }

    pub fn offset_history(&self) -> &[f32] {
        &self.offset_history
    }

    pub fn clear_offset_history(&mut self) {
        self.offset_history.clear();
    }
}

impl Default for OverscrollTestRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
