//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform abstraction
//! traits defined in `overscroll-core`. Hosts construct a [`StdRuntime`],
//! hand its frame clock to containers and call
//! [`StdRuntime::drain_frame_callbacks_now`] from their frame callback.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use overscroll_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

/// Scheduler that records frame requests for a host that polls once per
/// display frame.
#[derive(Default)]
pub struct StdScheduler {
    frame_requested: AtomicBool,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
    }
}

/// Clock implementation backed by [`web_time`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Self::Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Convenience container bundling the standard scheduler, clock and runtime.
#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    clock: Arc<StdClock>,
    origin: Instant,
    runtime: Runtime,
}

impl StdRuntime {
    /// Creates a new standard runtime instance.
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = Arc::new(StdClock);
        Self {
            origin: clock.now(),
            scheduler,
            clock,
            runtime,
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn scheduler(&self) -> Arc<StdScheduler> {
        Arc::clone(&self.scheduler)
    }

    pub fn clock(&self) -> Arc<StdClock> {
        Arc::clone(&self.clock)
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Nanoseconds elapsed since this runtime was created.
    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.elapsed_nanos(self.origin)
    }

    /// Drains pending frame callbacks using the provided frame timestamp in nanoseconds.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
    }

    /// Drains pending frame callbacks stamped with the current wall-clock time.
    pub fn drain_frame_callbacks_now(&self) {
        self.drain_frame_callbacks(self.frame_time_nanos());
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
