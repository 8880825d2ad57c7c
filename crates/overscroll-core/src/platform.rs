//! Platform abstraction traits for runtime services.
//!
//! These traits let the runtime delegate frame scheduling and clock
//! responsibilities to the host platform, so the overscroll machinery can be
//! embedded in any event loop.

/// Schedules work for the runtime.
///
/// Implementations are responsible for waking the host so that it drains
/// frame callbacks on its next display frame. They must be safe to use from
/// multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Nanoseconds elapsed since `since`, used to stamp frames.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
