//! Core runtime for the overscroll container.
//!
//! Everything here runs on a single UI thread. The runtime owns a queue of
//! frame callbacks that the host drains once per display frame; animation
//! code re-registers itself through [`FrameClock`] to keep running.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{NoopScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
