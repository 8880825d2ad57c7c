//! Shared gesture constants for touch handling.
//!
//! Values are in density-independent pixels and are scaled by the display
//! density through [`crate::ViewConfiguration`].

/// Touch slop in dp.
///
/// A pointer has to travel further than this from its press position before
/// the movement counts as an intentional drag rather than finger jitter.
/// Matches Android's `ViewConfiguration.TOUCH_SLOP` of 8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;
