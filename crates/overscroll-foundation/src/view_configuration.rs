//! Platform gesture configuration.

use std::fmt;

use overscroll_ui_graphics::Dp;

use crate::gesture_constants::DRAG_THRESHOLD;

/// Density and touch thresholds for one display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfiguration {
    density: f32,
    touch_slop: Dp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewConfigurationError {
    InvalidDensity { density: f32 },
    InvalidTouchSlop { touch_slop: f32 },
}

impl fmt::Display for ViewConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewConfigurationError::InvalidDensity { density } => {
                write!(f, "density must be finite and positive, got {density}")
            }
            ViewConfigurationError::InvalidTouchSlop { touch_slop } => {
                write!(
                    f,
                    "touch slop must be finite and non-negative, got {touch_slop}dp"
                )
            }
        }
    }
}

impl std::error::Error for ViewConfigurationError {}

impl ViewConfiguration {
    pub fn new(density: f32) -> Result<Self, ViewConfigurationError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ViewConfigurationError::InvalidDensity { density });
        }
        Ok(Self {
            density,
            touch_slop: Dp(DRAG_THRESHOLD),
        })
    }

    pub fn with_touch_slop(mut self, touch_slop: Dp) -> Result<Self, ViewConfigurationError> {
        if !touch_slop.0.is_finite() || touch_slop.0 < 0.0 {
            return Err(ViewConfigurationError::InvalidTouchSlop {
                touch_slop: touch_slop.0,
            });
        }
        self.touch_slop = touch_slop;
        Ok(self)
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn touch_slop(&self) -> Dp {
        self.touch_slop
    }

    /// Touch slop in device pixels.
    pub fn scaled_touch_slop(&self) -> f32 {
        self.touch_slop.to_px(self.density)
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            density: 1.0,
            touch_slop: Dp(DRAG_THRESHOLD),
        }
    }
}

#[cfg(test)]
#[path = "tests/view_configuration_tests.rs"]
mod tests;
