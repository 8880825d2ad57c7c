//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}
