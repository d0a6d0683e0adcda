//! Unit types: Dp, Px, and conversions
//!
//! Rounding convention: a `Dp` value becomes device pixels through
//! [`Dp::round_to_px`], which multiplies by the density and rounds half away
//! from zero exactly once. Callers convert theme constants at the boundary and
//! keep all further arithmetic in unrounded `f32`.

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to device pixels, rounding half away from zero.
    pub fn round_to_px(&self, density: f32) -> f32 {
        (self.0 * density).round()
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        if density <= 0.0 {
            return Self(px);
        }
        Self(px / density)
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f32);

impl Px {
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<Px> for f32 {
    fn from(value: Px) -> Self {
        value.0
    }
}
