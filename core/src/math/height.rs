use crate::math::coerce::or_zero;

/// Vertical calibration of raw sounder heights.
pub struct HeightHelper;

impl HeightHelper {
    /// `|height| + delta`; a `NaN` delta counts as zero.
    pub fn with_delta(height: f64, delta: f64) -> f64 {
        height.abs() + or_zero(delta)
    }

    /// `|base - with_delta(height, delta)|`.
    ///
    /// The raw height is folded to its absolute value before the delta is
    /// added, and the difference to the base is folded again.
    pub fn with_base_and_delta(height: f64, base: f64, delta: f64) -> f64 {
        (or_zero(base) - Self::with_delta(height, delta)).abs()
    }
}
