// ============================================================================
// Float Comparison
// ============================================================================

/// Error margin for [`approximately_equal`]
pub const EPSILON: f64 = 0.00000001;

/// Check whether two floats differ by less than [`EPSILON`].
///
/// Both `a - b` and `b - a` must be strictly below the margin, so values
/// exactly `EPSILON` apart compare unequal.
#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    (a - b) < EPSILON && (b - a) < EPSILON
}
