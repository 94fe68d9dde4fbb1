// ============================================================================
// Decimal Rounding
// Half-up rounding of floating-point and exact decimal values
// ============================================================================

use crate::errors::{UtilityError, UtilityResult};
use rust_decimal::Decimal;

/// Largest number of places `round_decimal_to_places` accepts (rust_decimal's max scale)
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Round a float to `places` decimal places, half-up.
///
/// The value is scaled by `10^places`. If the fractional part of the scaled
/// value is at least 0.5 the ceiling is taken, otherwise the floor. The
/// fractional part carries the sign of the value, so negative inputs with any
/// fraction land on the floor (`-0.78253` to 4 places is `-0.7826`).
///
/// Negative `places` rounds to tens, hundreds, ... (`round_to_places(15.0, -1)`
/// is `20.0`).
///
/// # Example
/// ```
/// use ach_utility::numeric::round_to_places;
///
/// assert_eq!(round_to_places(2.5, 0), 3.0);
/// assert_eq!(round_to_places(0.782549, 4), 0.7825);
/// ```
#[inline]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let pow = 10f64.powi(places);
    let digit = pow * value;

    let round = if digit.fract() >= 0.5 {
        digit.ceil()
    } else {
        digit.floor()
    };

    round / pow
}

/// Round an exact decimal to `places` decimal places with the same policy as
/// [`round_to_places`].
///
/// # Errors
/// Returns `PrecisionOutOfRange` if `places` exceeds [`MAX_DECIMAL_PLACES`]
/// or the scaled value does not fit in a `Decimal`.
pub fn round_decimal_to_places(value: Decimal, places: u32) -> UtilityResult<Decimal> {
    if places > MAX_DECIMAL_PLACES {
        return Err(UtilityError::PrecisionOutOfRange);
    }

    let pow = Decimal::try_from_i128_with_scale(10i128.pow(places), 0)
        .map_err(|_| UtilityError::PrecisionOutOfRange)?;
    let digit = value
        .checked_mul(pow)
        .ok_or(UtilityError::PrecisionOutOfRange)?;

    let round = if digit.fract() >= Decimal::new(5, 1) {
        digit.ceil()
    } else {
        digit.floor()
    };

    round
        .checked_div(pow)
        .map(|d| d.normalize())
        .ok_or(UtilityError::PrecisionOutOfRange)
}
