// ============================================================================
// Duration Rounding
// Quantize signed durations to the nearest multiple of a unit
// ============================================================================

use chrono::TimeDelta;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Round the magnitude to the nearest multiple of `unit` (ties up), then
/// reapply the sign. `unit` must be positive.
#[inline]
fn round_magnitude(d: i128, unit: i128) -> i128 {
    let negative = d < 0;
    let mut magnitude = d.abs();

    let m = magnitude % unit;
    if m + m < unit {
        magnitude -= m;
    } else {
        magnitude += unit - m;
    }

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Round a signed nanosecond count to the nearest multiple of `unit`.
///
/// A `unit` of zero or less returns `d` unchanged. Exact halves round up in
/// magnitude, so `-500ms` to the second is `-1s`. Results that would leave
/// the `i64` range saturate.
///
/// # Example
/// ```
/// use ach_utility::numeric::round_duration_nanos;
///
/// assert_eq!(round_duration_nanos(1_499_999_999, 1_000_000_000), 1_000_000_000);
/// assert_eq!(round_duration_nanos(1_500, 0), 1_500);
/// ```
#[inline]
pub fn round_duration_nanos(d: i64, unit: i64) -> i64 {
    if unit <= 0 {
        return d;
    }

    let rounded = round_magnitude(d as i128, unit as i128);
    rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Round a chrono duration to the nearest multiple of `unit`.
///
/// Same rule as [`round_duration_nanos`], evaluated at nanosecond resolution
/// across the full `TimeDelta` range. Out-of-range results saturate to
/// `TimeDelta::MIN` / `TimeDelta::MAX`.
pub fn round_duration(d: TimeDelta, unit: TimeDelta) -> TimeDelta {
    if unit <= TimeDelta::zero() {
        return d;
    }

    let rounded = round_magnitude(total_nanos(d), total_nanos(unit));
    from_total_nanos(rounded)
}

#[inline]
fn total_nanos(d: TimeDelta) -> i128 {
    d.num_seconds() as i128 * NANOS_PER_SEC + d.subsec_nanos() as i128
}

fn from_total_nanos(nanos: i128) -> TimeDelta {
    let secs = nanos.div_euclid(NANOS_PER_SEC);
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;

    i64::try_from(secs)
        .ok()
        .and_then(|secs| TimeDelta::new(secs, subsec))
        .unwrap_or(if nanos < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        })
}
