// ============================================================================
// Numeric Module
// Rounding and comparison helpers for financial values
// ============================================================================
//
// This module provides:
// - round_to_places / round_decimal_to_places: half-up rounding to N places
// - round_duration / round_duration_nanos: quantize durations to a unit
// - approximately_equal: epsilon comparison used by rounding callers
//
// All functions are pure; none allocate or touch shared state.

mod comparison;
mod duration;
mod rounding;

pub use comparison::{approximately_equal, EPSILON};
pub use duration::{round_duration, round_duration_nanos};
pub use rounding::{round_decimal_to_places, round_to_places, MAX_DECIMAL_PLACES};
