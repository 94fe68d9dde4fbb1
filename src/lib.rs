// ============================================================================
// ACH Utility Library
// Rounding, settlement-date, padding and host helpers for ACH file pipelines
// ============================================================================

//! # ACH Utility
//!
//! Small, independent helpers used while building ACH files.
//!
//! ## Features
//!
//! - **Half-up rounding** of `f64` and exact `Decimal` values to N places
//! - **Duration quantization** to any unit, sign-symmetric
//! - **Settlement dates** that roll past weekends and bank holidays
//! - **Fixed-width padding** for record fields
//! - **Boundary helpers**: timestamped file names, local IPv4 discovery,
//!   seeded random hex strings
//!
//! Every fallible function returns [`UtilityResult`]; nothing panics or
//! exits the process.
//!
//! ## Example
//!
//! ```rust
//! use ach_utility::prelude::*;
//! use chrono::NaiveDate;
//!
//! let holidays = HolidayCalendar::new()
//!     .with_holiday(NaiveDate::from_ymd_opt(2016, 7, 4).unwrap());
//!
//! // Friday before a holiday Monday settles on Tuesday
//! let friday = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
//! let settlement = calc_settlement_date(friday, &holidays)?;
//! assert_eq!(settlement, NaiveDate::from_ymd_opt(2016, 7, 5).unwrap());
//!
//! // Amount field, zero-filled to ten characters
//! let cents = round_to_places(123.456, 2) * 100.0;
//! let field = pad(&format!("{:.0}", cents), 10, Justification::Right, '0')?;
//! assert_eq!(field, "0000012346");
//! # Ok::<(), UtilityError>(())
//! ```

pub mod calendar;
pub mod errors;
pub mod numeric;
pub mod text;
pub mod utils;

#[cfg(feature = "logging")]
pub mod logging;

pub use errors::{UtilityError, UtilityResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::calendar::{calc_settlement_date, calc_settlement_timestamp, HolidayCalendar};
    pub use crate::errors::{UtilityError, UtilityResult};
    pub use crate::numeric::{
        approximately_equal, round_decimal_to_places, round_duration, round_duration_nanos,
        round_to_places, EPSILON,
    };
    pub use crate::text::{pad, pad_str, Justification};
    pub use crate::utils::{
        local_non_loopback_ipv4, random_hex_string, random_hex_string_seeded, slice_index,
        thread_random_hex_string, timestamped_filename,
    };
}
