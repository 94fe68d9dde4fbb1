// ============================================================================
// Calendar Module
// Bank holidays and ACH settlement-date rules
// ============================================================================

mod holidays;
mod settlement;

pub use holidays::{HolidayCalendar, COMPACT_DATE_FORMAT, ISO_DATE_FORMAT};
pub use settlement::{calc_settlement_date, calc_settlement_timestamp};
