// ============================================================================
// Basic Usage Example
// ============================================================================

use ach_utility::calendar::COMPACT_DATE_FORMAT;
use ach_utility::prelude::*;
use chrono::{NaiveDate, TimeDelta, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ach_utility::logging::init_logging(true)?;

    println!("=== ACH Utility Example ===\n");

    // Bank holidays in the compact header format
    let holidays = HolidayCalendar::parse_dates(
        ["160704", "160904", "161009", "161110"],
        COMPACT_DATE_FORMAT,
    )?;
    println!("Loaded {} bank holidays\n", holidays.len());

    println!("Settlement dates:");
    let start = NaiveDate::from_ymd_opt(2016, 6, 29).ok_or("invalid start date")?;
    for today in start.iter_days().take(8) {
        let settlement = calc_settlement_date(today, &holidays)?;
        println!("  {} ({}) -> {}", today, today.format("%a"), settlement);
    }

    let now = Utc::now();
    println!("\nSettling now ({}) -> {}", now, calc_settlement_timestamp(now, &holidays)?);

    println!("\n=== Rounding ===");
    println!("  round_to_places(0.78255, 4)  = {}", round_to_places(0.78255, 4));
    println!("  round_to_places(-0.78255, 4) = {}", round_to_places(-0.78255, 4));
    println!(
        "  round_duration(1.5s, 1s)     = {}",
        round_duration(TimeDelta::milliseconds(1500), TimeDelta::seconds(1))
    );

    println!("\n=== Fields ===");
    println!("  [{}]", pad("ACME CORP", 16, Justification::Left, ' ')?);
    println!("  [{}]", pad("4250", 10, Justification::Right, '0')?);
    if let Err(e) = pad_str("TOO LONG FOR FIELD", 8, "left", " ") {
        println!("  rejected: {}", e);
    }

    println!("\n=== Host ===");
    println!("  file name: {}", timestamped_filename(".ach", "outbound").display());
    println!("  trace id:  {}", thread_random_hex_string(8));
    match local_non_loopback_ipv4() {
        Ok(ip) => println!("  local ip:  {}", ip),
        Err(e) => println!("  local ip:  unavailable ({})", e),
    }

    Ok(())
}
