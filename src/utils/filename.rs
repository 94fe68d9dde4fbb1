// ============================================================================
// Timestamped File Names
// ============================================================================

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// UTC timestamp with millisecond precision, safe for file names
pub const FILENAME_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Build `<directory>/<UTC now><extension>`.
///
/// `extension` is appended verbatim, so include the dot (`".ach"`). Two calls
/// in the same millisecond return the same name.
pub fn timestamped_filename(extension: &str, directory: impl AsRef<Path>) -> PathBuf {
    timestamped_filename_at(Utc::now(), extension, directory)
}

/// Build `<directory>/<timestamp><extension>` for a fixed timestamp.
///
/// # Example
/// ```
/// use ach_utility::utils::timestamped_filename_at;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2016, 7, 1, 13, 5, 9).unwrap();
/// let path = timestamped_filename_at(ts, ".ach", "out");
/// assert_eq!(path, std::path::Path::new("out/2016-07-01T13-05-09.000.ach"));
/// ```
pub fn timestamped_filename_at(
    timestamp: DateTime<Utc>,
    extension: &str,
    directory: impl AsRef<Path>,
) -> PathBuf {
    let name = format!("{}{}", timestamp.format(FILENAME_TIME_FORMAT), extension);
    directory.as_ref().join(name)
}
