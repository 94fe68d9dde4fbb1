// ============================================================================
// Utilities Module
// Host, file-name and randomness helpers at the edge of the library
// ============================================================================

mod filename;
mod network;
mod random;
mod search;

pub use filename::{timestamped_filename, timestamped_filename_at, FILENAME_TIME_FORMAT};
pub use network::{first_non_loopback_ipv4, local_non_loopback_ipv4};
pub use random::{random_hex_string, random_hex_string_seeded, thread_random_hex_string};
pub use search::slice_index;
