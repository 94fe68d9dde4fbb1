// ============================================================================
// Random Hex Strings
// ============================================================================

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::fmt::Write;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate `length` random characters from `a-z0-9` and hex-encode them.
///
/// The result is `2 * length` lowercase hex digits; a `length` of zero
/// gives an empty string. The generator is supplied by the caller so
/// output can be reproduced from a seed.
pub fn random_hex_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut hex = String::with_capacity(length * 2);
    for _ in 0..length {
        let byte = CHARSET[rng.gen_range(0..CHARSET.len())];
        write!(hex, "{:02x}", byte).ok();
    }
    hex
}

/// Reproducible [`random_hex_string`] from a fixed seed.
pub fn random_hex_string_seeded(seed: u64, length: usize) -> String {
    random_hex_string(&mut StdRng::seed_from_u64(seed), length)
}

/// [`random_hex_string`] using the thread-local generator.
pub fn thread_random_hex_string(length: usize) -> String {
    random_hex_string(&mut thread_rng(), length)
}
