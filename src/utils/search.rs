// ============================================================================
// Index Search
// ============================================================================

use crate::errors::{UtilityError, UtilityResult};

/// Find the first index below `limit` for which `predicate` holds.
///
/// Useful for locating a step in an ordered workflow when the caller only
/// has a closure over its own collection.
///
/// # Example
/// ```
/// use ach_utility::utils::slice_index;
///
/// let steps = ["received", "validated", "batched", "sent"];
/// assert_eq!(slice_index(steps.len(), |i| steps[i] == "batched"), Ok(2));
/// assert!(slice_index(steps.len(), |i| steps[i] == "settled").is_err());
/// ```
///
/// # Errors
/// Returns `NotFound` if no index matches.
pub fn slice_index<F>(limit: usize, mut predicate: F) -> UtilityResult<usize>
where
    F: FnMut(usize) -> bool,
{
    (0..limit)
        .find(|&i| predicate(i))
        .ok_or(UtilityError::NotFound)
}
