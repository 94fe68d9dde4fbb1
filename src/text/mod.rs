// ============================================================================
// Text Module
// Fixed-width field formatting
// ============================================================================

mod padding;

pub use padding::{pad, pad_str, Justification};
