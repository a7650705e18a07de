//! Constructive heuristics for building initial solutions.
//!
//! - [`savings`] — Randomized Clarke-Wright savings construction, O(n³)

mod savings;

pub use savings::savings;
