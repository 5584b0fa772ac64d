//! Shared primitive types used across the entire simulation.

/// A simulation year. Year 0 is the seeded starting state.
pub type Year = u32;

/// A cohort headcount or a demographic delta.
///
/// Signed so that inconsistent inputs surface as negative counts
/// instead of wrapping.
pub type Count = i64;

/// The canonical run identifier.
pub type RunId = String;
