//! Numeric limits and planner defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants so tests and the CLI agree on one baseline.
//!   Anything a rigging engineer would reasonably change lives on `PlanCfg`
//!   instead of here.

/// Largest cone-edge angle (degrees from nadir) fed to `tan`.
/// tan(89.99°) ≈ 5729.6, so a saturated edge lands several km away but stays finite.
pub const MAX_EDGE_ANGLE_DEG: f64 = 89.99;

/// Default minimum mount height for the lowest cabinet in a stack (m).
pub const DEFAULT_TARGET_FLOOR: f64 = 0.10;
/// Default fraction of the top footprint width used as array spacing.
pub const DEFAULT_OVERLAP_FACTOR: f64 = 0.5;
/// Default per-array device cap.
pub const DEFAULT_MAX_PER_ARRAY: usize = 20;
/// Default distance between the venue's clear height and the top rigging point (m).
pub const DEFAULT_RIG_CLEARANCE: f64 = 1.0;

/// Upper bound on arrays across one venue. A spacing that needs more is
/// treated as degenerate rather than allocated.
pub const MAX_ARRAYS: usize = 1_000;

/// Dispersion angles must stay strictly below this (degrees).
pub(crate) const MAX_DISPERSION_DEG: f64 = 180.0;
