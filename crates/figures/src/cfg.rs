//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants shared by every shape predicate. Integer
//!   scalars reach these comparisons already promoted to `f64`, so for them
//!   the checks are exact.

/// Slack for side-length equality, right-angle (dot) and parallel (cross) checks.
pub const EPS: f64 = 1e-9;

/// Returns true when `value` is within `EPS` of zero.
#[inline]
pub(crate) fn near_zero(value: f64) -> bool {
    value.abs() < EPS
}
