//! Tolerance defaults for 2D predicates.
//!
//! Policy
//! - One absolute epsilon absorbs rounding noise from subtraction-heavy vector
//!   math. It does not model measurement uncertainty.
//! - Comparisons are strict (`|d| < eps`) and per axis; there is no Euclidean
//!   distance test.

/// Reference tolerance used by every shorthand predicate.
pub const EPSILON: f64 = 1e-5;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

/// Scalar equality under tolerance: `|a - b| < eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
