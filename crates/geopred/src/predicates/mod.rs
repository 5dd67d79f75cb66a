//! Pairwise 2D predicates (tolerance-aware, no allocation).
//!
//! Purpose
//! - Provide the sidedness and span tests every higher-level check is built on,
//!   plus the segment intersection classifier that composes them.
//! - Keep every predicate a pure function of its `Copy` inputs.
//!
//! Layers (leaves first)
//! - `cfg`: the fixed `EPSILON`, `GeomCfg`, scalar comparator.
//! - `vector`: dot and 2D cross product of displacement vectors.
//! - `orient`: `orientation`, `in_span`, `points_equal`.
//! - `intersect`: `classify` → `Intersection`.
//!
//! Numeric notes
//! - Tolerances are absolute and axis-wise. The cross product grows with the
//!   segment length, so near-collinear calls on long segments are less reliable.
//! - Inputs must be finite; NaN/inf coordinates give unspecified results.

mod cfg;
mod intersect;
mod orient;
mod types;
mod vector;

pub use cfg::{approx_eq, GeomCfg, EPSILON};
pub use intersect::{classify, classify_eps, Intersection};
pub use orient::{in_span, orientation, orientation_eps, points_equal, points_equal_eps};
pub use types::{Orientation, Segment};
pub use vector::{cross, dot};
