//! Curated flat API surface.
//!
//! Every predicate and check in one namespace, for callers that prefer
//! `geopred::api::*` over walking the module tree.

// Pairwise predicates
pub use crate::predicates::{
    approx_eq, classify, classify_eps, cross, dot, in_span, orientation, orientation_eps,
    points_equal, points_equal_eps, GeomCfg, Intersection, Orientation, Segment, EPSILON,
};
// Polygon checks
pub use crate::polygon::{Edge, GeomError, Location, Polygon};
