//! Robust 2D geometric predicates for validating and querying polygon boundaries.
//!
//! Layers
//! - `predicates`: tolerance comparator, vector algebra, orientation, span test,
//!   point equality, segment intersection classifier.
//! - `polygon`: boundary walks over a shared vertex pool with closed / simple /
//!   containment checks built on the predicates.
//!
//! All functions are pure and allocation-free except where they return a
//! collection (`Polygon::pair_report`). Every type is `Send + Sync`.

pub mod api;
pub mod polygon;
pub mod predicates;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point2, Vector2 as Vec2};
pub use polygon::{Edge, GeomError, Location, Polygon};
pub use predicates::{GeomCfg, EPSILON};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::polygon::{Edge, GeomError, Location, Polygon};
    pub use crate::predicates::{
        classify, classify_eps, in_span, orientation, orientation_eps, points_equal,
        points_equal_eps, GeomCfg, Intersection, Orientation, Segment, EPSILON,
    };
    pub use nalgebra::{point, Point2, Vector2 as Vec2};
}
