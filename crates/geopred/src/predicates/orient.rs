use nalgebra::Point2;

use super::cfg::{approx_eq, EPSILON};
use super::types::{Orientation, Segment};
use super::vector::{cross, dot};

/// Tolerance equality of two points: both axes must differ by less than `eps`.
#[inline]
pub fn points_equal_eps(a: &Point2<f64>, b: &Point2<f64>, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Shorthand for `points_equal_eps(a, b, EPSILON)`.
#[inline]
pub fn points_equal(a: &Point2<f64>, b: &Point2<f64>) -> bool {
    points_equal_eps(a, b, EPSILON)
}

/// Side of `p` relative to the directed segment, from `cross(B - A, P - A)`.
///
/// `|cross| < eps` is `Collinear`; the cross product scales with the segment
/// length, so the band narrows in angle as segments get longer.
#[inline]
pub fn orientation_eps(seg: &Segment, p: &Point2<f64>, eps: f64) -> Orientation {
    let c = cross(seg.end - seg.start, p - seg.start);
    if c.abs() < eps {
        Orientation::Collinear
    } else if c < 0.0 {
        Orientation::Right
    } else {
        Orientation::Left
    }
}

/// Shorthand for `orientation_eps(seg, p, EPSILON)`.
#[inline]
pub fn orientation(seg: &Segment, p: &Point2<f64>) -> Orientation {
    orientation_eps(seg, p, EPSILON)
}

/// Whether `p` lies within the closed endpoint span of `seg`: `(A-P)·(B-P) <= 0`.
///
/// Pre: `p` is collinear with `seg`. For non-collinear points the answer only
/// says that the angle APB is at least 90°.
#[inline]
pub fn in_span(seg: &Segment, p: &Point2<f64>) -> bool {
    dot(seg.start - p, seg.end - p) <= 0.0
}
