//! Segment–segment intersection classifier.
//!
//! The classifier reports the topological kind of contact, not a point:
//! a proper crossing short-circuits, everything else is the number of
//! endpoints that are collinear with, and inside the span of, the other segment.
//!
//! Compatibility codes (`Intersection::code`)
//! - 0 disjoint, 1 crossing or single touch, 2 shared vertex or strict
//!   containment, 3 partial overlap sharing one endpoint, 4 identical.
//! - Code 1 deliberately conflates `Crossing` and `Touching`; the enum keeps
//!   them apart for callers that need the difference.

use nalgebra::Point2;

use super::cfg::EPSILON;
use super::orient::{in_span, orientation_eps};
use super::types::{Orientation, Segment};

/// How two segments relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    /// No contact.
    Disjoint,
    /// Single point interior to both segments.
    Crossing,
    /// Exactly one endpoint lies on the other segment (T-junction).
    Touching,
    /// Two endpoint hits: a shared vertex (adjacent edges) or one segment
    /// strictly inside the other.
    DoubleContact,
    /// Collinear overlap sharing exactly one endpoint.
    PartialOverlap,
    /// Same endpoints (either direction).
    Identical,
}

impl Intersection {
    /// Integer classification code in `0..=4`.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Intersection::Disjoint => 0,
            Intersection::Crossing | Intersection::Touching => 1,
            Intersection::DoubleContact => 2,
            Intersection::PartialOverlap => 3,
            Intersection::Identical => 4,
        }
    }

    /// True for the code that makes a polygon non-simple.
    #[inline]
    pub fn is_crossing_code(self) -> bool {
        self.code() == 1
    }

    #[inline]
    pub fn is_disjoint(self) -> bool {
        matches!(self, Intersection::Disjoint)
    }

    fn from_hits(hits: u8) -> Self {
        match hits {
            0 => Intersection::Disjoint,
            1 => Intersection::Touching,
            2 => Intersection::DoubleContact,
            3 => Intersection::PartialOverlap,
            _ => Intersection::Identical,
        }
    }
}

#[inline]
fn span_hit(o: Orientation, seg: &Segment, p: &Point2<f64>) -> bool {
    o == Orientation::Collinear && in_span(seg, p)
}

/// Classify `s1 = (A, B)` against `s2 = (C, D)` with tolerance `eps`.
///
/// Symmetric in outcome: `classify_eps(s1, s2, eps) == classify_eps(s2, s1, eps)`.
pub fn classify_eps(s1: &Segment, s2: &Segment, eps: f64) -> Intersection {
    let oa = orientation_eps(s2, &s1.start, eps);
    let ob = orientation_eps(s2, &s1.end, eps);
    let oc = orientation_eps(s1, &s2.start, eps);
    let od = orientation_eps(s1, &s2.end, eps);

    if oa.sign() * ob.sign() < 0 && oc.sign() * od.sign() < 0 {
        return Intersection::Crossing;
    }

    let hits = [
        span_hit(oa, s2, &s1.start),
        span_hit(ob, s2, &s1.end),
        span_hit(oc, s1, &s2.start),
        span_hit(od, s1, &s2.end),
    ]
    .iter()
    .filter(|&&h| h)
    .count() as u8;
    Intersection::from_hits(hits)
}

/// Shorthand for `classify_eps(s1, s2, EPSILON)`.
#[inline]
pub fn classify(s1: &Segment, s2: &Segment) -> Intersection {
    classify_eps(s1, s2, EPSILON)
}
