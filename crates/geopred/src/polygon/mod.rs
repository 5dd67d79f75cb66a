//! Polygon boundaries over a shared vertex pool, and their topology checks.
//!
//! Purpose
//! - `Polygon` stores vertices once and edges as index pairs, so adjacent
//!   edges share a vertex the way a boundary walk does.
//! - Closedness, simplicity and containment are computed on demand; nothing is
//!   validated at construction.
//!
//! Conventions
//! - A dangling edge or vertex index is the only error (`GeomError`). Checks
//!   resolve edges lazily in scan order, so a check that can decide early never
//!   reports a dangling index further along.
//! - Every check has an `_eps` form; the shorthand uses `EPSILON`.
//! - Containment assumes the polygon is closed and simple. This is not checked.

mod error;

pub use error::GeomError;

use nalgebra::Point2;

use crate::predicates::{
    classify_eps, in_span, orientation_eps, points_equal_eps, Intersection, Orientation, Segment,
    EPSILON,
};

/// Directed edge between two vertices of the owning polygon's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Where a query point lies relative to a polygon boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

impl Location {
    /// Containment verdict; boundary points count unless `strict`.
    #[inline]
    pub fn is_contained(self, strict: bool) -> bool {
        match self {
            Location::Inside => true,
            Location::Boundary => !strict,
            Location::Outside => false,
        }
    }
}

/// Ordered boundary walk over a shared vertex pool.
///
/// Invariants: none enforced. Edge order is walk order; indices may dangle
/// until a check resolves them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2<f64>>,
    pub edges: Vec<Edge>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Point2<f64>>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Cyclic ring: edge `i` joins point `i` to point `(i + 1) mod n`.
    pub fn from_ring(points: &[Point2<f64>]) -> Self {
        let n = points.len();
        let edges = (0..n).map(|i| Edge::new(i, (i + 1) % n)).collect();
        Self {
            vertices: points.to_vec(),
            edges,
        }
    }

    /// One pair of private vertices per segment; nothing is shared or merged.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut vertices = Vec::with_capacity(2 * segments.len());
        let mut edges = Vec::with_capacity(segments.len());
        for s in segments {
            edges.push(Edge::new(vertices.len(), vertices.len() + 1));
            vertices.push(s.start);
            vertices.push(s.end);
        }
        Self { vertices, edges }
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertex(&self, edge: usize, index: usize) -> Result<Point2<f64>, GeomError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(GeomError::MissingVertex {
                edge,
                index,
                count: self.vertices.len(),
            })
    }

    /// Resolve edge `i` into a segment.
    pub fn segment(&self, i: usize) -> Result<Segment, GeomError> {
        let e = self.edges.get(i).ok_or(GeomError::MissingEdge {
            index: i,
            count: self.edges.len(),
        })?;
        Ok(Segment::new(self.vertex(i, e.start)?, self.vertex(i, e.end)?))
    }

    /// Resolved segments in walk order.
    pub fn segments(&self) -> impl Iterator<Item = Result<Segment, GeomError>> + '_ {
        (0..self.edges.len()).map(move |i| self.segment(i))
    }

    /// Classify edges `i` and `j` with tolerance `eps`.
    pub fn classify_edges_eps(&self, i: usize, j: usize, eps: f64) -> Result<Intersection, GeomError> {
        let a = self.segment(i)?;
        let b = self.segment(j)?;
        Ok(classify_eps(&a, &b, eps))
    }

    /// Shorthand for `classify_edges_eps(i, j, EPSILON)`.
    #[inline]
    pub fn classify_edges(&self, i: usize, j: usize) -> Result<Intersection, GeomError> {
        self.classify_edges_eps(i, j, EPSILON)
    }

    /// Closed iff at least 3 edges and every `end_i` equals `start_{(i+1) mod n}`.
    pub fn is_closed_eps(&self, eps: f64) -> Result<bool, GeomError> {
        let n = self.edges.len();
        if n < 3 {
            return Ok(false);
        }
        for i in 0..n {
            let next = (i + 1) % n;
            let end = self.segment(i)?.end;
            let start = self.segment(next)?.start;
            if !points_equal_eps(&end, &start, eps) {
                tracing::debug!(edge = i, next, "boundary chain breaks");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Shorthand for `is_closed_eps(EPSILON)`.
    #[inline]
    pub fn is_closed(&self) -> Result<bool, GeomError> {
        self.is_closed_eps(EPSILON)
    }

    /// First pair `(i, j)`, `i < j`, whose classification has code 1.
    ///
    /// Shared vertices (code 2), overlaps (3) and duplicates (4) are not
    /// violations.
    pub fn first_violation_eps(
        &self,
        eps: f64,
    ) -> Result<Option<(usize, usize, Intersection)>, GeomError> {
        let n = self.edges.len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let hit = self.classify_edges_eps(i, j, eps)?;
                if hit.is_crossing_code() {
                    tracing::debug!(i, j, kind = ?hit, "edges cross");
                    return Ok(Some((i, j, hit)));
                }
            }
        }
        Ok(None)
    }

    /// Shorthand for `first_violation_eps(EPSILON)`.
    #[inline]
    pub fn first_violation(&self) -> Result<Option<(usize, usize, Intersection)>, GeomError> {
        self.first_violation_eps(EPSILON)
    }

    /// Simple iff at least 3 edges and no pair reports code 1.
    pub fn is_simple_eps(&self, eps: f64) -> Result<bool, GeomError> {
        if self.edges.len() < 3 {
            return Ok(false);
        }
        Ok(self.first_violation_eps(eps)?.is_none())
    }

    /// Shorthand for `is_simple_eps(EPSILON)`.
    #[inline]
    pub fn is_simple(&self) -> Result<bool, GeomError> {
        self.is_simple_eps(EPSILON)
    }

    /// Every non-disjoint pair `(i, j)`, `i < j`, with its classification.
    ///
    /// Unlike `is_simple`, this does not stop early and keeps the full
    /// breakdown (adjacency vs. overlap vs. duplicate).
    pub fn pair_report_eps(&self, eps: f64) -> Result<Vec<(usize, usize, Intersection)>, GeomError> {
        let n = self.edges.len();
        let mut out = Vec::new();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let hit = self.classify_edges_eps(i, j, eps)?;
                if !hit.is_disjoint() {
                    out.push((i, j, hit));
                }
            }
        }
        Ok(out)
    }

    /// Shorthand for `pair_report_eps(EPSILON)`.
    #[inline]
    pub fn pair_report(&self) -> Result<Vec<(usize, usize, Intersection)>, GeomError> {
        self.pair_report_eps(EPSILON)
    }

    /// Parity ray cast along +x from `p`.
    ///
    /// A point collinear with an edge and inside its span is `Boundary`, reported
    /// as soon as that edge is reached. Otherwise an edge counts when exactly one
    /// endpoint has `y >= p.y` and `p` is on the side the ray crosses from
    /// (left of upward edges, right of downward ones).
    pub fn locate_eps(&self, p: &Point2<f64>, eps: f64) -> Result<Location, GeomError> {
        let mut crossings = 0usize;
        for (i, seg) in self.segments().enumerate() {
            let seg = seg?;
            let o = orientation_eps(&seg, p, eps);
            if o == Orientation::Collinear && in_span(&seg, p) {
                tracing::trace!(edge = i, "query point on boundary");
                return Ok(Location::Boundary);
            }
            let straddle = (seg.end.y >= p.y) as i32 - (seg.start.y >= p.y) as i32;
            if straddle * o.sign() > 0 {
                crossings += 1;
            }
        }
        Ok(if crossings % 2 == 1 {
            Location::Inside
        } else {
            Location::Outside
        })
    }

    /// Shorthand for `locate_eps(p, EPSILON)`.
    #[inline]
    pub fn locate(&self, p: &Point2<f64>) -> Result<Location, GeomError> {
        self.locate_eps(p, EPSILON)
    }

    /// Containment; boundary points count as contained unless `strict`.
    pub fn contains_eps(&self, p: &Point2<f64>, strict: bool, eps: f64) -> Result<bool, GeomError> {
        Ok(self.locate_eps(p, eps)?.is_contained(strict))
    }

    /// Shorthand for `contains_eps(p, strict, EPSILON)`.
    #[inline]
    pub fn contains(&self, p: &Point2<f64>, strict: bool) -> Result<bool, GeomError> {
        self.contains_eps(p, strict, EPSILON)
    }
}
