//! Value types shared by the predicates.
//!
//! - `Segment`: directed pair of points, `start → end`.
//! - `Orientation`: sidedness of a point relative to a directed segment.

use nalgebra::{Point2, Vector2};

/// Directed segment `start → end`.
///
/// Orientation tests respect the direction; intersection classification does not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// Displacement `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// Same points, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Sidedness of a point relative to a directed segment.
///
/// Discriminants match the sign of the cross product so products of two
/// orientations can be compared against zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    /// Clockwise of the segment (negative cross product).
    Right = -1,
    Collinear = 0,
    /// Counterclockwise of the segment (positive cross product).
    Left = 1,
}

impl Orientation {
    #[inline]
    pub fn sign(self) -> i32 {
        self as i32
    }
}
