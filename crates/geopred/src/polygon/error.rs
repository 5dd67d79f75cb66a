use std::fmt;

/// Invalid input: a polygon refers to an edge or vertex that does not exist.
///
/// This is the only failure mode of the polygon checks; it is reported before
/// any coordinates of the affected edge are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Edge index outside the polygon's edge list.
    MissingEdge { index: usize, count: usize },
    /// Edge `edge` references a vertex outside the vertex pool.
    MissingVertex {
        edge: usize,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::MissingEdge { index, count } => {
                write!(f, "edge {} does not exist (polygon has {} edges)", index, count)
            }
            GeomError::MissingVertex { edge, index, count } => write!(
                f,
                "edge {} references vertex {} but only {} vertices exist",
                edge, index, count
            ),
        }
    }
}

impl std::error::Error for GeomError {}
