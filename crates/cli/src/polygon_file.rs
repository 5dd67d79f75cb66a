use anyhow::{Context, Result};
use geopred::{Edge, Point2, Polygon};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk polygon: a vertex pool plus optional index edges.
///
/// Without `edges`, the vertices are read as a ring (last joins first).
#[derive(Debug, Deserialize)]
pub struct PolygonFile {
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub edges: Option<Vec<[usize; 2]>>,
}

impl PolygonFile {
    pub fn into_polygon(self) -> Polygon {
        let vertices: Vec<Point2<f64>> = self
            .vertices
            .iter()
            .map(|&[x, y]| Point2::new(x, y))
            .collect();
        match self.edges {
            Some(edges) => Polygon::new(
                vertices,
                edges.iter().map(|&[s, e]| Edge::new(s, e)).collect(),
            ),
            None => Polygon::from_ring(&vertices),
        }
    }
}

/// Read and parse a polygon JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Polygon> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading polygon {}", path.display()))?;
    let file: PolygonFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing polygon JSON {}", path.display()))?;
    let poly = file.into_polygon();
    tracing::debug!(
        path = %path.display(),
        vertices = poly.vertices.len(),
        edges = poly.edge_count(),
        "polygon_loaded"
    );
    Ok(poly)
}
