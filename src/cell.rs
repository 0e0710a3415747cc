use std::fmt;
use super::Point;
use super::Voronoi;
use super::utils::{EQ_EPSILON, polygon_area, polygon_centroid};

/// One directed boundary segment of a cell's polygon.
///
/// Half-edges on the boundary between two neighboring cells are conceptually paired: the
/// neighboring cell owns a twin segment with `start` and `end` reversed. Each cell owns its
/// own copy, so no cross-cell bookkeeping is required to walk a single polygon.
#[derive(Debug, Clone)]
pub struct HalfEdge<'v> {
    /// Position where this boundary segment starts.
    pub start: &'v Point,

    /// Position where this boundary segment ends.
    pub end: &'v Point,

    /// The site index of the cell this half-edge bounds.
    pub cell: usize,
}

/// Borrow view over one cell of a [Voronoi] diagram.
///
/// The cell's region is the set of points at least as close to its site as to any other
/// site, clipped to the diagram's bounding box. Its boundary is a closed convex polygon
/// in counter-clockwise winding.
#[derive(Clone)]
pub struct VoronoiCell<'v> {
    site: usize,
    voronoi: &'v Voronoi,
}

impl<'v> VoronoiCell<'v> {
    pub(crate) fn new(site: usize, voronoi: &'v Voronoi) -> Self {
        Self {
            site,
            voronoi,
        }
    }

    /// Gets the index of the site this cell is associated with.
    pub fn site(&self) -> usize {
        self.site
    }

    /// Gets the position of the site this cell is associated with.
    pub fn site_position(&self) -> &'v Point {
        &self.voronoi.sites[self.site]
    }

    /// Walks the vertices of this cell's polygon in counter-clockwise order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &'v Point> + Clone {
        self.voronoi.cells[self.site].iter()
    }

    /// Walks the half-edges of this cell's polygon in counter-clockwise order.
    /// Each half-edge ends where the next one starts, and the last ends at the first's start.
    pub fn iter_half_edges(&self) -> impl Iterator<Item = HalfEdge<'v>> + Clone {
        let vertices: &'v [Point] = &self.voronoi.cells[self.site];
        let cell = self.site;

        vertices.iter()
            .zip(vertices.iter().cycle().skip(1))
            .take(vertices.len())
            .map(move |(start, end)| HalfEdge { start, end, cell })
    }

    /// The area of this cell's polygon.
    pub fn area(&self) -> f64 {
        polygon_area(&self.voronoi.cells[self.site])
    }

    /// The area centroid of this cell's polygon, or None when the cell is degenerate
    /// (e.g. its site lies outside the bounding box and the clipped polygon is empty).
    pub fn centroid(&self) -> Option<Point> {
        polygon_centroid(&self.voronoi.cells[self.site])
    }

    /// Returns whether `point` lies inside this cell's polygon (boundary included).
    pub fn contains(&self, point: &Point) -> bool {
        let vertices = &self.voronoi.cells[self.site];
        if vertices.len() < 3 {
            return false;
        }

        // cross product magnitude scales with the square of the domain size
        let scale = self.voronoi.bounding_box.width().max(self.voronoi.bounding_box.height());
        let eps = EQ_EPSILON * scale * scale;

        // convex counter-clockwise polygon: point must not be to the right of any edge
        vertices.iter().zip(vertices.iter().cycle().skip(1)).all(|(a, b)| {
            (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x) >= -eps
        })
    }
}

impl<'v> fmt::Debug for VoronoiCell<'v> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoronoiCell")
            .field("site", &self.site)
            .field("position", self.site_position())
            .field("vertices", &self.voronoi.cells[self.site])
            .finish()
    }
}
