//! Constructs 2D [Voronoi diagrams](https://en.wikipedia.org/wiki/Voronoi_diagram) over a
//! rectangular domain, optionally smooths site placement with
//! [Lloyd relaxation](https://en.wikipedia.org/wiki/Lloyd%27s_algorithm), and rasterizes the
//! result into a PNG image with one color per cell.
//!
//! # Example
//!
//! ```no_run
//! use voronoimg::{BoundingBox, Point, VoronoiBuilder, rasterize};
//!
//! let sites = vec![
//!     Point::new(0.0, 0.0), Point::new(0.5, -0.2), Point::new(-0.4, 0.3),
//! ];
//!
//! let diagram = VoronoiBuilder::default()
//!     .set_sites(sites)
//!     .set_lloyd_relaxation_iterations(1)
//!     .build()
//!     .expect("sites are distinct and the box is valid");
//!
//! rasterize(&diagram, 640, 640).save("voronoi.png").expect("image written");
//! ```

mod bounding_box;
mod cell;
mod cell_builder;
mod error;
mod point;
mod raster;
mod utils;
mod voronoi_builder;

pub use crate::bounding_box::BoundingBox;
pub use crate::cell::{HalfEdge, VoronoiCell};
pub use crate::error::Error;
pub use crate::point::Point;
pub use crate::raster::{rasterize, Color, PixelBuffer};
pub use crate::utils::{dist2, polygon_area, polygon_centroid};
pub use crate::voronoi_builder::VoronoiBuilder;

/// A Voronoi diagram: a partition of a bounding box into one convex cell per site, where
/// each cell is the region of points at least as close to its site as to any other site.
///
/// A diagram is immutable once computed. Moving sites (e.g. a Lloyd relaxation round)
/// requires a full rebuild, since relocated sites change cell topology.
pub struct Voronoi {
    /// The sites of each voronoi cell, in input order. Cell `i` is seeded by `sites[i]`.
    sites: Vec<Point>,

    /// The domain the diagram was computed and clipped within.
    bounding_box: BoundingBox,

    /// Each cell's polygon vertices, counter-clockwise, indexed by site.
    cells: Vec<Vec<Point>>,
}

impl Voronoi {
    /// Computes the diagram for the given sites and bounding box.
    ///
    /// Fails with [Error::DegenerateInput] when two sites share identical coordinates, and
    /// with [Error::EmptySites] when no sites are provided.
    pub fn new(sites: Vec<Point>, bounding_box: BoundingBox) -> Result<Self, Error> {
        let cells = cell_builder::build_cells(&sites, &bounding_box)?;

        Ok(Voronoi {
            sites,
            bounding_box,
            cells,
        })
    }

    /// Gets the sites the diagram was built from, in input order.
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    /// Gets the bounding box the diagram is clipped to.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Gets a view over the cell seeded by site index `site`.
    pub fn cell(&self, site: usize) -> VoronoiCell {
        VoronoiCell::new(site, self)
    }

    /// Walks all cells of the diagram, in site order.
    pub fn iter_cells(&self) -> impl Iterator<Item = VoronoiCell> + Clone {
        (0..self.sites.len()).map(move |s| self.cell(s))
    }

    /// Computes one round of Lloyd relaxation: the area centroid of each cell, aligned with
    /// site order. Degenerate cells (no interior) keep their original site position.
    ///
    /// The diagram itself is not modified; feed the returned points into a new build to
    /// continue relaxing. See [VoronoiBuilder::set_lloyd_relaxation_iterations] for chaining
    /// multiple rounds.
    pub fn lloyd_relaxation(&self) -> Vec<Point> {
        self.iter_cells()
            .map(|cell| cell.centroid().unwrap_or_else(|| cell.site_position().clone()))
            .collect()
    }
}
