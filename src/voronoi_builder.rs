use super::{BoundingBox, Error, Point, Voronoi};

/// Provides a convenient way to construct a Voronoi diagram.
#[derive(Default)]
pub struct VoronoiBuilder {
    sites: Option<Vec<Point>>,
    lloyd_iterations: usize,
    bounding_box: BoundingBox,
}

impl VoronoiBuilder {
    /// Sets the [BoundingBox] that will be used to enclose the diagram.
    pub fn set_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    /// Sets a vector of [Point]s representing the sites of each Voronoi cell that should be constructed.
    pub fn set_sites(mut self, sites: Vec<Point>) -> Self {
        self.sites.replace(sites);
        self
    }

    /// Sets the number of [Lloyd relaxation](https://en.wikipedia.org/wiki/Lloyd%27s_algorithm)
    /// rounds to run as part of the diagram generation. Each round replaces every site with
    /// its cell's area centroid and rebuilds the diagram from scratch.
    pub fn set_lloyd_relaxation_iterations(mut self, iterations: usize) -> Self {
        self.lloyd_iterations = iterations;
        self
    }

    /// Consumes this builder and generates a Voronoi diagram.
    ///
    /// Fails with [Error::EmptySites] when no sites were provided and with
    /// [Error::DegenerateInput] when two sites coincide.
    pub fn build(mut self) -> Result<Voronoi, Error> {
        let sites = self.sites.take().unwrap_or_default();
        let mut v = Voronoi::new(sites, self.bounding_box.clone())?;

        for _ in 0..self.lloyd_iterations {
            // relocated sites change cell topology; each round is a full rebuild
            let new_sites = v.lloyd_relaxation();
            v = Voronoi::new(new_sites, self.bounding_box.clone())?;
        }

        Ok(v)
    }

    /// Generates sites on a `width` by `height` grid at the centers of a uniform subdivision
    /// of the current bounding box. Internally calls [Self::set_sites] with the generated value.
    ///
    /// Set the bounding box before calling this.
    pub fn generate_rect_sites(self, width: usize, height: usize) -> Self {
        let cell_width = self.bounding_box.width() / width as f64;
        let cell_height = self.bounding_box.height() / height as f64;
        let xmin = self.bounding_box.xmin();
        let ymin = self.bounding_box.ymin();

        let mut sites = Vec::with_capacity(width * height);
        for i in 0..width {
            for j in 0..height {
                sites.push(Point {
                    x: xmin + (i as f64 + 0.5) * cell_width,
                    y: ymin + (j as f64 + 0.5) * cell_height,
                });
            }
        }

        self.set_sites(sites)
    }

    /// Generates sites on a square `width` by `width` grid.
    /// Internally calls [Self::set_sites] with the generated value.
    pub fn generate_square_sites(self, width: usize) -> Self {
        self.generate_rect_sites(width, width)
    }
}

impl From<&Voronoi> for VoronoiBuilder {
    /// Creates a builder with the same configuration that produced the original voronoi.
    /// Useful for performing Lloyd relaxation or regenerating an identical diagram.
    fn from(v: &Voronoi) -> Self {
        Self {
            sites: Some(v.sites().to_vec()),
            lloyd_iterations: 0,
            bounding_box: v.bounding_box().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{abs_diff_eq, dist2};

    #[test]
    fn build_without_sites_fails() {
        assert!(matches!(VoronoiBuilder::default().build(), Err(Error::EmptySites)));
    }

    #[test]
    fn lloyd_relaxation_is_idempotent_on_centered_grid() {
        // a uniform grid at subdivision centers is already centroidal: every cell is a
        // rectangle whose centroid is its own site, so one more round must be a no-op
        let original = VoronoiBuilder::default()
            .generate_square_sites(4)
            .build()
            .unwrap();

        let relaxed = VoronoiBuilder::default()
            .generate_square_sites(4)
            .set_lloyd_relaxation_iterations(1)
            .build()
            .unwrap();

        for (before, after) in original.sites().iter().zip(relaxed.sites()) {
            assert!(
                abs_diff_eq(before.x, after.x, 1e-9) && abs_diff_eq(before.y, after.y, 1e-9),
                "Site {:?} moved to {:?} under relaxation of a centroidal grid", before, after
            );
        }
    }

    #[test]
    fn relaxation_rounds_match_manual_chaining() {
        let sites = vec![
            Point::new(-0.8, -0.7),
            Point::new(0.1, 0.9),
            Point::new(0.6, -0.4),
            Point::new(-0.2, 0.3),
        ];

        let built = VoronoiBuilder::default()
            .set_sites(sites.clone())
            .set_lloyd_relaxation_iterations(2)
            .build()
            .unwrap();

        let mut manual = VoronoiBuilder::default().set_sites(sites).build().unwrap();
        for _ in 0..2 {
            manual = Voronoi::new(manual.lloyd_relaxation(), manual.bounding_box().clone()).unwrap();
        }

        assert_eq!(manual.sites(), built.sites(), "Builder rounds must equal manually chained rebuilds");
    }

    #[test]
    fn relaxation_moves_sites_toward_centroids() {
        let sites = vec![
            Point::new(-0.95, -0.95),
            Point::new(-0.9, -0.85),
            Point::new(0.9, 0.95),
        ];

        let v = VoronoiBuilder::default().set_sites(sites).build().unwrap();
        let relaxed = v.lloyd_relaxation();

        // clustered sites spread out: each site moves to its cell centroid
        for (cell, new_site) in v.iter_cells().zip(relaxed.iter()) {
            let centroid = cell.centroid().unwrap();
            assert!(
                dist2(new_site, &centroid) < 1e-18,
                "Relaxed site {:?} is not the centroid {:?}", new_site, centroid
            );
        }
    }

    #[test]
    fn builder_from_voronoi_rebuilds_identical_diagram() {
        let v = VoronoiBuilder::default()
            .set_sites(vec![Point::new(-0.5, 0.1), Point::new(0.4, -0.3), Point::new(0.0, 0.8)])
            .build()
            .unwrap();

        let rebuilt = VoronoiBuilder::from(&v).build().unwrap();
        assert_eq!(v.sites(), rebuilt.sites());

        for (a, b) in v.iter_cells().zip(rebuilt.iter_cells()) {
            let va: Vec<Point> = a.iter_vertices().cloned().collect();
            let vb: Vec<Point> = b.iter_vertices().cloned().collect();
            assert_eq!(va, vb, "Rebuilt cell {} differs", a.site());
        }
    }
}
