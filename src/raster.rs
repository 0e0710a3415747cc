use std::fs::File;
use std::path::Path;

use image::ColorType;
use image::png::PngEncoder;
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;
use rayon::prelude::*;

use super::{Error, Point, Voronoi};
use super::utils::nearest_site;

/// RGB color of one pixel.
pub type Color = [u8; 3];

const MARKER_COLOR: Color = [0, 0, 0];

/// Half the side length of the square marker drawn over each site.
const MARKER_HALF_SIZE: i64 = 2;

/// A finished raster of a diagram: a row-major grid of RGB pixels.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Gets the color of pixel (x, y). Row 0 is the top of the image.
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Encodes this buffer as a PNG file at `path`.
    ///
    /// Fails with [Error::Io] when the file cannot be created and with [Error::Encoding]
    /// when the codec rejects the buffer. Failure leaves no partial in-memory state; the
    /// buffer remains usable.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;

        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(pixel);
        }

        PngEncoder::new(file).encode(&bytes, self.width as u32, self.height as u32, ColorType::Rgb8)?;
        Ok(())
    }
}

/// Rasterizes a diagram onto a `width` by `height` pixel grid.
///
/// Pixel centers are mapped onto the diagram's bounding box (row 0 maps to `ymin`) and each
/// pixel takes the color of the cell that owns its center. Rows render in parallel. A small
/// black marker is drawn over each site's position afterwards, on top of the cell coloring.
///
/// Cell colors derive deterministically from the site index, so the same index always gets
/// the same color across runs and relaxation rounds.
///
/// Zero-size dimensions yield an empty buffer.
pub fn rasterize(voronoi: &Voronoi, width: usize, height: usize) -> PixelBuffer {
    if width == 0 || height == 0 {
        return PixelBuffer { width, height, pixels: vec![] };
    }

    let colors: Vec<Color> = (0..voronoi.sites().len()).map(site_color).collect();

    let bbox = voronoi.bounding_box();
    let x_scale = bbox.width() / width as f64;
    let y_scale = bbox.height() / height as f64;
    let xmin = bbox.xmin();
    let ymin = bbox.ymin();

    let mut pixels = vec![MARKER_COLOR; width * height];

    pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let py = ymin + (y as f64 + 0.5) * y_scale;

        // consecutive pixel centers usually stay within the same convex cell, so test the
        // last matched polygon before falling back to a full nearest-site scan
        let mut current = 0;
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = Point { x: xmin + (x as f64 + 0.5) * x_scale, y: py };
            if !voronoi.cell(current).contains(&p) {
                current = nearest_site(voronoi.sites(), &p);
            }

            *pixel = colors[current];
        }
    });

    let mut buffer = PixelBuffer { width, height, pixels };
    draw_site_markers(&mut buffer, voronoi, x_scale, y_scale);

    buffer
}

/// Derives a stable color from a site index.
fn site_color(site: usize) -> Color {
    let mut rng = SmallRng::seed_from_u64(site as u64);
    [rng.gen(), rng.gen(), rng.gen()]
}

/// Marks each site with a small filled square, clamped to the image bounds.
fn draw_site_markers(buffer: &mut PixelBuffer, voronoi: &Voronoi, x_scale: f64, y_scale: f64) {
    let bbox = voronoi.bounding_box();
    let width = buffer.width as i64;
    let height = buffer.height as i64;

    for site in voronoi.sites() {
        let sx = ((site.x - bbox.xmin()) / x_scale).floor() as i64;
        let sy = ((site.y - bbox.ymin()) / y_scale).floor() as i64;

        for y in (sy - MARKER_HALF_SIZE).max(0)..(sy + MARKER_HALF_SIZE).min(height) {
            for x in (sx - MARKER_HALF_SIZE).max(0)..(sx + MARKER_HALF_SIZE).min(width) {
                buffer.pixels[y as usize * buffer.width + x as usize] = MARKER_COLOR;
            }
        }
    }
}
