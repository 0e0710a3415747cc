use thiserror::Error;

/// Failures reported by diagram construction and image persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// Two input sites have exactly identical coordinates, making their bisector ambiguous.
    /// The caller should deduplicate or perturb the sites and retry.
    #[error("sites {first} and {second} have identical coordinates {position:?}")]
    DegenerateInput {
        first: usize,
        second: usize,
        position: crate::Point,
    },

    /// The bounding box is empty or inverted (`xmin >= xmax` or `ymin >= ymax`).
    #[error("invalid bounding box: x [{xmin}, {xmax}], y [{ymin}, {ymax}]")]
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    /// A diagram needs at least one site.
    #[error("cannot build a diagram from an empty site set")]
    EmptySites,

    /// Output file could not be created or written.
    #[error("image file error: {0}")]
    Io(#[from] std::io::Error),

    /// The pixel buffer could not be encoded.
    #[error("image encoding error: {0}")]
    Encoding(#[from] image::error::ImageError),
}
