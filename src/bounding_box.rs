use super::{Error, Point};

/// Defines the rectangular domain a diagram is computed and clipped within.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    /// The bottom left corner of the rectangle.
    min: Point,

    /// The top right corner of the rectangle.
    max: Point,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new_centered_square(2.0) // square from [-1, 1] on xy
    }
}

impl BoundingBox {
    /// Constructs a new bounding box from its four scalar bounds.
    ///
    /// Fails with [Error::InvalidBounds] when the box is empty or inverted
    /// (`xmin >= xmax` or `ymin >= ymax`).
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, Error> {
        if !(xmin < xmax) || !(ymin < ymax) {
            return Err(Error::InvalidBounds { xmin, xmax, ymin, ymax });
        }

        Ok(Self {
            min: Point { x: xmin, y: ymin },
            max: Point { x: xmax, y: ymax },
        })
    }

    /// Constructs a new bounding box centered at origin with the provided width and height.
    pub fn new_centered(width: f64, height: f64) -> Self {
        Self {
            min: Point { x: -width / 2.0, y: -height / 2.0 },
            max: Point { x: width / 2.0, y: height / 2.0 },
        }
    }

    /// Constructs a new square bounding box centered at origin with the provided width.
    pub fn new_centered_square(width: f64) -> Self {
        Self::new_centered(width, width)
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// Gets the width of the bounding box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounding box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the position of the box's center.
    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    /// The four corners of the box in counter-clockwise order, starting at the bottom left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point { x: self.min.x, y: self.min.y },
            Point { x: self.max.x, y: self.min.y },
            Point { x: self.max.x, y: self.max.y },
            Point { x: self.min.x, y: self.max.y },
        ]
    }

    /// Returns whether a given point is inside (or on the edges) of the bounding box.
    #[inline]
    pub fn is_inside(&self, point: &Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Same as inside, but returns false if point is on the box edge.
    #[inline]
    pub fn is_exclusively_inside(&self, point: &Point) -> bool {
        point.x > self.min.x && point.x < self.max.x
            && point.y > self.min.y && point.y < self.max.y
    }
}
