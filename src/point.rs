use std::fmt;

/// A point in 2D space.
#[derive(Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the vector from `other` to this point.
    #[inline]
    pub fn sub(&self, other: &Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Dot product with another point treated as a vector.
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The midpoint between this point and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}
