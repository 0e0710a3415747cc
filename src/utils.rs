use super::Point;

pub(crate) const EQ_EPSILON: f64 = 4. * std::f64::EPSILON;

/// Calculates the squared distance between a and b
#[inline]
pub fn dist2(a: &Point, b: &Point) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    (x * x) + (y * y)
}

#[inline]
pub fn abs_diff_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (if a > b {
        a - b
    } else {
        b - a
    }) <= epsilon
}

/// Signed area of a simple polygon. Positive when vertices are ordered counter-clockwise.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    vertices.iter().zip(vertices.iter().cycle().skip(1)).fold(0.0, |acc, (a, b)| {
        acc + (a.x * b.y - b.x * a.y)
    }) / 2.0
}

/// Area centroid of a simple polygon, or None when the polygon is degenerate
/// (fewer than 3 vertices, or near-zero area).
pub fn polygon_centroid(vertices: &[Point]) -> Option<Point> {
    if vertices.len() < 3 {
        return None;
    }

    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for (a, b) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
        let cross = a.x * b.y - b.x * a.y;
        area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }

    area /= 2.0;
    if area.abs() <= EQ_EPSILON {
        return None;
    }

    Some(Point { x: cx / (6.0 * area), y: cy / (6.0 * area) })
}

/// Index of the site closest to `point` under squared Euclidean distance.
/// Ties resolve to the lowest index. Sites must be non-empty.
pub fn nearest_site(sites: &[Point], point: &Point) -> usize {
    let mut min = f64::MAX;
    let mut nearest = 0;
    for (s, site) in sites.iter().enumerate() {
        let d = dist2(site, point);
        if d < min {
            min = d;
            nearest = s;
        }
    }

    nearest
}
