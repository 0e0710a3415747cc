use std::cmp::Ordering;
use super::{BoundingBox, Error, Point};
use super::utils::EQ_EPSILON;

/// Builds the cell polygons of a diagram by intersecting half-planes.
///
/// Each cell starts as the bounding box rectangle and is clipped against the near
/// half-plane of the perpendicular bisector to every other site. The intersection of all
/// those half-planes is exactly the set of points at least as close to the cell's site as
/// to any other site, so the result satisfies the nearest-site contract by construction.
/// Clipping a convex polygon keeps it convex and preserves its winding, so cells come out
/// closed, convex and counter-clockwise.
///
/// This is O(N) bisectors per cell with an O(E) clip each. For the few hundred sites this
/// crate targets that beats the constant factors of an event-driven sweep; very large N
/// would want a Fortune-style construction instead.
pub(crate) fn build_cells(sites: &[Point], bounding_box: &BoundingBox) -> Result<Vec<Vec<Point>>, Error> {
    if sites.is_empty() {
        return Err(Error::EmptySites);
    }

    if let Some((first, second)) = find_duplicate(sites) {
        return Err(Error::DegenerateInput {
            first,
            second,
            position: sites[first].clone(),
        });
    }

    let box_polygon = bounding_box.corners().to_vec();

    // coordinate noise from intersection arithmetic scales with the domain size
    let eps = EQ_EPSILON * bounding_box.width().max(bounding_box.height());

    let cells = sites.iter().enumerate().map(|(s, site)| {
        let mut cell = box_polygon.clone();
        let mut scratch = Vec::with_capacity(cell.len() + 1);

        for (o, other) in sites.iter().enumerate() {
            if o == s {
                continue;
            }

            clip_half_plane(&mut cell, &mut scratch, site, other, eps);

            if cell.is_empty() {
                // the site lies outside the box and its region was clipped away entirely
                break;
            }
        }

        cell
    }).collect();

    Ok(cells)
}

/// Clips `cell` against the half-plane of points at least as close to `site` as to `other`,
/// i.e. the near side of the perpendicular bisector of the two sites.
///
/// Sutherland-Hodgman: walk the polygon edges, keep vertices on the near side and replace
/// each boundary crossing with its intersection point on the bisector.
fn clip_half_plane(cell: &mut Vec<Point>, scratch: &mut Vec<Point>, site: &Point, other: &Point, eps: f64) {
    // side(p) > 0 inside the kept half-plane, == 0 exactly on the bisector
    let normal = other.sub(site);
    let midpoint = site.midpoint(other);
    let side = |p: &Point| normal.dot(&midpoint.sub(p));

    scratch.clear();

    let n = cell.len();
    for i in 0..n {
        let a = &cell[i];
        let b = &cell[(i + 1) % n];
        let side_a = side(a);
        let side_b = side(b);

        if side_a >= 0.0 {
            scratch.push(a.clone());
            if side_b < 0.0 {
                scratch.push(intersect(a, b, side_a, side_b));
            }
        } else if side_b >= 0.0 {
            scratch.push(intersect(a, b, side_a, side_b));
        }
    }

    std::mem::swap(cell, scratch);
    remove_duplicate_vertices(cell, eps);
}

/// The point where segment a -> b crosses the bisector, given the signed side values of
/// its endpoints. Callers guarantee the signs differ, so the denominator is non-zero.
fn intersect(a: &Point, b: &Point, side_a: f64, side_b: f64) -> Point {
    let t = side_a / (side_a - side_b);
    Point {
        x: a.x + t * (b.x - a.x),
        y: a.y + t * (b.y - a.y),
    }
}

/// Drops consecutive vertices that coincide within `eps`. Clipping a polygon through one
/// of its existing vertices re-emits that vertex as the crossing point.
fn remove_duplicate_vertices(cell: &mut Vec<Point>, eps: f64) {
    cell.dedup_by(|a, b| (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps);

    if cell.len() > 1 {
        let first = &cell[0];
        let last = &cell[cell.len() - 1];
        if (first.x - last.x).abs() <= eps && (first.y - last.y).abs() <= eps {
            cell.pop();
        }
    }

    if cell.len() < 3 {
        // a polygon this small has no interior left
        cell.clear();
    }
}

/// Finds a pair of sites with exactly identical coordinates, if any.
/// Returns the pair as (lower index, higher index).
fn find_duplicate(sites: &[Point]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_unstable_by(|&a, &b| compare_points(&sites[a], &sites[b]));

    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if sites[a].x == sites[b].x && sites[a].y == sites[b].y {
            return Some((a.min(b), a.max(b)));
        }
    }

    None
}

fn compare_points(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{abs_diff_eq, dist2, polygon_area};

    fn default_box() -> BoundingBox {
        BoundingBox::default()
    }

    #[test]
    fn single_site_takes_whole_box() {
        let bbox = default_box();
        let cells = build_cells(&[Point::new(0.2, -0.3)], &bbox).unwrap();

        assert_eq!(1, cells.len());
        assert_eq!(cells[0], bbox.corners().to_vec(), "A single cell must equal the four box corners");
    }

    #[test]
    fn empty_site_set_is_rejected() {
        assert!(matches!(build_cells(&[], &default_box()), Err(Error::EmptySites)));
    }

    #[test]
    fn duplicate_sites_are_rejected() {
        let sites = vec![
            Point::new(0.1, 0.1),
            Point::new(-0.4, 0.2),
            Point::new(0.1, 0.1),
        ];

        match build_cells(&sites, &default_box()) {
            Err(Error::DegenerateInput { first, second, position }) => {
                assert_eq!(0, first);
                assert_eq!(2, second);
                assert_eq!(Point::new(0.1, 0.1), position);
            },
            other => panic!("Expected DegenerateInput, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn two_sites_split_the_box_on_their_bisector() {
        let sites = vec![Point::new(-0.5, 0.0), Point::new(0.5, 0.0)];
        let cells = build_cells(&sites, &default_box()).unwrap();

        // bisector is x = 0; left cell is [-1, 0] x [-1, 1]
        assert!(abs_diff_eq(polygon_area(&cells[0]), 2.0, 1e-12), "Left cell covers half the box");
        assert!(abs_diff_eq(polygon_area(&cells[1]), 2.0, 1e-12), "Right cell covers half the box");
        assert!(cells[0].iter().all(|p| p.x <= 1e-12), "Left cell lies left of the bisector");
        assert!(cells[1].iter().all(|p| p.x >= -1e-12), "Right cell lies right of the bisector");
    }

    #[test]
    fn cells_are_clipped_to_the_box() {
        let sites = vec![
            Point::new(-0.9, -0.9),
            Point::new(0.9, 0.9),
            Point::new(0.0, 0.0),
            Point::new(-0.5, 0.7),
        ];
        let bbox = default_box();
        let cells = build_cells(&sites, &bbox).unwrap();

        for (s, cell) in cells.iter().enumerate() {
            for vertex in cell {
                assert!(bbox.is_inside(vertex), "Cell {} vertex {:?} escaped the bounding box", s, vertex);
            }
        }
    }

    #[test]
    fn cells_partition_the_box() {
        let sites = vec![
            Point::new(-0.6, -0.2),
            Point::new(0.3, 0.8),
            Point::new(0.7, -0.5),
            Point::new(-0.1, 0.1),
            Point::new(0.0, -0.9),
        ];
        let bbox = default_box();
        let cells = build_cells(&sites, &bbox).unwrap();

        let total: f64 = cells.iter().map(|c| polygon_area(c)).sum();
        assert!(
            abs_diff_eq(total, bbox.width() * bbox.height(), 1e-9),
            "Cell areas must sum to the box area, got {}", total
        );
    }

    #[test]
    fn boundary_vertices_satisfy_nearest_site_invariant() {
        let sites = vec![
            Point::new(-0.6, -0.2),
            Point::new(0.3, 0.8),
            Point::new(0.7, -0.5),
            Point::new(-0.1, 0.1),
        ];
        let cells = build_cells(&sites, &default_box()).unwrap();

        for (s, cell) in cells.iter().enumerate() {
            for vertex in cell {
                let own = dist2(vertex, &sites[s]);
                for (o, other) in sites.iter().enumerate() {
                    if o != s {
                        assert!(
                            dist2(vertex, other) >= own - 1e-9,
                            "Vertex {:?} of cell {} is closer to site {} than to its own site", vertex, s, o
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn site_outside_box_yields_empty_cell() {
        let sites = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        let cells = build_cells(&sites, &default_box()).unwrap();

        // the far site's region (x >= 2.5) does not intersect the [-1, 1] box
        assert!(cells[1].is_empty(), "Out-of-box site region must clip away entirely");
        assert!(abs_diff_eq(polygon_area(&cells[0]), 4.0, 1e-12), "Remaining cell covers the whole box");
    }
}
