//! Closed-ring geometry and shoelace section properties

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A closed planar ring. The closing edge from the last vertex back to the
/// first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub points: Vec<Point2<f64>>,
}

impl Ring {
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    /// Drops consecutive exactly-equal points, including a duplicated
    /// closing point.
    pub fn collapse_duplicates(&mut self) {
        self.points.dedup_by(|a, b| a == b);
        while self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
    }

    /// Signed shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            sum += p.x * q.y - q.x * p.y;
        }
        sum * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Shoelace centroid.
    pub fn centroid(&self) -> Point2<f64> {
        let n = self.points.len();
        let a = self.signed_area();
        if n == 0 || a.abs() < f64::EPSILON {
            // Degenerate ring: fall back to the vertex average.
            let mut cx = 0.0;
            let mut cy = 0.0;
            for p in &self.points {
                cx += p.x;
                cy += p.y;
            }
            let count = n.max(1) as f64;
            return Point2::new(cx / count, cy / count);
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let cross = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        Point2::new(cx / (6.0 * a), cy / (6.0 * a))
    }

    /// Axis-aligned bounding box as (minx, miny, maxx, maxy).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut minx = f64::INFINITY;
        let mut miny = f64::INFINITY;
        let mut maxx = f64::NEG_INFINITY;
        let mut maxy = f64::NEG_INFINITY;
        for p in &self.points {
            minx = minx.min(p.x);
            miny = miny.min(p.y);
            maxx = maxx.max(p.x);
            maxy = maxy.max(p.y);
        }
        (minx, miny, maxx, maxy)
    }

    /// Ray-cast point-in-polygon test. Points on an edge count as outside,
    /// which is what the strict-containment classification wants.
    pub fn contains_point(&self, pt: &Point2<f64>) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if on_segment(&pi, &pj, pt) {
                return false;
            }
            if (pi.y > pt.y) != (pj.y > pt.y) {
                let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
                if pt.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Strict containment: every vertex of `other` lies strictly inside
    /// this ring.
    pub fn contains_ring(&self, other: &Ring) -> bool {
        let (minx, miny, maxx, maxy) = self.bounds();
        let (ominx, ominy, omaxx, omaxy) = other.bounds();
        if ominx < minx || ominy < miny || omaxx > maxx || omaxy > maxy {
            return false;
        }
        other.points.iter().all(|p| self.contains_point(p))
    }

    /// True when any two non-adjacent edges properly intersect.
    pub fn is_self_intersecting(&self) -> bool {
        let n = self.points.len();
        if n < 4 {
            return false;
        }
        for i in 0..n {
            let a1 = self.points[i];
            let a2 = self.points[(i + 1) % n];
            for j in (i + 1)..n {
                // Skip the shared-vertex neighbours of edge i.
                if j == i || (j + 1) % n == i || (i + 1) % n == j {
                    continue;
                }
                let b1 = self.points[j];
                let b2 = self.points[(j + 1) % n];
                if segments_properly_intersect(&a1, &a2, &b1, &b2) {
                    return true;
                }
            }
        }
        false
    }

    /// A ring is degenerate when it has fewer than three vertices or
    /// (numerically) zero area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3 || self.area() < 1e-12
    }
}

fn cross(o: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn on_segment(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> bool {
    if cross(a, b, p).abs() > 1e-12 {
        return false;
    }
    p.x >= a.x.min(b.x) - 1e-12
        && p.x <= a.x.max(b.x) + 1e-12
        && p.y >= a.y.min(b.y) - 1e-12
        && p.y <= a.y.max(b.y) + 1e-12
}

fn segments_properly_intersect(
    a1: &Point2<f64>,
    a2: &Point2<f64>,
    b1: &Point2<f64>,
    b2: &Point2<f64>,
) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Aggregated section properties in meters, about centroidal axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area in m²
    pub area: f64,
    /// Bounding-box width in m
    pub width: f64,
    /// Bounding-box height in m
    pub height: f64,
    /// Centroid x in m
    pub cx: f64,
    /// Centroid y in m
    pub cy: f64,
    /// Moment of inertia about the centroidal x axis in m⁴
    pub ixx: f64,
    /// Moment of inertia about the centroidal y axis in m⁴
    pub iyy: f64,
    /// Product of inertia in m⁴
    pub ixy: f64,
    /// Polar moment, Ixx + Iyy, in m⁴
    pub j: f64,
    /// Approximated shear area along x in m²
    pub asx: f64,
    /// Approximated shear area along y in m²
    pub asy: f64,
}

/// Shoelace inertia accumulators over one ring, about the given origin.
/// Returns (ixx, iyy, ixy) already divided by 12/12/24.
fn ring_inertia(ring: &Ring, origin: &Point2<f64>) -> (f64, f64, f64) {
    let n = ring.points.len();
    let mut ixx = 0.0;
    let mut iyy = 0.0;
    let mut ixy = 0.0;
    for i in 0..n {
        let p = ring.points[i];
        let q = ring.points[(i + 1) % n];
        let (x0, y0) = (p.x - origin.x, p.y - origin.y);
        let (x1, y1) = (q.x - origin.x, q.y - origin.y);
        let cross = x0 * y1 - x1 * y0;
        ixx += (y0 * y0 + y0 * y1 + y1 * y1) * cross;
        iyy += (x0 * x0 + x0 * x1 + x1 * x1) * cross;
        ixy += (x0 * y1 + 2.0 * x0 * y0 + 2.0 * x1 * y1 + x1 * y0) * cross;
    }
    (ixx.abs() / 12.0, iyy.abs() / 12.0, ixy.abs() / 24.0)
}

/// Computes aggregated section properties for an outer ring with holes.
///
/// With `deduct_holes = false` the holes are ignored and every figure comes
/// from the outer ring alone. That matches the long-standing behavior of
/// the drawing importer this pipeline replaces, which is wrong for sections
/// with significant holes; pass `deduct_holes = true` to subtract the hole
/// rings' area and inertia contributions about the net centroid.
pub fn section_properties(outer: &Ring, holes: &[Ring], deduct_holes: bool) -> SectionProperties {
    let (minx, miny, maxx, maxy) = outer.bounds();
    let width = maxx - minx;
    let height = maxy - miny;

    let outer_area = outer.area();
    let outer_c = outer.centroid();

    let (area, c) = if deduct_holes {
        let hole_area: f64 = holes.iter().map(Ring::area).sum();
        let net = outer_area - hole_area;
        if net.abs() < 1e-12 {
            (outer_area, outer_c)
        } else {
            let mut cx = outer_area * outer_c.x;
            let mut cy = outer_area * outer_c.y;
            for h in holes {
                let hc = h.centroid();
                let ha = h.area();
                cx -= ha * hc.x;
                cy -= ha * hc.y;
            }
            (net, Point2::new(cx / net, cy / net))
        }
    } else {
        (outer_area, outer_c)
    };

    let (mut ixx, mut iyy, mut ixy) = ring_inertia(outer, &c);
    if deduct_holes {
        for h in holes {
            let (hx, hy, hxy) = ring_inertia(h, &c);
            ixx -= hx;
            iyy -= hy;
            ixy -= hxy;
        }
    }

    let j = ixx + iyy;
    let half_h = height / 2.0;
    let half_w = width / 2.0;
    let asx = if area > 0.0 && half_h > 0.0 {
        area / (1.0 + ixx / (area * half_h * half_h))
    } else {
        0.0
    };
    let asy = if area > 0.0 && half_w > 0.0 {
        area / (1.0 + iyy / (area * half_w * half_w))
    } else {
        0.0
    };

    SectionProperties {
        area,
        width,
        height,
        cx: c.x,
        cy: c.y,
        ixx,
        iyy,
        ixy,
        j,
        asx,
        asy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Ring {
        Ring::new(vec![
            Point2::new(x0, y0),
            Point2::new(x0 + w, y0),
            Point2::new(x0 + w, y0 + h),
            Point2::new(x0, y0 + h),
        ])
    }

    #[test]
    fn test_rectangle_area_and_centroid() {
        let r = rect(0.0, 0.0, 2.0, 1.0);
        assert_relative_eq!(r.area(), 2.0);
        let c = r.centroid();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.5);
    }

    #[test]
    fn test_rectangle_inertia_matches_closed_form() {
        // b*h^3/12 about the centroid
        let r = rect(3.0, -1.0, 2.0, 1.0);
        let props = section_properties(&r, &[], false);
        assert_relative_eq!(props.ixx, 2.0 * 1.0_f64.powi(3) / 12.0, epsilon = 1e-12);
        assert_relative_eq!(props.iyy, 1.0 * 2.0_f64.powi(3) / 12.0, epsilon = 1e-12);
        assert_relative_eq!(props.ixy, 0.0, epsilon = 1e-9);
        assert_relative_eq!(props.j, props.ixx + props.iyy);
    }

    #[test]
    fn test_shear_area_formula() {
        let r = rect(0.0, 0.0, 2.0, 1.0);
        let p = section_properties(&r, &[], false);
        let expect_asx = p.area / (1.0 + p.ixx / (p.area * 0.25));
        assert_relative_eq!(p.asx, expect_asx);
    }

    #[test]
    fn test_hole_deduction() {
        let outer = rect(0.0, 0.0, 2.0, 2.0);
        let hole = rect(0.5, 0.5, 1.0, 1.0);
        let ignored = section_properties(&outer, &[hole.clone()], false);
        assert_relative_eq!(ignored.area, 4.0);
        let deducted = section_properties(&outer, &[hole], true);
        assert_relative_eq!(deducted.area, 3.0);
        assert!(deducted.ixx < ignored.ixx);
    }

    #[test]
    fn test_containment() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(2.0, 2.0, 3.0, 3.0);
        let outside = rect(20.0, 0.0, 1.0, 1.0);
        assert!(outer.contains_ring(&inner));
        assert!(!inner.contains_ring(&outer));
        assert!(!outer.contains_ring(&outside));
    }

    #[test]
    fn test_self_intersection() {
        let bowtie = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        assert!(bowtie.is_self_intersecting());
        assert!(!rect(0.0, 0.0, 1.0, 1.0).is_self_intersecting());
    }

    #[test]
    fn test_collapse_duplicates() {
        let mut r = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ]);
        r.collapse_duplicates();
        assert_eq!(r.points.len(), 3);
    }
}
