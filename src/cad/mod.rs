//! CAD section-geometry pipeline
//!
//! Reads a 2D drawing, reduces its entities to closed rings, classifies
//! outer versus inner (hole) rings, and computes the aggregated section
//! properties that feed the frame-section definition facade. Internal
//! processing is in meters; the drawing declares its own unit.
//!
//! Extraction rules, preserved from the drawing importer this replaces:
//! * polylines explode into line and bulge-arc segments; appended points
//!   within 0.01 mm of the previous point collapse to one vertex;
//! * standalone arcs discretize into 40 angular steps, wrapping the end
//!   angle by a full turn when it precedes the start angle (reverse-sense
//!   arcs are not detected);
//! * standalone lines never close a region and are ignored;
//! * every surviving chain is treated as implicitly closed; degenerate or
//!   self-intersecting rings are dropped with a warning.
//!
//! By default the computed properties come from the outer ring alone;
//! hole contributions are *not* subtracted, matching the source importer.
//! See [`SectionReader::deduct_holes`] for the corrected variant.

pub mod dxf;
mod polygon;

use std::f64::consts::{PI, TAU};
use std::path::Path;
use std::str::FromStr;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{SapError, SapResult};
use dxf::{Entity, PolyVertex};
pub use polygon::{section_properties, Ring, SectionProperties};

/// Appended points closer than this (in meters: 0.01 mm) collapse into the
/// previously appended point.
const MERGE_TOL_M: f64 = 1e-5;

/// Angular sample steps for a standalone arc entity.
const ARC_STEPS: usize = 40;

/// Declared unit of a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingUnit {
    Mm,
    Cm,
    M,
}

impl DrawingUnit {
    /// Meters per drawing unit.
    pub fn to_meters(self) -> f64 {
        match self {
            DrawingUnit::Mm => 0.001,
            DrawingUnit::Cm => 0.01,
            DrawingUnit::M => 1.0,
        }
    }
}

impl FromStr for DrawingUnit {
    type Err = SapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(DrawingUnit::Mm),
            "cm" => Ok(DrawingUnit::Cm),
            "m" => Ok(DrawingUnit::M),
            other => Err(SapError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// The pipeline's output: one outer ring, its holes, and the aggregated
/// section properties, all in meters.
#[derive(Debug, Clone)]
pub struct SectionGeometry {
    pub outer: Ring,
    pub inners: Vec<Ring>,
    pub properties: SectionProperties,
}

impl SectionGeometry {
    /// Serializes the properties record to JSON.
    pub fn properties_json(&self) -> SapResult<String> {
        Ok(serde_json::to_string_pretty(&self.properties)?)
    }
}

/// Drawing-to-section reader.
#[derive(Debug, Clone, Copy)]
pub struct SectionReader {
    unit: DrawingUnit,
    deduct_holes: bool,
}

impl SectionReader {
    pub fn new(unit: DrawingUnit) -> Self {
        Self {
            unit,
            deduct_holes: false,
        }
    }

    /// Subtract hole rings from the computed properties instead of
    /// reproducing the source importer's outer-ring-only figures.
    pub fn deduct_holes(mut self, yes: bool) -> Self {
        self.deduct_holes = yes;
        self
    }

    /// Runs the pipeline over a drawing file.
    pub fn read_file(&self, path: &Path) -> SapResult<SectionGeometry> {
        self.assemble(dxf::read_entities(path)?)
    }

    /// Runs the pipeline over in-memory drawing text.
    pub fn read_str(&self, text: &str) -> SapResult<SectionGeometry> {
        self.assemble(dxf::parse_entities(text)?)
    }

    fn assemble(&self, entities: Vec<Entity>) -> SapResult<SectionGeometry> {
        let scale = self.unit.to_meters();
        let tol = MERGE_TOL_M / scale;

        // One candidate chain per region-forming entity, in drawing units.
        let mut chains: Vec<Vec<Point2<f64>>> = Vec::new();
        for entity in &entities {
            match entity {
                Entity::Line { .. } => {
                    // A lone segment cannot close a region.
                    log::debug!("ignoring standalone line for section extraction");
                }
                Entity::Arc {
                    cx,
                    cy,
                    radius,
                    start_deg,
                    end_deg,
                } => {
                    let mut chain = Vec::new();
                    for p in discretize_arc(*cx, *cy, *radius, *start_deg, *end_deg, ARC_STEPS) {
                        append_point(&mut chain, p, tol);
                    }
                    chains.push(chain);
                }
                Entity::Polyline { vertices, .. } => {
                    chains.push(explode_polyline(vertices, tol));
                }
            }
        }

        // Unit conversion, closure, validity filtering.
        let mut rings: Vec<Ring> = Vec::new();
        for chain in chains {
            let mut ring = Ring::new(
                chain
                    .into_iter()
                    .map(|p| Point2::new(p.x * scale, p.y * scale))
                    .collect(),
            );
            ring.collapse_duplicates();
            if ring.is_degenerate() {
                log::warn!("dropping degenerate region with {} points", ring.points.len());
                continue;
            }
            if ring.is_self_intersecting() {
                log::warn!("dropping self-intersecting region");
                continue;
            }
            rings.push(ring);
        }

        if rings.is_empty() {
            return Err(SapError::InvalidPolygon(
                "drawing contains no closed region".into(),
            ));
        }

        // Inner = strictly contained in any other ring. Nested holes are not
        // distinguished further; a ring inside a hole still counts as inner.
        let mut is_inner = vec![false; rings.len()];
        for i in 0..rings.len() {
            for j in 0..rings.len() {
                if i != j && rings[j].contains_ring(&rings[i]) {
                    is_inner[i] = true;
                    break;
                }
            }
        }

        let mut outers: Vec<Ring> = Vec::new();
        let mut inners: Vec<Ring> = Vec::new();
        for (ring, inner) in rings.into_iter().zip(is_inner) {
            if inner {
                inners.push(ring);
            } else {
                outers.push(ring);
            }
        }

        if outers.len() > 1 {
            log::warn!(
                "drawing contains {} outer regions; keeping the largest",
                outers.len()
            );
        }
        let outer = outers
            .into_iter()
            .max_by(|a, b| a.area().total_cmp(&b.area()))
            .ok_or_else(|| {
                SapError::InvalidPolygon("no outer region found in drawing".into())
            })?;

        // Only holes of the chosen outer belong to the section.
        let inners: Vec<Ring> = inners
            .into_iter()
            .filter(|r| outer.contains_ring(r))
            .collect();

        let properties = section_properties(&outer, &inners, self.deduct_holes);
        Ok(SectionGeometry {
            outer,
            inners,
            properties,
        })
    }
}

/// Convenience wrapper: read `path` declared in `unit` with source-faithful
/// (outer-ring-only) property computation.
pub fn section_from_file(path: &Path, unit: DrawingUnit) -> SapResult<SectionGeometry> {
    SectionReader::new(unit).read_file(path)
}

/// Appends `p`, collapsing it into the last appended point when closer
/// than `tol`.
fn append_point(chain: &mut Vec<Point2<f64>>, p: Point2<f64>, tol: f64) {
    if let Some(last) = chain.last() {
        if (p - last).norm() <= tol {
            return;
        }
    }
    chain.push(p);
}

/// Samples an arc evenly in angle into `steps` intervals (`steps + 1`
/// points). When the end angle precedes the start angle a full turn is
/// added; reverse-sense arcs are not detected.
pub fn discretize_arc(
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    steps: usize,
) -> Vec<Point2<f64>> {
    let start = start_deg.to_radians();
    let mut end = end_deg.to_radians();
    if start > end {
        end += TAU;
    }
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = start + (end - start) * (i as f64) / (steps as f64);
            Point2::new(cx + radius * t.cos(), cy + radius * t.sin())
        })
        .collect()
}

/// Expands a bulge segment from `p1` to `p2` into arc sample points in
/// roughly one-degree increments (endpoints included).
pub fn expand_bulge(p1: Point2<f64>, p2: Point2<f64>, bulge: f64) -> Vec<Point2<f64>> {
    let sweep = 4.0 * bulge.atan();
    let chord = (p2 - p1).norm();
    if chord < f64::EPSILON || sweep.abs() < f64::EPSILON {
        return vec![p1, p2];
    }
    let radius = chord / (2.0 * (sweep / 2.0).sin().abs());

    // Center: from the chord midpoint, along the chord normal, at the
    // apothem distance. Sign follows the bulge sense (positive = CCW).
    let mid = nalgebra::center(&p1, &p2);
    let apothem = (radius * radius - (chord / 2.0) * (chord / 2.0)).max(0.0).sqrt();
    let dir = (p2 - p1) / chord;
    let normal = nalgebra::Vector2::new(-dir.y, dir.x);
    let center = if sweep.abs() <= PI {
        mid + normal * apothem * sweep.signum()
    } else {
        mid - normal * apothem * sweep.signum()
    };

    let start = (p1.y - center.y).atan2(p1.x - center.x);
    let end = start + sweep;
    let steps = ((sweep.abs()) / (PI / 180.0)).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let t = start + (end - start) * (i as f64) / (steps as f64);
            Point2::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

/// Explodes a polyline's vertices into a point chain, expanding bulge
/// segments and applying the merge tolerance.
fn explode_polyline(vertices: &[PolyVertex], tol: f64) -> Vec<Point2<f64>> {
    let mut chain = Vec::new();
    let n = vertices.len();
    for i in 0..n {
        let v = vertices[i];
        let p = Point2::new(v.x, v.y);
        if v.bulge.abs() < f64::EPSILON {
            append_point(&mut chain, p, tol);
        } else {
            // Bulge curves toward the next vertex (wrapping to the first).
            let w = vertices[(i + 1) % n];
            let q = Point2::new(w.x, w.y);
            for s in expand_bulge(p, q, v.bulge) {
                append_point(&mut chain, s, tol);
            }
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("mm".parse::<DrawingUnit>().unwrap(), DrawingUnit::Mm);
        assert_eq!("m".parse::<DrawingUnit>().unwrap().to_meters(), 1.0);
        let err = "in".parse::<DrawingUnit>().unwrap_err();
        assert!(matches!(err, SapError::UnsupportedUnit(_)));
    }

    #[test]
    fn test_discretize_semicircle() {
        let pts = discretize_arc(0.0, 0.0, 2.0, 0.0, 180.0, 40);
        assert!(pts.len() >= 40);
        assert_relative_eq!(pts[0].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(pts.last().unwrap().x, -2.0, epsilon = 1e-12);
        // Max chord error for step pi/40.
        let max_err = 2.0 * (1.0 - (PI / 40.0).cos());
        for w in pts.windows(2) {
            let mid = nalgebra::center(&w[0], &w[1]);
            let sagitta = 2.0 - (mid.x * mid.x + mid.y * mid.y).sqrt();
            assert!(sagitta <= max_err + 1e-12);
        }
    }

    #[test]
    fn test_discretize_wraps_when_start_exceeds_end() {
        // 350 deg to 10 deg crosses zero: a 20-degree arc, not -340.
        let pts = discretize_arc(0.0, 0.0, 1.0, 350.0, 10.0, 40);
        let first = pts[0];
        let last = *pts.last().unwrap();
        assert_relative_eq!(first.y, (350.0_f64).to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(last.y, (10.0_f64).to_radians().sin(), epsilon = 1e-12);
        assert_eq!(pts.len(), 41);
    }

    #[test]
    fn test_expand_bulge_semicircle() {
        // bulge = 1 is a semicircle; chord 2 -> radius 1.
        let pts = expand_bulge(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0), 1.0);
        assert!(pts.len() >= 180);
        for p in &pts {
            let r = ((p.x) * (p.x) + (p.y) * (p.y)).sqrt();
            assert_relative_eq!(r, 1.0, epsilon = 1e-9);
        }
        // CCW semicircle from (-1,0) to (1,0) dips below the x axis.
        let mid = pts[pts.len() / 2];
        assert!(mid.y < 0.0);
    }

    #[test]
    fn test_merge_tolerance_collapses_near_points() {
        let mut chain = Vec::new();
        append_point(&mut chain, Point2::new(0.0, 0.0), 0.01);
        append_point(&mut chain, Point2::new(0.005, 0.0), 0.01);
        append_point(&mut chain, Point2::new(1.0, 0.0), 0.01);
        assert_eq!(chain.len(), 2);
    }

    fn rect_dxf(w: f64, h: f64) -> String {
        format!(
            "0\nSECTION\n2\nENTITIES\n0\nLWPOLYLINE\n90\n4\n70\n1\n\
             10\n0.0\n20\n0.0\n10\n{w}\n20\n0.0\n10\n{w}\n20\n{h}\n10\n0.0\n20\n{h}\n\
             0\nENDSEC\n0\nEOF\n"
        )
    }

    #[test]
    fn test_rectangle_in_cm() {
        // 200 x 100 cm -> 2.0 x 1.0 m.
        let geom = SectionReader::new(DrawingUnit::Cm)
            .read_str(&rect_dxf(200.0, 100.0))
            .unwrap();
        assert_relative_eq!(geom.properties.area, 2.0, epsilon = 1e-9);
        assert_relative_eq!(geom.properties.width, 2.0, epsilon = 1e-9);
        assert_relative_eq!(geom.properties.height, 1.0, epsilon = 1e-9);
        assert!(geom.inners.is_empty());
    }

    #[test]
    fn test_rectangle_in_each_unit_area_converts() {
        for (unit, expect) in [
            (DrawingUnit::Mm, 2000.0 * 1000.0 * 1e-6),
            (DrawingUnit::Cm, 2.0 * 1.0 * 1e4 * 1e-4),
            (DrawingUnit::M, 2.0),
        ] {
            let text = match unit {
                DrawingUnit::Mm => rect_dxf(2000.0, 1000.0),
                DrawingUnit::Cm => rect_dxf(200.0, 100.0),
                DrawingUnit::M => rect_dxf(2.0, 1.0),
            };
            let geom = SectionReader::new(unit).read_str(&text).unwrap();
            assert_relative_eq!(geom.properties.area, expect, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_outer_inner_classification() {
        let text = "0\nSECTION\n2\nENTITIES\n\
            0\nLWPOLYLINE\n70\n1\n10\n0.0\n20\n0.0\n10\n10.0\n20\n0.0\n10\n10.0\n20\n10.0\n10\n0.0\n20\n10.0\n\
            0\nLWPOLYLINE\n70\n1\n10\n2.0\n20\n2.0\n10\n4.0\n20\n2.0\n10\n4.0\n20\n4.0\n10\n2.0\n20\n4.0\n\
            0\nENDSEC\n0\nEOF\n";
        let geom = SectionReader::new(DrawingUnit::M).read_str(text).unwrap();
        assert_relative_eq!(geom.outer.area(), 100.0, epsilon = 1e-9);
        assert_eq!(geom.inners.len(), 1);
        assert_relative_eq!(geom.inners[0].area(), 4.0, epsilon = 1e-9);
        // Source-faithful default: hole not deducted.
        assert_relative_eq!(geom.properties.area, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hole_deduction_toggle() {
        let text = "0\nSECTION\n2\nENTITIES\n\
            0\nLWPOLYLINE\n70\n1\n10\n0.0\n20\n0.0\n10\n10.0\n20\n0.0\n10\n10.0\n20\n10.0\n10\n0.0\n20\n10.0\n\
            0\nLWPOLYLINE\n70\n1\n10\n2.0\n20\n2.0\n10\n4.0\n20\n2.0\n10\n4.0\n20\n4.0\n10\n2.0\n20\n4.0\n\
            0\nENDSEC\n0\nEOF\n";
        let geom = SectionReader::new(DrawingUnit::M)
            .deduct_holes(true)
            .read_str(text)
            .unwrap();
        assert_relative_eq!(geom.properties.area, 96.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_drawing_is_rejected() {
        let text = "0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n";
        let err = SectionReader::new(DrawingUnit::M).read_str(text).unwrap_err();
        assert!(matches!(err, SapError::InvalidPolygon(_)));
    }

    #[test]
    fn test_self_intersecting_region_is_dropped() {
        // A bowtie plus a valid square: the bowtie is discarded.
        let text = "0\nSECTION\n2\nENTITIES\n\
            0\nLWPOLYLINE\n70\n1\n10\n20.0\n20\n0.0\n10\n21.0\n20\n1.0\n10\n21.0\n20\n0.0\n10\n20.0\n20\n1.0\n\
            0\nLWPOLYLINE\n70\n1\n10\n0.0\n20\n0.0\n10\n5.0\n20\n0.0\n10\n5.0\n20\n5.0\n10\n0.0\n20\n5.0\n\
            0\nENDSEC\n0\nEOF\n";
        let geom = SectionReader::new(DrawingUnit::M).read_str(text).unwrap();
        assert_relative_eq!(geom.outer.area(), 25.0, epsilon = 1e-9);
        assert!(geom.inners.is_empty());
    }
}
