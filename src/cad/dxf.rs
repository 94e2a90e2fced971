//! Minimal DXF entity reader
//!
//! Reads the subset of the drawing-exchange format the section pipeline
//! consumes: LINE, ARC, LWPOLYLINE and heavy POLYLINE/VERTEX/SEQEND chains
//! from the ENTITIES section. DXF is a flat stream of (group code, value)
//! line pairs, so the reader is a plain two-line scanner; anything it does
//! not recognize is skipped with a warning.

use std::fs;
use std::path::Path;

use crate::error::{SapError, SapResult};

/// One polyline vertex with its bulge (tan of a quarter of the arc sweep
/// to the next vertex; 0 = straight segment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

/// A drawing entity relevant to section extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        /// Start angle in degrees, counter-clockwise from +x.
        start_deg: f64,
        /// End angle in degrees.
        end_deg: f64,
    },
    Polyline {
        vertices: Vec<PolyVertex>,
        closed: bool,
    },
}

/// Reads the entities of a DXF file.
pub fn read_entities(path: &Path) -> SapResult<Vec<Entity>> {
    let text = fs::read_to_string(path)?;
    parse_entities(&text)
}

/// Parses the ENTITIES section out of DXF text.
pub fn parse_entities(text: &str) -> SapResult<Vec<Entity>> {
    let pairs = scan_pairs(text)?;
    let mut entities = Vec::new();

    // Locate the ENTITIES section.
    let mut idx = 0;
    let mut in_entities = false;
    while idx < pairs.len() {
        let (code, value) = &pairs[idx];
        if *code == 0 && value == "SECTION" {
            if let Some((2, name)) = pairs.get(idx + 1).map(|(c, v)| (*c, v.as_str())) {
                in_entities = name == "ENTITIES";
                idx += 2;
                continue;
            }
        }
        if *code == 0 && value == "ENDSEC" {
            in_entities = false;
            idx += 1;
            continue;
        }
        if !in_entities || *code != 0 {
            idx += 1;
            continue;
        }

        match value.as_str() {
            "LINE" => {
                let (fields, next) = collect_fields(&pairs, idx + 1);
                entities.push(Entity::Line {
                    x1: field(&fields, 10),
                    y1: field(&fields, 20),
                    x2: field(&fields, 11),
                    y2: field(&fields, 21),
                });
                idx = next;
            }
            "ARC" => {
                let (fields, next) = collect_fields(&pairs, idx + 1);
                entities.push(Entity::Arc {
                    cx: field(&fields, 10),
                    cy: field(&fields, 20),
                    radius: field(&fields, 40),
                    start_deg: field(&fields, 50),
                    end_deg: field(&fields, 51),
                });
                idx = next;
            }
            "LWPOLYLINE" => {
                let (entity, next) = parse_lwpolyline(&pairs, idx + 1);
                entities.push(entity);
                idx = next;
            }
            "POLYLINE" => {
                let (entity, next) = parse_polyline(&pairs, idx + 1);
                entities.push(entity);
                idx = next;
            }
            other => {
                log::warn!("skipping unsupported drawing entity '{}'", other);
                idx += 1;
            }
        }
    }

    Ok(entities)
}

/// Splits DXF text into (group code, value) pairs.
fn scan_pairs(text: &str) -> SapResult<Vec<(i32, String)>> {
    let mut pairs = Vec::new();
    let mut lines = text.lines();
    while let Some(code_line) = lines.next() {
        let code_line = code_line.trim();
        if code_line.is_empty() {
            continue;
        }
        let value = match lines.next() {
            Some(v) => v.trim().to_string(),
            None => {
                return Err(SapError::MalformedDrawing(
                    "dangling group code at end of file".into(),
                ))
            }
        };
        let code: i32 = code_line.parse().map_err(|_| {
            SapError::MalformedDrawing(format!("group code '{}' is not an integer", code_line))
        })?;
        pairs.push((code, value));
    }
    Ok(pairs)
}

/// Collects the (code, value) fields of one entity, stopping at the next
/// `0` group. Later duplicates overwrite earlier ones, which is fine for
/// single-valued entities (LINE, ARC).
fn collect_fields(pairs: &[(i32, String)], start: usize) -> (Vec<(i32, f64)>, usize) {
    let mut fields = Vec::new();
    let mut idx = start;
    while idx < pairs.len() && pairs[idx].0 != 0 {
        if let Ok(v) = pairs[idx].1.parse::<f64>() {
            fields.push((pairs[idx].0, v));
        }
        idx += 1;
    }
    (fields, idx)
}

fn field(fields: &[(i32, f64)], code: i32) -> f64 {
    fields
        .iter()
        .rev()
        .find(|(c, _)| *c == code)
        .map(|(_, v)| *v)
        .unwrap_or(0.0)
}

fn int_field(fields: &[(i32, f64)], code: i32) -> i32 {
    field(fields, code) as i32
}

/// LWPOLYLINE: vertices inline as repeated 10/20(/42) groups.
fn parse_lwpolyline(pairs: &[(i32, String)], start: usize) -> (Entity, usize) {
    let mut vertices: Vec<PolyVertex> = Vec::new();
    let mut closed = false;
    let mut idx = start;
    while idx < pairs.len() && pairs[idx].0 != 0 {
        let (code, raw) = (&pairs[idx].0, &pairs[idx].1);
        let value = raw.parse::<f64>().unwrap_or(0.0);
        match code {
            70 => closed = (value as i32) & 1 != 0,
            10 => vertices.push(PolyVertex {
                x: value,
                y: 0.0,
                bulge: 0.0,
            }),
            20 => {
                if let Some(v) = vertices.last_mut() {
                    v.y = value;
                }
            }
            42 => {
                if let Some(v) = vertices.last_mut() {
                    v.bulge = value;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    (Entity::Polyline { vertices, closed }, idx)
}

/// Heavy POLYLINE: one VERTEX entity per vertex, terminated by SEQEND.
fn parse_polyline(pairs: &[(i32, String)], start: usize) -> (Entity, usize) {
    let (header, mut idx) = collect_fields(pairs, start);
    let closed = int_field(&header, 70) & 1 != 0;
    let mut vertices = Vec::new();

    while idx < pairs.len() {
        let (code, value) = &pairs[idx];
        if *code != 0 {
            idx += 1;
            continue;
        }
        match value.as_str() {
            "VERTEX" => {
                let (fields, next) = collect_fields(pairs, idx + 1);
                vertices.push(PolyVertex {
                    x: field(&fields, 10),
                    y: field(&fields, 20),
                    bulge: field(&fields, 42),
                });
                idx = next;
            }
            "SEQEND" => {
                let (_, next) = collect_fields(pairs, idx + 1);
                idx = next;
                break;
            }
            _ => break,
        }
    }

    (Entity::Polyline { vertices, closed }, idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds DXF text from (code, value) rows.
    fn dxf(rows: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for (code, value) in rows {
            out.push_str(code);
            out.push('\n');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_parse_line_entity() {
        let text = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "LINE"),
            ("10", "0.0"),
            ("20", "1.0"),
            ("11", "5.0"),
            ("21", "1.0"),
            ("0", "ENDSEC"),
            ("0", "EOF"),
        ]);
        let entities = parse_entities(&text).unwrap();
        assert_eq!(
            entities,
            vec![Entity::Line {
                x1: 0.0,
                y1: 1.0,
                x2: 5.0,
                y2: 1.0
            }]
        );
    }

    #[test]
    fn test_parse_arc_entity() {
        let text = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "ARC"),
            ("10", "1.0"),
            ("20", "2.0"),
            ("40", "10.0"),
            ("50", "0.0"),
            ("51", "180.0"),
            ("0", "ENDSEC"),
        ]);
        let entities = parse_entities(&text).unwrap();
        match &entities[0] {
            Entity::Arc {
                cx,
                cy,
                radius,
                start_deg,
                end_deg,
            } => {
                assert_eq!((*cx, *cy, *radius), (1.0, 2.0, 10.0));
                assert_eq!((*start_deg, *end_deg), (0.0, 180.0));
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_lwpolyline_with_bulge() {
        let text = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "LWPOLYLINE"),
            ("90", "3"),
            ("70", "1"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("10", "10.0"),
            ("20", "0.0"),
            ("42", "1.0"),
            ("10", "10.0"),
            ("20", "10.0"),
            ("0", "ENDSEC"),
        ]);
        let entities = parse_entities(&text).unwrap();
        match &entities[0] {
            Entity::Polyline { vertices, closed } => {
                assert!(*closed);
                assert_eq!(vertices.len(), 3);
                assert_eq!(vertices[1].bulge, 1.0);
                assert_eq!(vertices[2].x, 10.0);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_heavy_polyline() {
        let text = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "POLYLINE"),
            ("70", "1"),
            ("0", "VERTEX"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("0", "VERTEX"),
            ("10", "4.0"),
            ("20", "0.0"),
            ("0", "VERTEX"),
            ("10", "4.0"),
            ("20", "3.0"),
            ("0", "SEQEND"),
            ("0", "ENDSEC"),
        ]);
        let entities = parse_entities(&text).unwrap();
        match &entities[0] {
            Entity::Polyline { vertices, closed } => {
                assert!(*closed);
                assert_eq!(vertices.len(), 3);
                assert_eq!(vertices[2].y, 3.0);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_entities_are_skipped() {
        let text = dxf(&[
            ("0", "SECTION"),
            ("2", "ENTITIES"),
            ("0", "CIRCLE"),
            ("10", "0.0"),
            ("20", "0.0"),
            ("40", "5.0"),
            ("0", "ENDSEC"),
        ]);
        let entities = parse_entities(&text).unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_malformed_group_code() {
        assert!(parse_entities("0\nSECTION\nnot-a-code\n").is_err());
    }
}
