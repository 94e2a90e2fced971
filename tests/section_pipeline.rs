//! Drawing-to-definition pipeline: a DXF drawing on disk becomes a general
//! frame section pushed through a recorded engine.

use std::fs;

use approx::assert_relative_eq;
use sap_oapi::bridge::recording::RecordingEngine;
use sap_oapi::bridge::Value;
use sap_oapi::prelude::*;

fn write_rect_dxf(dir: &std::path::Path, w: f64, h: f64) -> std::path::PathBuf {
    let _ = env_logger::builder().is_test(true).try_init();
    let path = dir.join("section.dxf");
    let text = format!(
        "0\nSECTION\n2\nENTITIES\n0\nLWPOLYLINE\n90\n4\n70\n1\n\
         10\n0.0\n20\n0.0\n10\n{w}\n20\n0.0\n10\n{w}\n20\n{h}\n10\n0.0\n20\n{h}\n\
         0\nENDSEC\n0\nEOF\n"
    );
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_rectangle_file_properties() {
    let dir = tempfile::tempdir().unwrap();
    // 30 x 50 cm column.
    let path = write_rect_dxf(dir.path(), 30.0, 50.0);

    let geom = section_from_file(&path, DrawingUnit::Cm).unwrap();
    assert_relative_eq!(geom.properties.area, 0.15, epsilon = 1e-9);
    assert_relative_eq!(geom.properties.width, 0.3, epsilon = 1e-9);
    assert_relative_eq!(geom.properties.height, 0.5, epsilon = 1e-9);
    // Rectangle inertia about the centroid: b h^3 / 12.
    assert_relative_eq!(
        geom.properties.ixx,
        0.3 * 0.5_f64.powi(3) / 12.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        geom.properties.iyy,
        0.5 * 0.3_f64.powi(3) / 12.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(geom.properties.cx, 0.15, epsilon = 1e-9);

    // The JSON export carries the same figures.
    let json = geom.properties_json().unwrap();
    assert!(json.contains("\"area\""));
}

#[test]
fn test_drawing_feeds_frame_section_definition() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rect_dxf(dir.path(), 30.0, 50.0);
    let geom = section_from_file(&path, DrawingUnit::Cm).unwrap();

    let (engine, handle) = RecordingEngine::handle();
    let sap = Sap2000::with_handle(handle);
    let section = GeneralFrameSection::from_properties(&geom.properties);
    sap.sections
        .set
        .frame_general("COL30X50", "C30/37", &section)
        .unwrap();

    let call = engine.last_call().unwrap();
    assert_eq!(call.method, "SapModel.PropFrame.SetGeneral");
    // Depth and width land in the engine's t3/t2 slots.
    assert_eq!(call.args[2], Value::Num(0.5));
    assert_eq!(call.args[3], Value::Num(0.3));
    assert!(call
        .args
        .iter()
        .any(|a| matches!(a, Value::Num(v) if (v - 0.15).abs() < 1e-9)));
}
