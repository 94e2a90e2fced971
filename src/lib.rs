//! sap-oapi - A scripting facade over the SAP2000 object-automation API
//!
//! This library wraps the remote automation interface of a running
//! structural-analysis engine behind typed Rust facades, covering:
//! - Model file lifecycle and template models
//! - Property definitions (materials, sections, link properties, constraints,
//!   functions, load patterns/cases/combos, mass source)
//! - Object managers (points, frames, cables, tendons, areas, solids, links)
//! - Analysis control and columnar results extraction
//! - A CAD pipeline turning 2D DXF drawings into frame section properties
//!
//! The engine transport is a consumer-supplied [`bridge::EngineBridge`];
//! the crate ships a recording double for tests.
//!
//! ## Example
//! ```rust
//! use sap_oapi::prelude::*;
//! use sap_oapi::bridge::recording::RecordingEngine;
//!
//! let (engine, handle) = RecordingEngine::handle();
//! engine.stub(
//!     "SapModel.PointObj.AddCartesian",
//!     Reply::with_outs(0, vec![Value::Str("1".into())]),
//! );
//! let sap = Sap2000::with_handle(handle);
//!
//! // Seed a planar portal frame's joints; duplicates are filtered.
//! let (added, dups) = sap
//!     .add_joints(&[vec![0.0, 0.0], vec![0.0, 3.0], vec![4.0, 3.0], vec![4.0, 0.0]])
//!     .unwrap();
//! assert_eq!((added, dups), (4, 0));
//!
//! // Fix the supports and define a dead-load pattern.
//! sap.point.set.restraint("1", &["UX", "UZ", "RY"], ItemType::Object).unwrap();
//! sap.load_patterns.add("DEAD", LoadPatternType::Dead, 1.0, true).unwrap();
//! ```

pub mod analysis;
pub mod bridge;
pub mod cad;
pub mod codes;
pub mod definitions;
pub mod error;
pub mod file;
pub mod nodes;
pub mod objects;
pub mod results;
pub mod sap;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::Analyze;
    pub use crate::bridge::{EngineBridge, Handle, Reply, Value};
    pub use crate::cad::{section_from_file, DrawingUnit, SectionGeometry, SectionReader};
    pub use crate::codes::{
        Axis, ConstraintType, DampingScheme, DirectionalCombo, Dof, DofAxis, FunctionValueType,
        HysteresisType, IntegrationParams, ItemType, ItemTypeElm, LinkPropType, MaterialType,
        StiffnessTerm, TimeIntegration,
    };
    pub use crate::definitions::{
        CaseLoad, ComboEntryKind, ComboType, GeneralFrameSection, HistoryLoad, LoadPatternType,
        NotionalSize, ShellType, SpectrumLoad,
    };
    pub use crate::error::{SapError, SapResult};
    pub use crate::file::{Frame2DType, Frame3DType};
    pub use crate::nodes::{Node2d, Node3d};
    pub use crate::results::{HistoryOutput, MultiValuedComboOutput};
    pub use crate::sap::Sap2000;
}
