//! Root facade
//!
//! [`Sap2000`] owns the engine handle and hands out every category facade.
//! It also keeps the coordinate registry behind [`Sap2000::add_joints`],
//! which filters exact duplicates before they reach the engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::analysis::Analyze;
use crate::bridge::{EngineBridge, Handle};
use crate::definitions::{
    Constraints, Functions, LinkProps, LoadCases, LoadCombos, LoadPatterns, MassSource, Material,
    Sections,
};
use crate::error::{SapError, SapResult};
use crate::file::File;
use crate::nodes::{Node2d, Node3d};
use crate::objects::{AreaObj, CableObj, FrameObj, LinkObj, PointObj, SolidObj, TendonObj};
use crate::results::Results;

/// Scripting entry point over one connected engine instance.
#[derive(Debug, Clone)]
pub struct Sap2000 {
    h: Handle,
    pub file: File,
    pub constraints: Constraints,
    pub material: Material,
    pub sections: Sections,
    pub link_props: LinkProps,
    pub functions: Functions,
    pub load_patterns: LoadPatterns,
    pub load_cases: LoadCases,
    pub load_combos: LoadCombos,
    pub mass_source: MassSource,
    pub analyze: Analyze,
    pub results: Results,
    pub point: PointObj,
    pub frame: FrameObj,
    pub cable: CableObj,
    pub tendon: TendonObj,
    pub area: AreaObj,
    pub solid: SolidObj,
    pub link: LinkObj,
    /// Every coordinate row added through [`add_joints`](Self::add_joints),
    /// 2 or 3 columns wide.
    joints: Rc<RefCell<Vec<Vec<f64>>>>,
}

impl Sap2000 {
    /// Wraps a connected engine bridge.
    pub fn new(bridge: Rc<dyn EngineBridge>) -> Self {
        Self::with_handle(Handle::new(bridge))
    }

    /// Wraps an already-built [`Handle`].
    pub fn with_handle(h: Handle) -> Self {
        Self {
            file: File::new(h.clone()),
            constraints: Constraints::new(h.clone()),
            material: Material::new(h.clone()),
            sections: Sections::new(h.clone()),
            link_props: LinkProps::new(h.clone()),
            functions: Functions::new(h.clone()),
            load_patterns: LoadPatterns::new(h.clone()),
            load_cases: LoadCases::new(h.clone()),
            load_combos: LoadCombos::new(h.clone()),
            mass_source: MassSource::new(h.clone()),
            analyze: Analyze::new(h.clone()),
            results: Results::new(h.clone()),
            point: PointObj::new(h.clone()),
            frame: FrameObj::new(h.clone()),
            cable: CableObj::new(h.clone()),
            tendon: TendonObj::new(h.clone()),
            area: AreaObj::new(h.clone()),
            solid: SolidObj::new(h.clone()),
            link: LinkObj::new(h.clone()),
            joints: Rc::new(RefCell::new(Vec::new())),
            h,
        }
    }

    /// The underlying engine handle, for calls the facades do not cover.
    pub fn handle(&self) -> &Handle {
        &self.h
    }

    /// Adds joints from coordinate rows, skipping rows already added
    /// through this method. Rows are 2 columns for planar models (X, Z) or
    /// 3 for spatial ones, and kinds can be mixed freely.
    ///
    /// Duplicate detection is exact equality on every component; rows that
    /// differ by any amount are distinct. Returns (added, duplicates).
    pub fn add_joints(&self, rows: &[Vec<f64>]) -> SapResult<(usize, usize)> {
        let mut added = 0;
        let mut duplicates = 0;
        for row in rows {
            if row.len() != 2 && row.len() != 3 {
                return Err(SapError::InvalidArgument(format!(
                    "joint rows must have 2 or 3 coordinates, got {}",
                    row.len()
                )));
            }
            if self.joints.borrow().iter().any(|seen| seen == row) {
                log::warn!("skipping duplicate joint at {:?}", row);
                duplicates += 1;
                continue;
            }
            let (_, ret) = match row[..] {
                [x, z] => self.point.add_cartesian_2d(x, z, None)?,
                [x, y, z] => self.point.add_cartesian(x, y, z, None)?,
                _ => unreachable!(),
            };
            if ret == 0 {
                self.joints.borrow_mut().push(row.clone());
                added += 1;
            } else {
                log::warn!("engine refused joint {:?} with code {}", row, ret);
            }
        }
        log::debug!("added {} joints, skipped {} duplicates", added, duplicates);
        Ok((added, duplicates))
    }

    /// [`add_joints`](Self::add_joints) over tagged planar nodes; the node
    /// `y` lands on global Z.
    pub fn add_nodes_2d(&self, nodes: &[Node2d]) -> SapResult<(usize, usize)> {
        let rows: Vec<Vec<f64>> = nodes.iter().map(|n| vec![n.x, n.y]).collect();
        self.add_joints(&rows)
    }

    /// [`add_joints`](Self::add_joints) over tagged spatial nodes.
    pub fn add_nodes_3d(&self, nodes: &[Node3d]) -> SapResult<(usize, usize)> {
        let rows: Vec<Vec<f64>> = nodes.iter().map(|n| vec![n.x, n.y, n.z]).collect();
        self.add_joints(&rows)
    }

    /// Number of rows in the joint registry.
    pub fn joint_count(&self) -> usize {
        self.joints.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    fn sap_with_engine() -> (Rc<RecordingEngine>, Sap2000) {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.PointObj.AddCartesian",
            Reply::with_outs(0, vec![Value::Str("1".into())]),
        );
        (engine, Sap2000::with_handle(handle))
    }

    #[test]
    fn test_add_joints_skips_exact_duplicates() {
        let (engine, sap) = sap_with_engine();
        let rows = vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0],
            vec![0.0, 0.0],
            vec![4.0, 3.0, 0.0],
        ];
        let (added, duplicates) = sap.add_joints(&rows).unwrap();
        assert_eq!(added, 3);
        assert_eq!(duplicates, 1);
        assert_eq!(engine.call_count(), 3);
        assert_eq!(sap.joint_count(), 3);
    }

    #[test]
    fn test_add_joints_is_idempotent_across_batches() {
        let (engine, sap) = sap_with_engine();
        sap.add_joints(&[vec![1.0, 2.0, 3.0]]).unwrap();
        let (added, duplicates) = sap.add_joints(&[vec![1.0, 2.0, 3.0]]).unwrap();
        assert_eq!((added, duplicates), (0, 1));
        assert_eq!(engine.call_count(), 1);
    }

    #[test]
    fn test_add_joints_near_duplicates_are_distinct() {
        let (_, sap) = sap_with_engine();
        let (added, duplicates) = sap
            .add_joints(&[vec![0.0, 0.0], vec![0.0, 1e-12]])
            .unwrap();
        assert_eq!((added, duplicates), (2, 0));
    }

    #[test]
    fn test_add_nodes_shares_the_registry() {
        let (_, sap) = sap_with_engine();
        sap.add_nodes_2d(&[Node2d::new(1, 0.0, 3.0)]).unwrap();
        let (added, duplicates) = sap.add_joints(&[vec![0.0, 3.0]]).unwrap();
        assert_eq!((added, duplicates), (0, 1));
    }

    #[test]
    fn test_add_joints_rejects_bad_width() {
        let (engine, sap) = sap_with_engine();
        assert!(sap.add_joints(&[vec![1.0]]).is_err());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_rejected_rows_stay_out_of_registry() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.PointObj.AddCartesian",
            Reply::with_outs(1, vec![Value::Str("".into())]),
        );
        let sap = Sap2000::with_handle(handle);
        let (added, duplicates) = sap.add_joints(&[vec![0.0, 0.0]]).unwrap();
        assert_eq!((added, duplicates), (0, 0));
        assert_eq!(sap.joint_count(), 0);
    }
}
