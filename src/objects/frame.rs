//! Frame objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::SapResult;

/// Frame object manager.
#[derive(Debug, Clone)]
pub struct FrameObj {
    h: Handle,
    pub set: FrameSet,
    pub get: FrameGet,
}

impl FrameObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: FrameSet { h: h.clone() },
            get: FrameGet { h: h.clone() },
            h,
        }
    }

    /// Adds a frame between two coordinate triples. Returns the assigned
    /// name.
    #[allow(clippy::too_many_arguments)]
    pub fn add_by_coord(
        &self,
        xi: f64,
        yi: f64,
        zi: f64,
        xj: f64,
        yj: f64,
        zj: f64,
        section: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.FrameObj.AddByCoord",
            &[
                xi.into(),
                yi.into(),
                zi.into(),
                xj.into(),
                yj.into(),
                zj.into(),
                section.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds a frame between two existing points. Returns the assigned name.
    pub fn add_by_point(
        &self,
        point_i: &str,
        point_j: &str,
        section: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.FrameObj.AddByPoint",
            &[
                point_i.into(),
                point_j.into(),
                section.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.FrameObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Frame assignment setters.
#[derive(Debug, Clone)]
pub struct FrameSet {
    h: Handle,
}

impl FrameSet {
    pub fn section(&self, name: &str, section: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetSection",
                &[name.into(), section.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// End releases and partial-fixity stiffness at the I and J ends, each
    /// in U1..R3 order.
    #[allow(clippy::too_many_arguments)]
    pub fn releases(
        &self,
        name: &str,
        release_i: [bool; 6],
        release_j: [bool; 6],
        fixity_i: [f64; 6],
        fixity_j: [f64; 6],
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetReleases",
                &[
                    name.into(),
                    release_i.into(),
                    release_j.into(),
                    fixity_i.into(),
                    fixity_j.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Rigid end-zone offsets, or automatic offsets from connectivity.
    pub fn end_length_offset(
        &self,
        name: &str,
        auto_offset: bool,
        length_i: f64,
        length_j: f64,
        rigid_factor: f64,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetEndLengthOffset",
                &[
                    name.into(),
                    auto_offset.into(),
                    length_i.into(),
                    length_j.into(),
                    rigid_factor.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Local-axes rotation about the frame's own axis, in degrees.
    pub fn local_axes(&self, name: &str, angle: f64, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetLocalAxes",
                &[name.into(), angle.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Distributed span load. `load_kind` is 1 for force, 2 for moment;
    /// `direction` follows the engine's 1..11 direction codes; distances
    /// are relative when `relative` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn load_distributed(
        &self,
        name: &str,
        pattern: &str,
        load_kind: i32,
        direction: i32,
        dist_i: f64,
        dist_j: f64,
        value_i: f64,
        value_j: f64,
        relative: bool,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetLoadDistributed",
                &[
                    name.into(),
                    pattern.into(),
                    load_kind.into(),
                    direction.into(),
                    dist_i.into(),
                    dist_j.into(),
                    value_i.into(),
                    value_j.into(),
                    "Global".into(),
                    relative.into(),
                    replace.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Concentrated span load at a single location.
    #[allow(clippy::too_many_arguments)]
    pub fn load_point(
        &self,
        name: &str,
        pattern: &str,
        load_kind: i32,
        direction: i32,
        distance: f64,
        value: f64,
        relative: bool,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetLoadPoint",
                &[
                    name.into(),
                    pattern.into(),
                    load_kind.into(),
                    direction.into(),
                    distance.into(),
                    value.into(),
                    "Global".into(),
                    relative.into(),
                    replace.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Additional line mass per unit length.
    pub fn mass(
        &self,
        name: &str,
        mass_per_length: f64,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetMass",
                &[
                    name.into(),
                    mass_per_length.into(),
                    replace.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    pub fn group(
        &self,
        name: &str,
        group: &str,
        remove: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetGroupAssign",
                &[
                    name.into(),
                    group.into(),
                    remove.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Automatic meshing: split at intermediate points and intersections,
    /// or into a fixed number / maximum length of segments.
    #[allow(clippy::too_many_arguments)]
    pub fn auto_mesh(
        &self,
        name: &str,
        enabled: bool,
        at_points: bool,
        at_lines: bool,
        segments: i32,
        max_length: f64,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.FrameObj.SetAutoMesh",
                &[
                    name.into(),
                    enabled.into(),
                    at_points.into(),
                    at_lines.into(),
                    segments.into(),
                    max_length.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Frame assignment getters.
#[derive(Debug, Clone)]
pub struct FrameGet {
    h: Handle,
}

impl FrameGet {
    /// Assigned section property and auto-select list name (empty when
    /// none).
    pub fn section(&self, name: &str) -> SapResult<(String, String, i32)> {
        let r = self.h.call("SapModel.FrameObj.GetSection", &[name.into()])?;
        Ok((r.str_at(0)?, r.str_at(1)?, r.ret))
    }

    /// End point names (I, J).
    pub fn points(&self, name: &str) -> SapResult<(String, String, i32)> {
        let r = self.h.call("SapModel.FrameObj.GetPoints", &[name.into()])?;
        Ok((r.str_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.FrameObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_add_by_point_returns_assigned_name() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.FrameObj.AddByPoint",
            Reply::with_outs(0, vec![Value::Str("23".into())]),
        );
        let frames = FrameObj::new(handle);
        let (name, ret) = frames.add_by_point("1", "2", "IPE200", None).unwrap();
        assert_eq!(name, "23");
        assert_eq!(ret, 0);
    }

    #[test]
    fn test_releases_forward_masks() {
        let (engine, handle) = RecordingEngine::handle();
        let frames = FrameObj::new(handle);
        let mut pin = [false; 6];
        pin[5] = true; // R3 release
        frames
            .set
            .releases("23", [false; 6], pin, [0.0; 6], [0.0; 6], ItemType::Object)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.FrameObj.SetReleases");
        assert_eq!(
            call.args[2],
            Value::Bools(vec![false, false, false, false, false, true])
        );
    }

    #[test]
    fn test_load_distributed_forwards_span() {
        let (engine, handle) = RecordingEngine::handle();
        let frames = FrameObj::new(handle);
        frames
            .set
            .load_distributed(
                "23",
                "DEAD",
                1,
                10,
                0.0,
                1.0,
                -5.0,
                -5.0,
                true,
                true,
                ItemType::Object,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[3], Value::Int(10));
        assert_eq!(call.args[6], Value::Num(-5.0));
        assert_eq!(call.args[8], Value::Str("Global".into()));
    }
}
