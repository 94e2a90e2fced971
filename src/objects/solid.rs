//! Solid objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::{SapError, SapResult};

/// Solid object manager. Solids are eight-noded bricks.
#[derive(Debug, Clone)]
pub struct SolidObj {
    h: Handle,
    pub set: SolidSet,
    pub get: SolidGet,
}

impl SolidObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: SolidSet { h: h.clone() },
            get: SolidGet { h: h.clone() },
            h,
        }
    }

    /// Adds a solid from eight corner coordinates. Returns the assigned
    /// name.
    pub fn add_by_coord(
        &self,
        x: &[f64; 8],
        y: &[f64; 8],
        z: &[f64; 8],
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.SolidObj.AddByCoord",
            &[
                x.as_slice().into(),
                y.as_slice().into(),
                z.as_slice().into(),
                property.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds a solid spanning eight existing points. Returns the assigned
    /// name.
    pub fn add_by_point(
        &self,
        points: &[&str],
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        if points.len() != 8 {
            return Err(SapError::InvalidArgument(format!(
                "a solid needs exactly 8 corner points, got {}",
                points.len()
            )));
        }
        let r = self.h.call(
            "SapModel.SolidObj.AddByPoint",
            &[
                points.into(),
                property.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.SolidObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.SolidObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.SolidObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Solid assignment setters.
#[derive(Debug, Clone)]
pub struct SolidSet {
    h: Handle,
}

impl SolidSet {
    pub fn property(&self, name: &str, property: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.SolidObj.SetProperty",
                &[name.into(), property.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Pressure on one face, 1..6, or on all faces with face 0.
    pub fn load_surface_pressure(
        &self,
        name: &str,
        pattern: &str,
        face: i32,
        value: f64,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.SolidObj.SetLoadSurfacePressure",
                &[
                    name.into(),
                    pattern.into(),
                    face.into(),
                    value.into(),
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
                "SapModel.SolidObj.SetGroupAssign",
                &[
                    name.into(),
                    group.into(),
                    remove.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Automatic meshing into an n1 by n2 by n3 grid.
    pub fn auto_mesh(
        &self,
        name: &str,
        mesh_type: i32,
        n1: i32,
        n2: i32,
        n3: i32,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.SolidObj.SetAutoMesh",
                &[
                    name.into(),
                    mesh_type.into(),
                    n1.into(),
                    n2.into(),
                    n3.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Solid assignment getters.
#[derive(Debug, Clone)]
pub struct SolidGet {
    h: Handle,
}

impl SolidGet {
    pub fn property(&self, name: &str) -> SapResult<(String, i32)> {
        let r = self
            .h
            .call("SapModel.SolidObj.GetProperty", &[name.into()])?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Corner point names in connectivity order.
    pub fn points(&self, name: &str) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.SolidObj.GetPoints", &[name.into()])?;
        Ok((r.strs_at(0)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.SolidObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_add_by_point_needs_eight_corners() {
        let (engine, handle) = RecordingEngine::handle();
        let solids = SolidObj::new(handle);
        assert!(solids.add_by_point(&["1", "2", "3", "4"], "CONC", None).is_err());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_surface_pressure_forwards_face() {
        let (engine, handle) = RecordingEngine::handle();
        let solids = SolidObj::new(handle);
        solids
            .set
            .load_surface_pressure("S1", "WATER", 2, -50.0, true, ItemType::Object)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.SolidObj.SetLoadSurfacePressure");
        assert_eq!(call.args[2], Value::Int(2));
        assert_eq!(call.args[3], Value::Num(-50.0));
    }

    #[test]
    fn test_add_by_coord_returns_name() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.SolidObj.AddByCoord",
            Reply::with_outs(0, vec![Value::Str("3".into())]),
        );
        let solids = SolidObj::new(handle);
        let x = [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];
        let y = [0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0];
        let z = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let (name, ret) = solids.add_by_coord(&x, &y, &z, "CONC", None).unwrap();
        assert_eq!(name, "3");
        assert_eq!(ret, 0);
    }
}
