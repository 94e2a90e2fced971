//! Cable objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::SapResult;

/// Cable object manager.
#[derive(Debug, Clone)]
pub struct CableObj {
    h: Handle,
    pub set: CableSet,
    pub get: CableGet,
}

impl CableObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: CableSet { h: h.clone() },
            get: CableGet { h: h.clone() },
            h,
        }
    }

    /// Adds a cable between two coordinate triples. Returns the assigned
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
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.CableObj.AddByCoord",
            &[
                xi.into(),
                yi.into(),
                zi.into(),
                xj.into(),
                yj.into(),
                zj.into(),
                property.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds a cable between two existing points. Returns the assigned name.
    pub fn add_by_point(
        &self,
        point_i: &str,
        point_j: &str,
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.CableObj.AddByPoint",
            &[
                point_i.into(),
                point_j.into(),
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
                "SapModel.CableObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.CableObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.CableObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Cable assignment setters.
#[derive(Debug, Clone)]
pub struct CableSet {
    h: Handle,
}

impl CableSet {
    pub fn property(&self, name: &str, property: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.CableObj.SetProperty",
                &[name.into(), property.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Cable shape definition. `definition` follows the engine's 1..9 shape
    /// codes (undeformed length, relative sag, tension at end, ...) and
    /// `value` is the datum for that code.
    pub fn cable_data(
        &self,
        name: &str,
        definition: i32,
        segments: i32,
        weight_per_length: f64,
        value: f64,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.CableObj.SetCableData",
                &[
                    name.into(),
                    definition.into(),
                    segments.into(),
                    weight_per_length.into(),
                    value.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Uniformly distributed load over the full length. `direction` follows
    /// the engine's 1..11 direction codes.
    #[allow(clippy::too_many_arguments)]
    pub fn load_distributed(
        &self,
        name: &str,
        pattern: &str,
        load_kind: i32,
        direction: i32,
        value: f64,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.CableObj.SetLoadDistributed",
                &[
                    name.into(),
                    pattern.into(),
                    load_kind.into(),
                    direction.into(),
                    value.into(),
                    "Global".into(),
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
                "SapModel.CableObj.SetMass",
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
                "SapModel.CableObj.SetGroupAssign",
                &[
                    name.into(),
                    group.into(),
                    remove.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Cable assignment getters.
#[derive(Debug, Clone)]
pub struct CableGet {
    h: Handle,
}

impl CableGet {
    pub fn property(&self, name: &str) -> SapResult<(String, i32)> {
        let r = self
            .h
            .call("SapModel.CableObj.GetProperty", &[name.into()])?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// End point names (I, J).
    pub fn points(&self, name: &str) -> SapResult<(String, String, i32)> {
        let r = self.h.call("SapModel.CableObj.GetPoints", &[name.into()])?;
        Ok((r.str_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.CableObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_cable_data_forwards_shape_code() {
        let (engine, handle) = RecordingEngine::handle();
        let cables = CableObj::new(handle);
        cables
            .set
            .cable_data("C1", 3, 8, 0.12, 0.02, ItemType::Object)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.CableObj.SetCableData");
        assert_eq!(call.args[1], Value::Int(3));
        assert_eq!(call.args[4], Value::Num(0.02));
    }
}
