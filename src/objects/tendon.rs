//! Tendon objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::SapResult;

/// Tendon object manager.
#[derive(Debug, Clone)]
pub struct TendonObj {
    h: Handle,
    pub set: TendonSet,
    pub get: TendonGet,
}

impl TendonObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: TendonSet { h: h.clone() },
            get: TendonGet { h: h.clone() },
            h,
        }
    }

    /// Adds a tendon between two coordinate triples. Returns the assigned
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
            "SapModel.TendonObj.AddByCoord",
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

    /// Adds a tendon between two existing points. Returns the assigned name.
    pub fn add_by_point(
        &self,
        point_i: &str,
        point_j: &str,
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.TendonObj.AddByPoint",
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
                "SapModel.TendonObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.TendonObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.TendonObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Tendon assignment setters.
#[derive(Debug, Clone)]
pub struct TendonSet {
    h: Handle,
}

impl TendonSet {
    pub fn property(&self, name: &str, property: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.TendonObj.SetProperty",
                &[name.into(), property.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Prestress load. `jack_from` is 1 for the I end, 2 for the J end, 3
    /// for both; `load_kind` is 0 for force, 1 for stress.
    #[allow(clippy::too_many_arguments)]
    pub fn load_force_stress(
        &self,
        name: &str,
        pattern: &str,
        jack_from: i32,
        load_kind: i32,
        value: f64,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.TendonObj.SetLoadForceStress",
                &[
                    name.into(),
                    pattern.into(),
                    jack_from.into(),
                    load_kind.into(),
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
                "SapModel.TendonObj.SetGroupAssign",
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

/// Tendon assignment getters.
#[derive(Debug, Clone)]
pub struct TendonGet {
    h: Handle,
}

impl TendonGet {
    pub fn property(&self, name: &str) -> SapResult<(String, i32)> {
        let r = self
            .h
            .call("SapModel.TendonObj.GetProperty", &[name.into()])?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// End point names (I, J).
    pub fn points(&self, name: &str) -> SapResult<(String, String, i32)> {
        let r = self
            .h
            .call("SapModel.TendonObj.GetPoints", &[name.into()])?;
        Ok((r.str_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.TendonObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_prestress_load_forwards() {
        let (engine, handle) = RecordingEngine::handle();
        let tendons = TendonObj::new(handle);
        tendons
            .set
            .load_force_stress("T1", "PT", 3, 0, 1200.0, true, ItemType::Object)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.TendonObj.SetLoadForceStress");
        assert_eq!(call.args[2], Value::Int(3));
        assert_eq!(call.args[4], Value::Num(1200.0));
    }
}
