//! Link objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::SapResult;

/// Link object manager.
#[derive(Debug, Clone)]
pub struct LinkObj {
    h: Handle,
    pub set: LinkSet,
    pub get: LinkGet,
}

impl LinkObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: LinkSet { h: h.clone() },
            get: LinkGet { h: h.clone() },
            h,
        }
    }

    /// Adds a two-joint link between coordinate triples. Returns the
    /// assigned name.
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
            "SapModel.LinkObj.AddByCoord",
            &[
                xi.into(),
                yi.into(),
                zi.into(),
                xj.into(),
                yj.into(),
                zj.into(),
                false.into(),
                property.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds a link between two existing points, or a single-joint grounded
    /// link when `point_j` is `None`.
    pub fn add_by_point(
        &self,
        point_i: &str,
        point_j: Option<&str>,
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.LinkObj.AddByPoint",
            &[
                point_i.into(),
                point_j.unwrap_or("").into(),
                point_j.is_none().into(),
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
                "SapModel.LinkObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.LinkObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LinkObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Link assignment setters.
#[derive(Debug, Clone)]
pub struct LinkSet {
    h: Handle,
}

impl LinkSet {
    pub fn property(&self, name: &str, property: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LinkObj.SetProperty",
                &[name.into(), property.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Local-axes rotation about the link's own axis, in degrees.
    pub fn local_axes(&self, name: &str, angle: f64, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LinkObj.SetLocalAxes",
                &[name.into(), angle.into(), item_type.code().into()],
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
                "SapModel.LinkObj.SetGroupAssign",
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

/// Link assignment getters.
#[derive(Debug, Clone)]
pub struct LinkGet {
    h: Handle,
}

impl LinkGet {
    pub fn property(&self, name: &str) -> SapResult<(String, i32)> {
        let r = self.h.call("SapModel.LinkObj.GetProperty", &[name.into()])?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// End point names (I, J); a single-joint link repeats its point.
    pub fn points(&self, name: &str) -> SapResult<(String, String, i32)> {
        let r = self.h.call("SapModel.LinkObj.GetPoints", &[name.into()])?;
        Ok((r.str_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.LinkObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_single_joint_link_flag() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.LinkObj.AddByPoint",
            Reply::with_outs(0, vec![Value::Str("L1".into())]),
        );
        let links = LinkObj::new(handle);
        links.add_by_point("5", None, "ISO1", None).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Str(String::new()));
        assert_eq!(call.args[2], Value::Bool(true));
    }

    #[test]
    fn test_property_assignment_forwards() {
        let (engine, handle) = RecordingEngine::handle();
        let links = LinkObj::new(handle);
        links.set.property("L1", "DAMPER-X", ItemType::Group).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.LinkObj.SetProperty");
        assert_eq!(call.args[2], Value::Int(1));
    }
}
