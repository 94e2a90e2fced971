//! Joint constraint definitions

use crate::bridge::Handle;
use crate::codes::{Axis, ConstraintType, DofAxis};
use crate::error::SapResult;

/// Constraint facade; Set and Get flavors live in sub-facades.
#[derive(Debug, Clone)]
pub struct Constraints {
    h: Handle,
    pub set: ConstraintSet,
    pub get: ConstraintGet,
}

impl Constraints {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: ConstraintSet { h: h.clone() },
            get: ConstraintGet { h: h.clone() },
            h,
        }
    }

    /// Number of defined constraints.
    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.ConstraintDef.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    /// Deletes the constraint definition `name`.
    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.ConstraintDef.Delete", &[name.into()])?
            .ret)
    }

    /// Names of all defined constraints.
    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.ConstraintDef.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }

    /// The type of the constraint `name`, decoded to its symbol.
    pub fn constraint_type(&self, name: &str) -> SapResult<(ConstraintType, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetConstraintType", &[name.into()])?;
        Ok((ConstraintType::from_code(r.int_at(0)?)?, r.ret))
    }
}

/// Constraint definition setters. Symbolic DOF lists expand to the
/// engine's 6-wide masks; axis labels map to the engine's 1..4 codes.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    h: Handle,
}

impl ConstraintSet {
    pub fn body(&self, name: &str, dofs: &[DofAxis], csys: &str) -> SapResult<i32> {
        let mask = DofAxis::mask(dofs);
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetBody",
                &[name.into(), mask.into(), csys.into()],
            )?
            .ret)
    }

    pub fn beam(&self, name: &str, axis: Axis, csys: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetBeam",
                &[name.into(), axis.code().into(), csys.into()],
            )?
            .ret)
    }

    pub fn diaphragm(&self, name: &str, axis: Axis, csys: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetDiaphragm",
                &[name.into(), axis.code().into(), csys.into()],
            )?
            .ret)
    }

    pub fn equal(&self, name: &str, dofs: &[DofAxis], csys: &str) -> SapResult<i32> {
        let mask = DofAxis::mask(dofs);
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetEqual",
                &[name.into(), mask.into(), csys.into()],
            )?
            .ret)
    }

    pub fn line(&self, name: &str, dofs: &[DofAxis], csys: &str) -> SapResult<i32> {
        let mask = DofAxis::mask(dofs);
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetLine",
                &[name.into(), mask.into(), csys.into()],
            )?
            .ret)
    }

    /// Local constraints have no coordinate system; the mask applies in
    /// each joint's local axes.
    pub fn local(&self, name: &str, dofs: &[DofAxis]) -> SapResult<i32> {
        let mask = DofAxis::mask(dofs);
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetLocal",
                &[name.into(), mask.into()],
            )?
            .ret)
    }

    pub fn plate(&self, name: &str, axis: Axis, csys: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetPlate",
                &[name.into(), axis.code().into(), csys.into()],
            )?
            .ret)
    }

    pub fn rod(&self, name: &str, axis: Axis, csys: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetRod",
                &[name.into(), axis.code().into(), csys.into()],
            )?
            .ret)
    }

    /// Welds additionally carry the merge tolerance within which joints
    /// are considered coincident.
    pub fn weld(
        &self,
        name: &str,
        dofs: &[DofAxis],
        tolerance: f64,
        csys: &str,
    ) -> SapResult<i32> {
        let mask = DofAxis::mask(dofs);
        Ok(self
            .h
            .call(
                "SapModel.ConstraintDef.SetWeld",
                &[name.into(), mask.into(), tolerance.into(), csys.into()],
            )?
            .ret)
    }
}

/// Constraint definition getters. Engine masks come back as 6-wide boolean
/// arrays in UX..RZ order.
#[derive(Debug, Clone)]
pub struct ConstraintGet {
    h: Handle,
}

impl ConstraintGet {
    pub fn body(&self, name: &str) -> SapResult<(Vec<bool>, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetBody", &[name.into()])?;
        Ok((r.bools_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn beam(&self, name: &str) -> SapResult<(Axis, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetBeam", &[name.into()])?;
        Ok((Axis::from_code(r.int_at(0)?)?, r.str_at(1)?, r.ret))
    }

    pub fn diaphragm(&self, name: &str) -> SapResult<(Axis, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetDiaphragm", &[name.into()])?;
        Ok((Axis::from_code(r.int_at(0)?)?, r.str_at(1)?, r.ret))
    }

    pub fn equal(&self, name: &str) -> SapResult<(Vec<bool>, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetEqual", &[name.into()])?;
        Ok((r.bools_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn line(&self, name: &str) -> SapResult<(Vec<bool>, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetLine", &[name.into()])?;
        Ok((r.bools_at(0)?, r.str_at(1)?, r.ret))
    }

    pub fn local(&self, name: &str) -> SapResult<(Vec<bool>, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetLocal", &[name.into()])?;
        Ok((r.bools_at(0)?, r.ret))
    }

    pub fn plate(&self, name: &str) -> SapResult<(Axis, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetPlate", &[name.into()])?;
        Ok((Axis::from_code(r.int_at(0)?)?, r.str_at(1)?, r.ret))
    }

    pub fn rod(&self, name: &str) -> SapResult<(Axis, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetRod", &[name.into()])?;
        Ok((Axis::from_code(r.int_at(0)?)?, r.str_at(1)?, r.ret))
    }

    /// Returns (mask, tolerance, csys, code), in the engine's order.
    pub fn weld(&self, name: &str) -> SapResult<(Vec<bool>, f64, String, i32)> {
        let r = self
            .h
            .call("SapModel.ConstraintDef.GetWeld", &[name.into()])?;
        Ok((r.bools_at(0)?, r.num_at(1)?, r.str_at(2)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_body_forwards_expanded_mask() {
        let (engine, handle) = RecordingEngine::handle();
        let constraints = Constraints::new(handle);
        constraints
            .set
            .body("C1", &[DofAxis::UX, DofAxis::UZ], "Global")
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.ConstraintDef.SetBody");
        assert_eq!(
            call.args[1],
            Value::Bools(vec![true, false, true, false, false, false])
        );
    }

    #[test]
    fn test_weld_get_decodes_outs_in_order() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.ConstraintDef.GetWeld",
            Reply::with_outs(
                0,
                vec![
                    Value::Bools(vec![true, true, true, false, false, false]),
                    Value::Num(0.01),
                    Value::Str("Global".into()),
                ],
            ),
        );
        let constraints = Constraints::new(handle);
        let (mask, tol, csys, ret) = constraints.get.weld("W1").unwrap();
        assert_eq!(mask, vec![true, true, true, false, false, false]);
        assert_eq!(tol, 0.01);
        assert_eq!(csys, "Global");
        assert_eq!(ret, 0);
    }

    #[test]
    fn test_diaphragm_forwards_axis_code() {
        let (engine, handle) = RecordingEngine::handle();
        let constraints = Constraints::new(handle);
        constraints.set.diaphragm("D1", Axis::Z, "Global").unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Int(3));
    }

    #[test]
    fn test_constraint_type_decode() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.ConstraintDef.GetConstraintType",
            Reply::with_outs(0, vec![Value::Int(2)]),
        );
        let constraints = Constraints::new(handle);
        let (kind, ret) = constraints.constraint_type("D1").unwrap();
        assert_eq!(kind, ConstraintType::Diaphragm);
        assert_eq!(ret, 0);
    }
}
