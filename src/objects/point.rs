//! Point objects

use crate::bridge::Handle;
use crate::codes::{DofAxis, ItemType};
use crate::error::SapResult;

/// Point object manager.
#[derive(Debug, Clone)]
pub struct PointObj {
    h: Handle,
    pub set: PointSet,
    pub get: PointGet,
}

impl PointObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: PointSet { h: h.clone() },
            get: PointGet { h: h.clone() },
            h,
        }
    }

    /// Adds a point at global cartesian coordinates. Returns the name the
    /// engine assigned (the requested `user_name` when given).
    pub fn add_cartesian(
        &self,
        x: f64,
        y: f64,
        z: f64,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let r = self.h.call(
            "SapModel.PointObj.AddCartesian",
            &[
                x.into(),
                y.into(),
                z.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds a point in the X-Z plane of a planar model (global Y is zero).
    pub fn add_cartesian_2d(
        &self,
        x: f64,
        z: f64,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        self.add_cartesian(x, 0.0, z, user_name)
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.PointObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    /// Deletes unconnected points only; points in use are left alone.
    pub fn delete_special(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.DeleteSpecialPoint",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Point assignment setters.
#[derive(Debug, Clone)]
pub struct PointSet {
    h: Handle,
}

impl PointSet {
    /// Restrains the listed global DOFs (`"UX"` .. `"RZ"`), freeing the
    /// rest.
    pub fn restraint(
        &self,
        name: &str,
        dofs: &[&str],
        item_type: ItemType,
    ) -> SapResult<i32> {
        let mask = DofAxis::parse_mask(dofs)?;
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetRestraint",
                &[name.into(), mask.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Uncoupled spring stiffness per global DOF.
    pub fn spring(
        &self,
        name: &str,
        stiffness: [f64; 6],
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetSpring",
                &[name.into(), stiffness.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Lumped mass per global DOF.
    pub fn mass(&self, name: &str, mass: [f64; 6], item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetMass",
                &[name.into(), mass.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Point force load in pattern `pattern`: (Fx, Fy, Fz, Mx, My, Mz).
    pub fn load_force(
        &self,
        name: &str,
        pattern: &str,
        force: [f64; 6],
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetLoadForce",
                &[
                    name.into(),
                    pattern.into(),
                    force.into(),
                    replace.into(),
                    "Global".into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Ground-displacement load in pattern `pattern`.
    pub fn load_displacement(
        &self,
        name: &str,
        pattern: &str,
        displacement: [f64; 6],
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetLoadDispl",
                &[
                    name.into(),
                    pattern.into(),
                    displacement.into(),
                    replace.into(),
                    "Global".into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Assigns the point to a named constraint.
    pub fn constraint(
        &self,
        name: &str,
        constraint_name: &str,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetConstraint",
                &[name.into(), constraint_name.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Adds the point to (or removes it from) a group.
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
                "SapModel.PointObj.SetGroupAssign",
                &[
                    name.into(),
                    group.into(),
                    remove.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Local-axes rotation angles about Z, Y' and X'' in degrees.
    pub fn local_axes(
        &self,
        name: &str,
        a: f64,
        b: f64,
        c: f64,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PointObj.SetLocalAxes",
                &[
                    name.into(),
                    a.into(),
                    b.into(),
                    c.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Point assignment getters.
#[derive(Debug, Clone)]
pub struct PointGet {
    h: Handle,
}

impl PointGet {
    /// Global cartesian coordinates of the point.
    pub fn coord_cartesian(&self, name: &str) -> SapResult<(f64, f64, f64, i32)> {
        let r = self
            .h
            .call("SapModel.PointObj.GetCoordCartesian", &[name.into()])?;
        Ok((r.num_at(0)?, r.num_at(1)?, r.num_at(2)?, r.ret))
    }

    /// Restraint mask in UX..RZ order.
    pub fn restraint(&self, name: &str) -> SapResult<(Vec<bool>, i32)> {
        let r = self
            .h
            .call("SapModel.PointObj.GetRestraint", &[name.into()])?;
        Ok((r.bools_at(0)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.PointObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}
