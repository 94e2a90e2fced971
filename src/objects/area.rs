//! Area objects

use crate::bridge::Handle;
use crate::codes::ItemType;
use crate::error::{SapError, SapResult};

/// Area object manager.
#[derive(Debug, Clone)]
pub struct AreaObj {
    h: Handle,
    pub set: AreaSet,
    pub get: AreaGet,
}

impl AreaObj {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: AreaSet { h: h.clone() },
            get: AreaGet { h: h.clone() },
            h,
        }
    }

    /// Adds an area from corner coordinates, one entry per corner in each
    /// list. Returns the assigned name.
    pub fn add_by_coord(
        &self,
        x: &[f64],
        y: &[f64],
        z: &[f64],
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        let n = x.len();
        if n < 3 || y.len() != n || z.len() != n {
            return Err(SapError::InvalidArgument(format!(
                "corner lists must agree and hold at least 3 points, got {}/{}/{}",
                x.len(),
                y.len(),
                z.len()
            )));
        }
        let r = self.h.call(
            "SapModel.AreaObj.AddByCoord",
            &[
                (n as i32).into(),
                x.into(),
                y.into(),
                z.into(),
                property.into(),
                user_name.unwrap_or("").into(),
            ],
        )?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Adds an area spanning existing corner points. Returns the assigned
    /// name.
    pub fn add_by_point(
        &self,
        points: &[&str],
        property: &str,
        user_name: Option<&str>,
    ) -> SapResult<(String, i32)> {
        if points.len() < 3 {
            return Err(SapError::InvalidArgument(format!(
                "an area needs at least 3 corner points, got {}",
                points.len()
            )));
        }
        let r = self.h.call(
            "SapModel.AreaObj.AddByPoint",
            &[
                (points.len() as i32).into(),
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
                "SapModel.AreaObj.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.AreaObj.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.Delete",
                &[name.into(), item_type.code().into()],
            )?
            .ret)
    }
}

/// Area assignment setters.
#[derive(Debug, Clone)]
pub struct AreaSet {
    h: Handle,
}

impl AreaSet {
    pub fn property(&self, name: &str, property: &str, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetProperty",
                &[name.into(), property.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Local-axes rotation about the area normal, in degrees.
    pub fn local_axes(&self, name: &str, angle: f64, item_type: ItemType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetLocalAxes",
                &[name.into(), angle.into(), item_type.code().into()],
            )?
            .ret)
    }

    /// Uniform surface load. `direction` follows the engine's 1..11
    /// direction codes.
    #[allow(clippy::too_many_arguments)]
    pub fn load_uniform(
        &self,
        name: &str,
        pattern: &str,
        value: f64,
        direction: i32,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetLoadUniform",
                &[
                    name.into(),
                    pattern.into(),
                    value.into(),
                    direction.into(),
                    replace.into(),
                    "Global".into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Uniform load transferred to surrounding frames. `distribution` is 1
    /// for one-way and 2 for two-way spanning.
    #[allow(clippy::too_many_arguments)]
    pub fn load_uniform_to_frame(
        &self,
        name: &str,
        pattern: &str,
        value: f64,
        direction: i32,
        distribution: i32,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetLoadUniformToFrame",
                &[
                    name.into(),
                    pattern.into(),
                    value.into(),
                    direction.into(),
                    distribution.into(),
                    replace.into(),
                    "Global".into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Additional surface mass per unit area.
    pub fn mass(
        &self,
        name: &str,
        mass_per_area: f64,
        replace: bool,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetMass",
                &[
                    name.into(),
                    mass_per_area.into(),
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
                "SapModel.AreaObj.SetGroupAssign",
                &[
                    name.into(),
                    group.into(),
                    remove.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }

    /// Automatic meshing into an n1 by n2 grid, or by maximum element size
    /// when `mesh_type` selects size-driven meshing.
    #[allow(clippy::too_many_arguments)]
    pub fn auto_mesh(
        &self,
        name: &str,
        mesh_type: i32,
        n1: i32,
        n2: i32,
        max_size1: f64,
        max_size2: f64,
        item_type: ItemType,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.AreaObj.SetAutoMesh",
                &[
                    name.into(),
                    mesh_type.into(),
                    n1.into(),
                    n2.into(),
                    max_size1.into(),
                    max_size2.into(),
                    item_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Area assignment getters.
#[derive(Debug, Clone)]
pub struct AreaGet {
    h: Handle,
}

impl AreaGet {
    pub fn property(&self, name: &str) -> SapResult<(String, i32)> {
        let r = self.h.call("SapModel.AreaObj.GetProperty", &[name.into()])?;
        Ok((r.str_at(0)?, r.ret))
    }

    /// Corner point names in connectivity order.
    pub fn points(&self, name: &str) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.AreaObj.GetPoints", &[name.into()])?;
        Ok((r.strs_at(0)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.AreaObj.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}
