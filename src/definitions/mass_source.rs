//! Mass source definitions

use crate::bridge::Handle;
use crate::error::{SapError, SapResult};

/// Mass source facade.
#[derive(Debug, Clone)]
pub struct MassSource {
    h: Handle,
}

impl MassSource {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    /// Defines a mass source from element mass, additional masses and/or
    /// scaled load patterns.
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &self,
        name: &str,
        mass_from_elements: bool,
        mass_from_masses: bool,
        mass_from_loads: bool,
        is_default: bool,
        load_patterns: &[&str],
        scale_factors: &[f64],
    ) -> SapResult<i32> {
        if load_patterns.len() != scale_factors.len() {
            return Err(SapError::InvalidArgument(format!(
                "pattern list ({}) and scale-factor list ({}) differ in length",
                load_patterns.len(),
                scale_factors.len()
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.SourceMass.SetMassSource",
                &[
                    name.into(),
                    mass_from_elements.into(),
                    mass_from_masses.into(),
                    mass_from_loads.into(),
                    is_default.into(),
                    (load_patterns.len() as i32).into(),
                    load_patterns.into(),
                    scale_factors.into(),
                ],
            )?
            .ret)
    }

    /// Reads a mass source definition back: (elements, masses, loads,
    /// is-default, patterns, scale factors, code).
    #[allow(clippy::type_complexity)]
    pub fn get(
        &self,
        name: &str,
    ) -> SapResult<(bool, bool, bool, bool, Vec<String>, Vec<f64>, i32)> {
        let r = self
            .h
            .call("SapModel.SourceMass.GetMassSource", &[name.into()])?;
        Ok((
            r.bool_at(0)?,
            r.bool_at(1)?,
            r.bool_at(2)?,
            r.bool_at(3)?,
            r.strs_at(4)?,
            r.nums_at(5)?,
            r.ret,
        ))
    }

    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.SourceMass.Delete", &[name.into()])?
            .ret)
    }

    /// Marks `name` as the default mass source.
    pub fn set_default(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.SourceMass.SetDefault", &[name.into()])?
            .ret)
    }
}
