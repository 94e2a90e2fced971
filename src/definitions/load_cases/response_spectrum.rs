//! Response-spectrum load cases

use crate::bridge::{Handle, Value};
use crate::codes::{Dof, DirectionalCombo};
use crate::error::{SapError, SapResult};

/// One spectrum applied along a local direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumLoad {
    /// Direction the spectrum acts in.
    pub direction: Dof,
    /// Response-spectrum function name.
    pub function: String,
    pub scale_factor: f64,
    pub csys: String,
    pub angle: f64,
}

impl SpectrumLoad {
    /// A spectrum entry in the global coordinate system with zero angle.
    pub fn new(direction: Dof, function: &str, scale_factor: f64) -> Self {
        Self {
            direction,
            function: function.into(),
            scale_factor,
            csys: "Global".into(),
            angle: 0.0,
        }
    }
}

/// Response-spectrum case.
#[derive(Debug, Clone)]
pub struct ResponseSpectrum {
    h: Handle,
}

impl ResponseSpectrum {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetCase",
                &[name.into()],
            )?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_loads(&self, name: &str, loads: &[SpectrumLoad]) -> SapResult<i32> {
        if loads.is_empty() {
            return Err(SapError::InvalidArgument(
                "a response-spectrum case needs at least one load entry".into(),
            ));
        }
        let directions: Vec<String> = loads
            .iter()
            .map(|l| l.direction.label().to_string())
            .collect();
        let functions: Vec<String> = loads.iter().map(|l| l.function.clone()).collect();
        let factors: Vec<f64> = loads.iter().map(|l| l.scale_factor).collect();
        let csys: Vec<String> = loads.iter().map(|l| l.csys.clone()).collect();
        let angles: Vec<f64> = loads.iter().map(|l| l.angle).collect();
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetLoads",
                &[
                    name.into(),
                    (loads.len() as i32).into(),
                    Value::Strs(directions),
                    Value::Strs(functions),
                    Value::Nums(factors),
                    Value::Strs(csys),
                    Value::Nums(angles),
                ],
            )?
            .ret)
    }

    /// Directional combination rule; `scale_factor` only matters for CQC3.
    pub fn set_dir_comb(
        &self,
        name: &str,
        combo: DirectionalCombo,
        scale_factor: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetDirComb",
                &[name.into(), combo.code().into(), scale_factor.into()],
            )?
            .ret)
    }

    /// Accidental eccentricity ratio applied to all diaphragms.
    pub fn set_eccentricity(&self, name: &str, eccentricity: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetEccentricity",
                &[name.into(), eccentricity.into()],
            )?
            .ret)
    }

    /// Per-diaphragm eccentricity override, as an absolute length.
    pub fn set_diaphragm_eccentricity(
        &self,
        name: &str,
        diaphragm: &str,
        eccentricity: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetDiaphragmEccentricityOverride",
                &[name.into(), diaphragm.into(), eccentricity.into()],
            )?
            .ret)
    }

    /// Modal case supplying the modes, empty for the program default.
    pub fn set_modal_case(&self, name: &str, modal_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetModalCase",
                &[name.into(), modal_case.into()],
            )?
            .ret)
    }

    /// Constant modal damping ratio applied to every mode.
    pub fn set_damp_constant(&self, name: &str, damping: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ResponseSpectrum.SetDampConstant",
                &[name.into(), damping.into()],
            )?
            .ret)
    }
}
