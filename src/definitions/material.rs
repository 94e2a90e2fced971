//! Material property definitions

use crate::bridge::Handle;
use crate::codes::{HysteresisType, MaterialType};
use crate::error::{SapError, SapResult};

/// Material facade; Set and Get flavors live in sub-facades.
#[derive(Debug, Clone)]
pub struct Material {
    h: Handle,
    pub set: MaterialSet,
    pub get: MaterialGet,
}

impl Material {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: MaterialSet { h: h.clone() },
            get: MaterialGet { h: h.clone() },
            h,
        }
    }

    /// Adds a standard material from the engine's regional library, then
    /// renames the engine-assigned default name to `name`.
    pub fn add(
        &self,
        name: &str,
        mat_type: MaterialType,
        region: &str,
        standard: &str,
        grade: &str,
    ) -> SapResult<i32> {
        let r = self.h.call(
            "SapModel.PropMaterial.AddMaterial",
            &[
                mat_type.code().into(),
                region.into(),
                standard.into(),
                grade.into(),
            ],
        )?;
        if r.ret != 0 {
            return Ok(r.ret);
        }
        let assigned = r.str_at(0)?;
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.ChangeName",
                &[assigned.into(), name.into()],
            )?
            .ret)
    }

    /// Deletes the material `name`.
    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.PropMaterial.Delete", &[name.into()])?
            .ret)
    }

    /// Number of defined materials, optionally limited to one type.
    pub fn count(&self, mat_type: Option<MaterialType>) -> SapResult<(i32, i32)> {
        let code = mat_type.map(|t| t.code()).unwrap_or(0);
        let r = self
            .h
            .call("SapModel.PropMaterial.Count", &[code.into()])?;
        Ok((r.int_at(0)?, r.ret))
    }
}

/// Material setters.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    h: Handle,
}

impl MaterialSet {
    /// Isotropic mechanical properties: modulus of elasticity, Poisson's
    /// ratio, thermal expansion coefficient.
    pub fn isotropic(&self, name: &str, e: f64, poisson: f64, thermal: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetMPIsotropic",
                &[name.into(), e.into(), poisson.into(), thermal.into()],
            )?
            .ret)
    }

    /// Weight per unit volume (engine option 1).
    pub fn weight_per_volume(&self, name: &str, value: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetWeightAndMass",
                &[name.into(), 1.into(), value.into()],
            )?
            .ret)
    }

    /// Mass per unit volume (engine option 2).
    pub fn mass_per_volume(&self, name: &str, value: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetWeightAndMass",
                &[name.into(), 2.into(), value.into()],
            )?
            .ret)
    }

    /// User stress-strain curve as tabulated (strain, stress) points.
    pub fn ss_curve(&self, name: &str, strains: &[f64], stresses: &[f64]) -> SapResult<i32> {
        if strains.len() != stresses.len() {
            return Err(SapError::InvalidArgument(format!(
                "strain list ({}) and stress list ({}) differ in length",
                strains.len(),
                stresses.len()
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetSSCurve",
                &[
                    name.into(),
                    (strains.len() as i32).into(),
                    strains.into(),
                    stresses.into(),
                ],
            )?
            .ret)
    }

    /// Steel design overwrites with parametric stress-strain data.
    #[allow(clippy::too_many_arguments)]
    pub fn steel(
        &self,
        name: &str,
        fy: f64,
        fu: f64,
        expected_fy: f64,
        expected_fu: f64,
        ss_type: i32,
        ss_hysteresis: HysteresisType,
        strain_at_hardening: f64,
        strain_at_max_stress: f64,
        strain_at_rupture: f64,
        final_slope: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetOSteel_1",
                &[
                    name.into(),
                    fy.into(),
                    fu.into(),
                    expected_fy.into(),
                    expected_fu.into(),
                    ss_type.into(),
                    ss_hysteresis.code().into(),
                    strain_at_hardening.into(),
                    strain_at_max_stress.into(),
                    strain_at_rupture.into(),
                    final_slope.into(),
                ],
            )?
            .ret)
    }

    /// Concrete design overwrites.
    #[allow(clippy::too_many_arguments)]
    pub fn concrete(
        &self,
        name: &str,
        fc: f64,
        is_lightweight: bool,
        shear_strength_factor: f64,
        ss_type: i32,
        ss_hysteresis: HysteresisType,
        strain_at_fc: f64,
        strain_ultimate: f64,
        final_slope: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetOConcrete_1",
                &[
                    name.into(),
                    fc.into(),
                    is_lightweight.into(),
                    shear_strength_factor.into(),
                    ss_type.into(),
                    ss_hysteresis.code().into(),
                    strain_at_fc.into(),
                    strain_ultimate.into(),
                    final_slope.into(),
                ],
            )?
            .ret)
    }

    /// Rebar design overwrites.
    #[allow(clippy::too_many_arguments)]
    pub fn rebar(
        &self,
        name: &str,
        fy: f64,
        fu: f64,
        expected_fy: f64,
        expected_fu: f64,
        ss_type: i32,
        ss_hysteresis: HysteresisType,
        strain_at_hardening: f64,
        strain_ultimate: f64,
        final_slope: f64,
        use_caltrans_defaults: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetORebar_1",
                &[
                    name.into(),
                    fy.into(),
                    fu.into(),
                    expected_fy.into(),
                    expected_fu.into(),
                    ss_type.into(),
                    ss_hysteresis.code().into(),
                    strain_at_hardening.into(),
                    strain_ultimate.into(),
                    final_slope.into(),
                    use_caltrans_defaults.into(),
                ],
            )?
            .ret)
    }

    /// Tendon design overwrites.
    pub fn tendon(
        &self,
        name: &str,
        fy: f64,
        fu: f64,
        ss_type: i32,
        ss_hysteresis: HysteresisType,
        final_slope: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropMaterial.SetOTendon_1",
                &[
                    name.into(),
                    fy.into(),
                    fu.into(),
                    ss_type.into(),
                    ss_hysteresis.code().into(),
                    final_slope.into(),
                ],
            )?
            .ret)
    }
}

/// Material getters.
#[derive(Debug, Clone)]
pub struct MaterialGet {
    h: Handle,
}

impl MaterialGet {
    /// Isotropic properties: (E, Poisson, thermal coefficient, G, code).
    pub fn isotropic(&self, name: &str) -> SapResult<(f64, f64, f64, f64, i32)> {
        let r = self
            .h
            .call("SapModel.PropMaterial.GetMPIsotropic", &[name.into()])?;
        Ok((
            r.num_at(0)?,
            r.num_at(1)?,
            r.num_at(2)?,
            r.num_at(3)?,
            r.ret,
        ))
    }

    /// The design type of material `name`, decoded.
    pub fn type_oapi(&self, name: &str) -> SapResult<(MaterialType, i32)> {
        let r = self
            .h
            .call("SapModel.PropMaterial.GetTypeOAPI", &[name.into()])?;
        Ok((MaterialType::from_code(r.int_at(0)?)?, r.ret))
    }

    /// Weight and mass per unit volume: (weight, mass, code).
    pub fn weight_and_mass(&self, name: &str) -> SapResult<(f64, f64, i32)> {
        let r = self
            .h
            .call("SapModel.PropMaterial.GetWeightAndMass", &[name.into()])?;
        Ok((r.num_at(0)?, r.num_at(1)?, r.ret))
    }

    /// Names of all defined materials.
    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.PropMaterial.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_add_renames_engine_default() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.PropMaterial.AddMaterial",
            Reply::with_outs(0, vec![Value::Str("A992Fy50".into())]),
        );
        let material = Material::new(handle);
        let ret = material
            .add("GIRDER", MaterialType::Steel, "United States", "ASTM A992", "Grade 50")
            .unwrap();
        assert_eq!(ret, 0);
        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].method, "SapModel.PropMaterial.ChangeName");
        assert_eq!(calls[1].args[0], Value::Str("A992Fy50".into()));
        assert_eq!(calls[1].args[1], Value::Str("GIRDER".into()));
    }

    #[test]
    fn test_add_stops_on_engine_failure() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub("SapModel.PropMaterial.AddMaterial", Reply::code(1));
        let material = Material::new(handle);
        assert_eq!(
            material
                .add("M", MaterialType::Concrete, "Europe", "EN 1992", "C30/37")
                .unwrap(),
            1
        );
        assert_eq!(engine.call_count(), 1);
    }

    #[test]
    fn test_ss_curve_forwards_point_count() {
        let (engine, handle) = RecordingEngine::handle();
        let material = Material::new(handle);
        material
            .set
            .ss_curve("M", &[0.0, 0.002, 0.01], &[0.0, 350e6, 450e6])
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Int(3));
    }

    #[test]
    fn test_ss_curve_rejects_ragged_lists() {
        let (engine, handle) = RecordingEngine::handle();
        let material = Material::new(handle);
        let err = material
            .set
            .ss_curve("S355", &[0.0, 0.001, 0.002], &[0.0, 355e6])
            .unwrap_err();
        assert!(matches!(err, crate::error::SapError::InvalidArgument(_)));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_steel_overwrite_forwards_hysteresis_code() {
        let (engine, handle) = RecordingEngine::handle();
        let material = Material::new(handle);
        material
            .set
            .steel(
                "S355",
                355e6,
                510e6,
                390e6,
                560e6,
                1,
                HysteresisType::Kinematic,
                0.015,
                0.11,
                0.17,
                -0.1,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.PropMaterial.SetOSteel_1");
        assert_eq!(call.args[6], Value::Int(1));
    }
}
