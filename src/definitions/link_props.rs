//! Link property definitions
//!
//! Every initializer takes symbolic DOF / Fixed / Nonlinear label lists
//! and (label, value) stiffness and damping pairs; the normalizers expand
//! them into the engine's fixed-width arrays before forwarding.

use crate::bridge::Handle;
use crate::codes::{Dof, HysteresisType, LinkPropType, StiffnessTerm};
use crate::error::SapResult;

/// Link-property facade; Set and Get flavors live in sub-facades.
#[derive(Debug, Clone)]
pub struct LinkProps {
    pub set: LinkPropSet,
    pub get: LinkPropGet,
}

impl LinkProps {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: LinkPropSet { h: h.clone() },
            get: LinkPropGet { h },
        }
    }
}

/// Link-property setters.
#[derive(Debug, Clone)]
pub struct LinkPropSet {
    h: Handle,
}

impl LinkPropSet {
    /// Uncoupled linear link: 6-wide stiffness and damping arrays.
    #[allow(clippy::too_many_arguments)]
    pub fn linear(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetLinear",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    dj2.into(),
                    dj3.into(),
                    false.into(),
                    false.into(),
                ],
            )?
            .ret)
    }

    /// Coupled linear link: 21-wide lower-triangular stiffness and damping.
    #[allow(clippy::too_many_arguments)]
    pub fn linear_coupled(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        ke: &[(StiffnessTerm, f64)],
        ce: &[(StiffnessTerm, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetLinear",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    StiffnessTerm::values(ke).into(),
                    StiffnessTerm::values(ce).into(),
                    dj2.into(),
                    dj3.into(),
                    true.into(),
                    true.into(),
                ],
            )?
            .ret)
    }

    /// Multilinear elastic link shell; per-DOF curves are supplied through
    /// [`Self::multi_linear_points`].
    #[allow(clippy::too_many_arguments)]
    pub fn multi_linear_elastic(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetMultiLinearElastic",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Multilinear force-deformation points for one DOF of a multilinear
    /// link. The engine indexes this call's DOF 1-based. The pivot-point
    /// parameters only matter for [`HysteresisType::Pivot`].
    #[allow(clippy::too_many_arguments)]
    pub fn multi_linear_points(
        &self,
        name: &str,
        dof: Dof,
        forces: &[f64],
        displacements: &[f64],
        hysteresis: HysteresisType,
        a1: f64,
        a2: f64,
        b1: f64,
        b2: f64,
        eta: f64,
    ) -> SapResult<i32> {
        if forces.len() != displacements.len() {
            return Err(crate::error::SapError::InvalidArgument(format!(
                "force list ({}) and displacement list ({}) differ in length",
                forces.len(),
                displacements.len()
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetMultiLinearPoints",
                &[
                    name.into(),
                    (dof.code() + 1).into(),
                    (forces.len() as i32).into(),
                    forces.into(),
                    displacements.into(),
                    hysteresis.code().into(),
                    a1.into(),
                    a2.into(),
                    b1.into(),
                    b2.into(),
                    eta.into(),
                ],
            )?
            .ret)
    }

    /// Exponential damper.
    #[allow(clippy::too_many_arguments)]
    pub fn damper(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        c: &[(Dof, f64)],
        c_exp: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetDamper",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(c).into(),
                    Dof::values(c_exp).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Bilinear damper.
    #[allow(clippy::too_many_arguments)]
    pub fn damper_bilinear(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        c_initial: &[(Dof, f64)],
        c_yielded: &[(Dof, f64)],
        force_limit: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetDamperBilinear",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(c_initial).into(),
                    Dof::values(c_yielded).into(),
                    Dof::values(force_limit).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Gap (compression-only) link.
    #[allow(clippy::too_many_arguments)]
    pub fn gap(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        opening: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        self.gap_like("SapModel.PropLink.SetGap", name, dofs, fixed, nonlinear, ke, ce, k, opening, dj2, dj3)
    }

    /// Hook (tension-only) link.
    #[allow(clippy::too_many_arguments)]
    pub fn hook(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        opening: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        self.gap_like("SapModel.PropLink.SetHook", name, dofs, fixed, nonlinear, ke, ce, k, opening, dj2, dj3)
    }

    #[allow(clippy::too_many_arguments)]
    fn gap_like(
        &self,
        method: &str,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        opening: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                method,
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(opening).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Plastic link with Wen hysteresis.
    #[allow(clippy::too_many_arguments)]
    pub fn plastic_wen(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        yield_force: &[(Dof, f64)],
        post_yield_ratio: &[(Dof, f64)],
        yield_exponent: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetPlasticWen",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(yield_force).into(),
                    Dof::values(post_yield_ratio).into(),
                    Dof::values(yield_exponent).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Rubber (high-damping elastomeric) isolator.
    #[allow(clippy::too_many_arguments)]
    pub fn rubber_isolator(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        yield_force: &[(Dof, f64)],
        post_yield_ratio: &[(Dof, f64)],
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetRubberIsolator",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(yield_force).into(),
                    Dof::values(post_yield_ratio).into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }

    /// Friction-pendulum isolator.
    #[allow(clippy::too_many_arguments)]
    pub fn friction_isolator(
        &self,
        name: &str,
        dofs: &[Dof],
        fixed: &[Dof],
        nonlinear: &[Dof],
        ke: &[(Dof, f64)],
        ce: &[(Dof, f64)],
        k: &[(Dof, f64)],
        friction_slow: &[(Dof, f64)],
        friction_fast: &[(Dof, f64)],
        rate: &[(Dof, f64)],
        radius: &[(Dof, f64)],
        damping: f64,
        dj2: f64,
        dj3: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropLink.SetFrictionIsolator",
                &[
                    name.into(),
                    Dof::mask(dofs).into(),
                    Dof::mask(fixed).into(),
                    Dof::mask(nonlinear).into(),
                    Dof::values(ke).into(),
                    Dof::values(ce).into(),
                    Dof::values(k).into(),
                    Dof::values(friction_slow).into(),
                    Dof::values(friction_fast).into(),
                    Dof::values(rate).into(),
                    Dof::values(radius).into(),
                    damping.into(),
                    dj2.into(),
                    dj3.into(),
                ],
            )?
            .ret)
    }
}

/// Link-property getters.
#[derive(Debug, Clone)]
pub struct LinkPropGet {
    h: Handle,
}

/// Common nonlinear link data as returned by the per-type getters.
#[derive(Debug, Clone, PartialEq)]
pub struct NonlinearLinkData {
    pub dofs: Vec<bool>,
    pub fixed: Vec<bool>,
    pub nonlinear: Vec<bool>,
    pub ke: Vec<f64>,
    pub ce: Vec<f64>,
    pub params: Vec<Vec<f64>>,
    pub dj2: f64,
    pub dj3: f64,
    pub ret: i32,
}

impl LinkPropGet {
    /// The type of link property behind `name`, decoded to its symbol.
    pub fn type_oapi(&self, name: &str) -> SapResult<(LinkPropType, i32)> {
        let r = self
            .h
            .call("SapModel.PropLink.GetTypeOAPI", &[name.into()])?;
        Ok((LinkPropType::from_code(r.int_at(0)?)?, r.ret))
    }

    /// Uncoupled linear link data: (dofs, fixed, ke, ce, dj2, dj3, code).
    #[allow(clippy::type_complexity)]
    pub fn linear(
        &self,
        name: &str,
    ) -> SapResult<(Vec<bool>, Vec<bool>, Vec<f64>, Vec<f64>, f64, f64, i32)> {
        let r = self.h.call("SapModel.PropLink.GetLinear", &[name.into()])?;
        Ok((
            r.bools_at(0)?,
            r.bools_at(1)?,
            r.nums_at(2)?,
            r.nums_at(3)?,
            r.num_at(4)?,
            r.num_at(5)?,
            r.ret,
        ))
    }

    /// Multilinear points for one DOF: (forces, displacements, hysteresis,
    /// code). The DOF is 1-based on the wire, like the setter.
    pub fn multi_linear_points(
        &self,
        name: &str,
        dof: Dof,
    ) -> SapResult<(Vec<f64>, Vec<f64>, HysteresisType, i32)> {
        let r = self.h.call(
            "SapModel.PropLink.GetMultiLinearPoints",
            &[name.into(), (dof.code() + 1).into()],
        )?;
        Ok((
            r.nums_at(0)?,
            r.nums_at(1)?,
            HysteresisType::from_code(r.int_at(2)?)?,
            r.ret,
        ))
    }

    pub fn multi_linear_elastic(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetMultiLinearElastic", name, 0)
    }

    pub fn damper(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetDamper", name, 3)
    }

    pub fn gap(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetGap", name, 2)
    }

    pub fn hook(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetHook", name, 2)
    }

    pub fn plastic_wen(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetPlasticWen", name, 4)
    }

    pub fn rubber_isolator(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetRubberIsolator", name, 3)
    }

    pub fn friction_isolator(&self, name: &str) -> SapResult<NonlinearLinkData> {
        self.nonlinear_data("SapModel.PropLink.GetFrictionIsolator", name, 5)
    }

    /// Decodes the shared getter layout: three masks, ke, ce, then
    /// `extra_arrays` type-specific 6-wide arrays, then dj2/dj3.
    fn nonlinear_data(
        &self,
        method: &str,
        name: &str,
        extra_arrays: usize,
    ) -> SapResult<NonlinearLinkData> {
        let r = self.h.call(method, &[name.into()])?;
        let mut params = Vec::with_capacity(extra_arrays);
        for i in 0..extra_arrays {
            params.push(r.nums_at(5 + i)?);
        }
        Ok(NonlinearLinkData {
            dofs: r.bools_at(0)?,
            fixed: r.bools_at(1)?,
            nonlinear: r.bools_at(2)?,
            ke: r.nums_at(3)?,
            ce: r.nums_at(4)?,
            params,
            dj2: r.num_at(5 + extra_arrays)?,
            dj3: r.num_at(6 + extra_arrays)?,
            ret: r.ret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    #[test]
    fn test_multi_linear_points_forwards_one_based_dof() {
        let (engine, handle) = RecordingEngine::handle();
        let props = LinkProps::new(handle);
        props
            .set
            .multi_linear_points(
                "L2",
                Dof::U1,
                &[-10.0, 0.0, 10.0],
                &[-0.1, 0.0, 0.1],
                HysteresisType::Kinematic,
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.PropLink.SetMultiLinearPoints");
        assert_eq!(call.args[1], Value::Int(1));
        assert_eq!(call.args[2], Value::Int(3));
        assert_eq!(call.args[5], Value::Int(HysteresisType::Kinematic.code()));
    }

    #[test]
    fn test_multi_linear_points_rejects_ragged_tables() {
        let (engine, handle) = RecordingEngine::handle();
        let props = LinkProps::new(handle);
        let err = props
            .set
            .multi_linear_points(
                "L2",
                Dof::U1,
                &[0.0, 1.0],
                &[0.0],
                HysteresisType::Isotropic,
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
            )
            .unwrap_err();
        assert!(matches!(err, crate::error::SapError::InvalidArgument(_)));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_type_oapi_decodes_plastic_wen() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.PropLink.GetTypeOAPI",
            Reply::with_outs(0, vec![Value::Int(5)]),
        );
        let props = LinkProps::new(handle);
        let (kind, ret) = props.get.type_oapi("L1").unwrap();
        assert_eq!(kind, LinkPropType::PlasticWen);
        assert_eq!(ret, 0);
    }

    #[test]
    fn test_linear_expands_value_dictionaries() {
        let (engine, handle) = RecordingEngine::handle();
        let props = LinkProps::new(handle);
        props
            .set
            .linear(
                "ISO",
                &[Dof::U1, Dof::U2],
                &[],
                &[(Dof::U1, 1e6), (Dof::U2, 2e6)],
                &[],
                0.0,
                0.0,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(
            call.args[3],
            Value::Nums(vec![1e6, 2e6, 0.0, 0.0, 0.0, 0.0])
        );
        // Uncoupled flags trail the call.
        assert_eq!(call.args[7], Value::Bool(false));
    }

    #[test]
    fn test_linear_coupled_uses_21_wide_arrays() {
        let (engine, handle) = RecordingEngine::handle();
        let props = LinkProps::new(handle);
        props
            .set
            .linear_coupled(
                "ISO",
                &[Dof::U1],
                &[],
                &[(StiffnessTerm::U1U1, 5.0), (StiffnessTerm::R3R3, 1.0)],
                &[],
                0.0,
                0.0,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        match &call.args[3] {
            Value::Nums(v) => {
                assert_eq!(v.len(), 21);
                assert_eq!(v[0], 5.0);
                assert_eq!(v[20], 1.0);
            }
            other => panic!("expected 21-wide array, got {:?}", other),
        }
    }
}
