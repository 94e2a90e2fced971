//! Load case definitions, one sub-facade per analysis case type

mod direct_history;
mod modal;
mod response_spectrum;
mod static_cases;

pub use direct_history::{DirHistLinear, DirHistNonlinear, HistoryLoad};
pub use modal::{ModalEigen, ModalHistLinear, ModalHistNonlinear, ModalRitz};
pub use response_spectrum::{ResponseSpectrum, SpectrumLoad};
pub use static_cases::{Buckling, StaticLinear, StaticLinearMultistep, StaticNonlinear};

use crate::bridge::{Handle, Value};
use crate::error::{SapError, SapResult};

/// One scaled load applied in a static, buckling or modal case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseLoad {
    /// Engine load kind, `"Load"` for a load pattern or `"Accel"` for a
    /// ground acceleration.
    pub load_type: String,
    /// Load pattern name, or the acceleration direction label (`"UX"` ..
    /// `"RZ"`).
    pub load_name: String,
    pub scale_factor: f64,
}

impl CaseLoad {
    /// A scaled load pattern entry.
    pub fn pattern(name: &str, scale_factor: f64) -> Self {
        Self {
            load_type: "Load".into(),
            load_name: name.into(),
            scale_factor,
        }
    }

    /// A scaled ground-acceleration entry along `direction` (`"UX"` ..
    /// `"RZ"`).
    pub fn accel(direction: &str, scale_factor: f64) -> Self {
        Self {
            load_type: "Accel".into(),
            load_name: direction.into(),
            scale_factor,
        }
    }
}

/// Splits a load list into the engine's parallel column arrays, rejecting
/// empty lists.
pub(crate) fn case_load_columns(loads: &[CaseLoad]) -> SapResult<[Value; 4]> {
    if loads.is_empty() {
        return Err(SapError::InvalidArgument(
            "a load case needs at least one load entry".into(),
        ));
    }
    let types: Vec<String> = loads.iter().map(|l| l.load_type.clone()).collect();
    let names: Vec<String> = loads.iter().map(|l| l.load_name.clone()).collect();
    let factors: Vec<f64> = loads.iter().map(|l| l.scale_factor).collect();
    Ok([
        (loads.len() as i32).into(),
        types.into(),
        names.into(),
        factors.into(),
    ])
}

/// Load case facade. Lifecycle operations live here; per-type setters live
/// in the typed sub-facades.
#[derive(Debug, Clone)]
pub struct LoadCases {
    h: Handle,
    pub static_linear: StaticLinear,
    pub static_linear_multistep: StaticLinearMultistep,
    pub static_nonlinear: StaticNonlinear,
    pub buckling: Buckling,
    pub dir_hist_linear: DirHistLinear,
    pub dir_hist_nonlinear: DirHistNonlinear,
    pub modal_eigen: ModalEigen,
    pub modal_ritz: ModalRitz,
    pub modal_hist_linear: ModalHistLinear,
    pub modal_hist_nonlinear: ModalHistNonlinear,
    pub response_spectrum: ResponseSpectrum,
}

impl LoadCases {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            static_linear: StaticLinear::new(h.clone()),
            static_linear_multistep: StaticLinearMultistep::new(h.clone()),
            static_nonlinear: StaticNonlinear::new(h.clone()),
            buckling: Buckling::new(h.clone()),
            dir_hist_linear: DirHistLinear::new(h.clone()),
            dir_hist_nonlinear: DirHistNonlinear::new(h.clone()),
            modal_eigen: ModalEigen::new(h.clone()),
            modal_ritz: ModalRitz::new(h.clone()),
            modal_hist_linear: ModalHistLinear::new(h.clone()),
            modal_hist_nonlinear: ModalHistNonlinear::new(h.clone()),
            response_spectrum: ResponseSpectrum::new(h.clone()),
            h,
        }
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.LoadCases.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadCases.Delete", &[name.into()])?
            .ret)
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.LoadCases.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;

    #[test]
    fn test_case_load_columns_split() {
        let cols = case_load_columns(&[
            CaseLoad::pattern("DEAD", 1.0),
            CaseLoad::accel("UX", 9.81),
        ])
        .unwrap();
        assert_eq!(cols[0], Value::Int(2));
        assert_eq!(
            cols[1],
            Value::Strs(vec!["Load".into(), "Accel".into()])
        );
        assert_eq!(cols[3], Value::Nums(vec![1.0, 9.81]));
    }

    #[test]
    fn test_empty_load_list_rejected() {
        assert!(case_load_columns(&[]).is_err());
    }

    #[test]
    fn test_lifecycle_forwards() {
        let (engine, handle) = RecordingEngine::handle();
        let cases = LoadCases::new(handle);
        cases.change_name("LC1", "LC2").unwrap();
        cases.delete("LC2").unwrap();
        assert_eq!(engine.last_call().unwrap().method, "SapModel.LoadCases.Delete");
        assert_eq!(engine.call_count(), 2);
    }
}
