//! Static and buckling load cases

use super::{case_load_columns, CaseLoad};
use crate::bridge::Handle;
use crate::error::SapResult;

/// Linear static case.
#[derive(Debug, Clone)]
pub struct StaticLinear {
    h: Handle,
}

impl StaticLinear {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    /// Initializes `name` as a linear static case, resetting it to defaults
    /// if it already exists.
    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadCases.StaticLinear.SetCase", &[name.into()])?
            .ret)
    }

    /// Stiffness source: zero-stress state when `initial_case` is empty,
    /// otherwise the end state of that case.
    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticLinear.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_loads(&self, name: &str, loads: &[CaseLoad]) -> SapResult<i32> {
        let [count, types, names, factors] = case_load_columns(loads)?;
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticLinear.SetLoads",
                &[name.into(), count, types, names, factors],
            )?
            .ret)
    }
}

/// Linear multistep static case.
#[derive(Debug, Clone)]
pub struct StaticLinearMultistep {
    h: Handle,
}

impl StaticLinearMultistep {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticLinearMultistep.SetCase",
                &[name.into()],
            )?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticLinearMultistep.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_loads(&self, name: &str, loads: &[CaseLoad]) -> SapResult<i32> {
        let [count, types, names, factors] = case_load_columns(loads)?;
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticLinearMultistep.SetLoads",
                &[name.into(), count, types, names, factors],
            )?
            .ret)
    }
}

/// Nonlinear static case.
#[derive(Debug, Clone)]
pub struct StaticNonlinear {
    h: Handle,
}

impl StaticNonlinear {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetCase",
                &[name.into()],
            )?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_loads(&self, name: &str, loads: &[CaseLoad]) -> SapResult<i32> {
        let [count, types, names, factors] = case_load_columns(loads)?;
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetLoads",
                &[name.into(), count, types, names, factors],
            )?
            .ret)
    }

    /// Modal case whose modes drive modal load application, empty for none.
    pub fn set_modal_case(&self, name: &str, modal_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetModalCase",
                &[name.into(), modal_case.into()],
            )?
            .ret)
    }

    /// Iteration and stepping limits for the nonlinear solution.
    #[allow(clippy::too_many_arguments)]
    pub fn set_solution_control(
        &self,
        name: &str,
        max_total_steps: i32,
        max_null_steps: i32,
        max_iterations: i32,
        convergence_tol: f64,
        use_event_stepping: bool,
        event_tol: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetSolControlParameters",
                &[
                    name.into(),
                    max_total_steps.into(),
                    max_null_steps.into(),
                    max_iterations.into(),
                    convergence_tol.into(),
                    use_event_stepping.into(),
                    event_tol.into(),
                ],
            )?
            .ret)
    }

    /// Which solution states are kept for output.
    pub fn set_results_saved(
        &self,
        name: &str,
        save_multiple_steps: bool,
        min_saved_states: i32,
        max_saved_states: i32,
        positive_increments_only: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.StaticNonlinear.SetResultsSaved",
                &[
                    name.into(),
                    save_multiple_steps.into(),
                    min_saved_states.into(),
                    max_saved_states.into(),
                    positive_increments_only.into(),
                ],
            )?
            .ret)
    }
}

/// Buckling case.
#[derive(Debug, Clone)]
pub struct Buckling {
    h: Handle,
}

impl Buckling {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadCases.Buckling.SetCase", &[name.into()])?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.Buckling.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_loads(&self, name: &str, loads: &[CaseLoad]) -> SapResult<i32> {
        let [count, types, names, factors] = case_load_columns(loads)?;
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.Buckling.SetLoads",
                &[name.into(), count, types, names, factors],
            )?
            .ret)
    }

    /// Number of buckling modes sought and the eigenvalue tolerance.
    pub fn set_parameters(
        &self,
        name: &str,
        num_modes: i32,
        eigen_tol: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.Buckling.SetParameters",
                &[name.into(), num_modes.into(), eigen_tol.into()],
            )?
            .ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_static_linear_set_loads_columns() {
        let (engine, handle) = RecordingEngine::handle();
        let case = StaticLinear::new(handle);
        case.set_case("DEAD").unwrap();
        case.set_loads(
            "DEAD",
            &[CaseLoad::pattern("DEAD", 1.0), CaseLoad::pattern("SDL", 1.0)],
        )
        .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.LoadCases.StaticLinear.SetLoads");
        assert_eq!(call.args[1], Value::Int(2));
        assert_eq!(
            call.args[3],
            Value::Strs(vec!["DEAD".into(), "SDL".into()])
        );
    }

    #[test]
    fn test_buckling_parameters_forward() {
        let (engine, handle) = RecordingEngine::handle();
        let case = Buckling::new(handle);
        case.set_parameters("BUCK", 6, 1e-9).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Int(6));
        assert_eq!(call.args[2], Value::Num(1e-9));
    }

    #[test]
    fn test_nonlinear_solution_control() {
        let (engine, handle) = RecordingEngine::handle();
        let case = StaticNonlinear::new(handle);
        case.set_solution_control("PUSH", 200, 50, 15, 1e-4, true, 0.01)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(
            call.method,
            "SapModel.LoadCases.StaticNonlinear.SetSolControlParameters"
        );
        assert_eq!(call.args[5], Value::Bool(true));
    }
}
