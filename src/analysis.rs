//! Analysis control
//!
//! Building the analysis model, choosing what runs, solver options, and
//! post-run bookkeeping.

use crate::bridge::Handle;
use crate::codes::DofAxis;
use crate::error::{SapError, SapResult};

/// Analysis facade.
#[derive(Debug, Clone)]
pub struct Analyze {
    h: Handle,
}

impl Analyze {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    /// Builds (or rebuilds) the analysis model from the object model.
    pub fn create_analysis_model(&self) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.Analyze.CreateAnalysisModel", &[])?
            .ret)
    }

    /// Restricts the analysis to the listed global DOFs (`"UX"` .. `"RZ"`).
    pub fn set_active_dof(&self, dofs: &[&str]) -> SapResult<i32> {
        let mask = DofAxis::parse_mask(dofs)?;
        Ok(self
            .h
            .call("SapModel.Analyze.SetActiveDOF", &[mask.into()])?
            .ret)
    }

    /// Flags one case to run or not run.
    pub fn set_run_case_flag(&self, case: &str, run: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.SetRunCaseFlag",
                &[case.into(), run.into(), false.into()],
            )?
            .ret)
    }

    /// Flags every case at once.
    pub fn set_run_all_cases_flag(&self, run: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.SetRunCaseFlag",
                &["".into(), run.into(), true.into()],
            )?
            .ret)
    }

    /// Solver selection. `solver_type` is 0 standard, 1 advanced, 2
    /// multi-threaded; `process_type` is 0 auto, 1 GUI, 2 separate;
    /// `parallel_runs` must lie in -8..=8 and -1 is reserved by the engine.
    pub fn set_solver_option(
        &self,
        solver_type: i32,
        process_type: i32,
        parallel_runs: i32,
        stiffness_case: &str,
    ) -> SapResult<i32> {
        if !(-8..=8).contains(&parallel_runs) || parallel_runs == -1 {
            return Err(SapError::InvalidArgument(format!(
                "parallel run count {parallel_runs} outside -8..=8 (excluding -1)"
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.Analyze.SetSolverOption_2",
                &[
                    solver_type.into(),
                    process_type.into(),
                    parallel_runs.into(),
                    stiffness_case.into(),
                ],
            )?
            .ret)
    }

    /// Merges results saved in another model file into the current model.
    pub fn merge_analysis_results(&self, file_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.MergeAnalysisResults",
                &[file_name.into()],
            )?
            .ret)
    }

    /// Replaces the undeformed geometry with the deformed shape of `case`,
    /// scaled by `scale_factor`. With `reset_original` the original
    /// geometry is restored instead.
    pub fn modify_undeformed_geometry(
        &self,
        case: &str,
        scale_factor: f64,
        stage: i32,
        reset_original: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.ModifyUndeformedGeometry",
                &[
                    case.into(),
                    scale_factor.into(),
                    stage.into(),
                    reset_original.into(),
                ],
            )?
            .ret)
    }

    /// Same, from a mode shape of a modal case.
    pub fn modify_undeformed_geometry_mode_shape(
        &self,
        case: &str,
        mode: i32,
        max_displacement: f64,
        direction: i32,
        reset_original: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.ModifyUndeformedGeometryModeShape",
                &[
                    case.into(),
                    mode.into(),
                    max_displacement.into(),
                    direction.into(),
                    reset_original.into(),
                ],
            )?
            .ret)
    }

    /// Runs every flagged case. The model must have been saved first.
    pub fn run_analysis(&self) -> SapResult<i32> {
        Ok(self.h.call("SapModel.Analyze.RunAnalysis", &[])?.ret)
    }

    /// Deletes results for one case, or for all cases with `all` set.
    pub fn delete_results(&self, case: &str, all: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Analyze.DeleteResults",
                &[case.into(), all.into()],
            )?
            .ret)
    }

    /// Active global DOF mask in UX..RZ order.
    pub fn active_dof(&self) -> SapResult<(Vec<bool>, i32)> {
        let r = self.h.call("SapModel.Analyze.GetActiveDOF", &[])?;
        Ok((r.bools_at(0)?, r.ret))
    }

    /// Per-case run flags: (case names, run flags, code).
    pub fn run_case_flags(&self) -> SapResult<(Vec<String>, Vec<bool>, i32)> {
        let r = self.h.call("SapModel.Analyze.GetRunCaseFlag", &[])?;
        Ok((r.strs_at(0)?, r.bools_at(1)?, r.ret))
    }

    /// Per-case solution status: (case names, status codes, code). Status
    /// is 1 not run, 2 could not start, 3 not finished, 4 finished.
    pub fn case_status(&self) -> SapResult<(Vec<String>, Vec<i32>, i32)> {
        let r = self.h.call("SapModel.Analyze.GetCaseStatus", &[])?;
        Ok((r.strs_at(0)?, r.ints_at(1)?, r.ret))
    }

    /// Current solver selection: (solver type, process type, parallel runs,
    /// stiffness case, code).
    pub fn solver_option(&self) -> SapResult<(i32, i32, i32, String, i32)> {
        let r = self.h.call("SapModel.Analyze.GetSolverOption_2", &[])?;
        Ok((
            r.int_at(0)?,
            r.int_at(1)?,
            r.int_at(2)?,
            r.str_at(3)?,
            r.ret,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_active_dof_mask_for_plane_frame() {
        let (engine, handle) = RecordingEngine::handle();
        let analyze = Analyze::new(handle);
        analyze.set_active_dof(&["UX", "UZ", "RY"]).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.Analyze.SetActiveDOF");
        assert_eq!(
            call.args[0],
            Value::Bools(vec![true, false, true, false, true, false])
        );
    }

    #[test]
    fn test_solver_option_rejects_reserved_counts() {
        let (engine, handle) = RecordingEngine::handle();
        let analyze = Analyze::new(handle);
        assert!(analyze.set_solver_option(2, 0, -1, "").is_err());
        assert!(analyze.set_solver_option(2, 0, 9, "").is_err());
        assert_eq!(engine.call_count(), 0);
        assert_eq!(analyze.set_solver_option(2, 0, 4, "DEAD").unwrap(), 0);
    }

    #[test]
    fn test_run_all_cases_flag() {
        let (engine, handle) = RecordingEngine::handle();
        let analyze = Analyze::new(handle);
        analyze.set_run_all_cases_flag(true).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[2], Value::Bool(true));
    }
}
