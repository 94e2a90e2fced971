//! Output selection and presentation options

use crate::bridge::Handle;
use crate::error::SapResult;

/// How a multi-step case is condensed for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutput {
    Envelopes = 1,
    StepByStep = 2,
    LastStep = 3,
}

impl HistoryOutput {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// How a multi-valued combination is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiValuedComboOutput {
    Envelopes = 1,
    MultipleIfPossible = 2,
    Correspondence = 3,
}

impl MultiValuedComboOutput {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Result selection facade. Nothing is reported for a case or combo until
/// it is selected here.
#[derive(Debug, Clone)]
pub struct ResultsSetup {
    h: Handle,
}

impl ResultsSetup {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn deselect_all(&self) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.DeselectAllCasesAndCombosForOutput",
                &[],
            )?
            .ret)
    }

    pub fn set_case_selected(&self, case: &str, selected: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetCaseSelectedForOutput",
                &[case.into(), selected.into()],
            )?
            .ret)
    }

    pub fn set_combo_selected(&self, combo: &str, selected: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetComboSelectedForOutput",
                &[combo.into(), selected.into()],
            )?
            .ret)
    }

    pub fn set_section_cut_selected(&self, cut: &str, selected: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetSectionCutSelectedForOutput",
                &[cut.into(), selected.into()],
            )?
            .ret)
    }

    /// Global point base reactions are reported about.
    pub fn set_base_react_location(&self, gx: f64, gy: f64, gz: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionBaseReactLoc",
                &[gx.into(), gy.into(), gz.into()],
            )?
            .ret)
    }

    /// Buckling-mode range reported, or every mode with `all` set.
    pub fn set_buckling_mode_range(
        &self,
        start: i32,
        end: i32,
        all: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionBucklingMode",
                &[start.into(), end.into(), all.into()],
            )?
            .ret)
    }

    /// Mode-shape range reported, or every mode with `all` set.
    pub fn set_mode_shape_range(&self, start: i32, end: i32, all: bool) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionModeShape",
                &[start.into(), end.into(), all.into()],
            )?
            .ret)
    }

    pub fn set_direct_history_output(&self, output: HistoryOutput) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionDirectHist",
                &[output.code().into()],
            )?
            .ret)
    }

    pub fn set_modal_history_output(&self, output: HistoryOutput) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionModalHist",
                &[output.code().into()],
            )?
            .ret)
    }

    pub fn set_multistep_static_output(&self, output: HistoryOutput) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionMultiStepStatic",
                &[output.code().into()],
            )?
            .ret)
    }

    pub fn set_nonlinear_static_output(&self, output: HistoryOutput) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionNLStatic",
                &[output.code().into()],
            )?
            .ret)
    }

    pub fn set_multivalued_combo_output(
        &self,
        output: MultiValuedComboOutput,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionMultiValuedCombo",
                &[output.code().into()],
            )?
            .ret)
    }

    /// PSD output: 1 reports RMS values, 2 the square root of the PSD.
    pub fn set_psd_output(&self, output: i32) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.Results.Setup.SetOptionPSD", &[output.into()])?
            .ret)
    }

    /// Steady-state output: 1 envelopes, 2 at frequencies; the sub-option
    /// picks the reported component (1 in-and-out-of-phase, 2 magnitude,
    /// 3 all phase angles).
    pub fn set_steady_state_output(&self, output: i32, sub_option: i32) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Results.Setup.SetOptionSteadyState",
                &[output.into(), sub_option.into()],
            )?
            .ret)
    }
}
