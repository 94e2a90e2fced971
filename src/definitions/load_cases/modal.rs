//! Modal and modal time-history load cases

use super::direct_history::{history_load_columns, HistoryLoad};
use crate::bridge::Handle;
use crate::error::{SapError, SapResult};

/// Eigenvector modal case.
#[derive(Debug, Clone)]
pub struct ModalEigen {
    h: Handle,
}

impl ModalEigen {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadCases.ModalEigen.SetCase", &[name.into()])?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalEigen.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_number_modes(&self, name: &str, max_modes: i32, min_modes: i32) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalEigen.SetNumberModes",
                &[name.into(), max_modes.into(), min_modes.into()],
            )?
            .ret)
    }

    /// Frequency shift, cutoff, convergence tolerance and automatic shift
    /// for the eigensolver.
    pub fn set_parameters(
        &self,
        name: &str,
        shift_frequency: f64,
        cutoff_frequency: f64,
        tolerance: f64,
        allow_auto_shift: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalEigen.SetParameters",
                &[
                    name.into(),
                    shift_frequency.into(),
                    cutoff_frequency.into(),
                    tolerance.into(),
                    allow_auto_shift.into(),
                ],
            )?
            .ret)
    }

    /// Target dynamic-participation loads: parallel lists of load kinds
    /// (`"Load"`, `"Accel"` or `"Link"`), load names, target participation
    /// ratios and static-correction flags.
    pub fn set_loads(
        &self,
        name: &str,
        load_types: &[&str],
        load_names: &[&str],
        target_participation: &[f64],
        static_correction: &[bool],
    ) -> SapResult<i32> {
        let n = load_types.len();
        if load_names.len() != n || target_participation.len() != n || static_correction.len() != n
        {
            return Err(SapError::InvalidArgument(
                "modal load lists differ in length".into(),
            ));
        }
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalEigen.SetLoads",
                &[
                    name.into(),
                    (n as i32).into(),
                    load_types.into(),
                    load_names.into(),
                    target_participation.into(),
                    static_correction.into(),
                ],
            )?
            .ret)
    }
}

/// Ritz-vector modal case.
#[derive(Debug, Clone)]
pub struct ModalRitz {
    h: Handle,
}

impl ModalRitz {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn set_case(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadCases.ModalRitz.SetCase", &[name.into()])?
            .ret)
    }

    pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalRitz.SetInitialCase",
                &[name.into(), initial_case.into()],
            )?
            .ret)
    }

    pub fn set_number_modes(&self, name: &str, max_modes: i32, min_modes: i32) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalRitz.SetNumberModes",
                &[name.into(), max_modes.into(), min_modes.into()],
            )?
            .ret)
    }

    /// Ritz starting-load vectors: parallel lists of load kinds, load names,
    /// generation-cycle limits (0 for unlimited) and target participation
    /// ratios.
    pub fn set_loads(
        &self,
        name: &str,
        load_types: &[&str],
        load_names: &[&str],
        max_cycles: &[i32],
        target_participation: &[f64],
    ) -> SapResult<i32> {
        let n = load_types.len();
        if load_names.len() != n || max_cycles.len() != n || target_participation.len() != n {
            return Err(SapError::InvalidArgument(
                "Ritz load lists differ in length".into(),
            ));
        }
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModalRitz.SetLoads",
                &[
                    name.into(),
                    (n as i32).into(),
                    load_types.into(),
                    load_names.into(),
                    max_cycles.into(),
                    target_participation.into(),
                ],
            )?
            .ret)
    }
}

macro_rules! modal_history_case {
    ($(#[$doc:meta])* $name:ident, $root:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            h: Handle,
        }

        impl $name {
            pub(crate) fn new(h: Handle) -> Self {
                Self { h }
            }

            pub fn set_case(&self, name: &str) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(concat!($root, ".SetCase"), &[name.into()])?
                    .ret)
            }

            pub fn set_initial_case(&self, name: &str, initial_case: &str) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetInitialCase"),
                        &[name.into(), initial_case.into()],
                    )?
                    .ret)
            }

            pub fn set_loads(&self, name: &str, loads: &[HistoryLoad]) -> SapResult<i32> {
                let [count, types, names, funcs, sf, tf, at, csys, ang] =
                    history_load_columns(loads)?;
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetLoads"),
                        &[name.into(), count, types, names, funcs, sf, tf, at, csys, ang],
                    )?
                    .ret)
            }

            /// Number of output steps and the step duration.
            pub fn set_time_step(&self, name: &str, steps: i32, step_size: f64) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetTimeStep"),
                        &[name.into(), steps.into(), step_size.into()],
                    )?
                    .ret)
            }

            /// Constant modal damping ratio applied to every mode.
            pub fn set_damp_constant(&self, name: &str, damping: f64) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetDampConstant"),
                        &[name.into(), damping.into()],
                    )?
                    .ret)
            }

            /// Transient (1) or periodic (2) motion.
            pub fn set_motion_type(&self, name: &str, motion_type: i32) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetMotionType"),
                        &[name.into(), motion_type.into()],
                    )?
                    .ret)
            }
        }
    };
}

modal_history_case!(
    /// Linear modal time-history case.
    ModalHistLinear,
    "SapModel.LoadCases.ModHistLinear"
);

modal_history_case!(
    /// Nonlinear modal time-history case (FNA).
    ModalHistNonlinear,
    "SapModel.LoadCases.ModHistNonlinear"
);

impl ModalHistNonlinear {
    /// Substepping and force-iteration limits for the FNA solution.
    #[allow(clippy::too_many_arguments)]
    pub fn set_solution_control(
        &self,
        name: &str,
        static_period: f64,
        max_substep_size: f64,
        min_substep_size: f64,
        force_tol: f64,
        energy_tol: f64,
        max_iterations: i32,
        min_iterations: i32,
        convergence_factor: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.ModHistNonlinear.SetSolControlParameters",
                &[
                    name.into(),
                    static_period.into(),
                    max_substep_size.into(),
                    min_substep_size.into(),
                    force_tol.into(),
                    energy_tol.into(),
                    max_iterations.into(),
                    min_iterations.into(),
                    convergence_factor.into(),
                ],
            )?
            .ret)
    }
}
