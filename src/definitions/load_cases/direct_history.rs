//! Direct-integration time-history load cases

use crate::bridge::{Handle, Value};
use crate::codes::{DampingScheme, IntegrationParams, TimeIntegration};
use crate::error::{SapError, SapResult};

/// One scaled, time-varying load of a history case.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLoad {
    /// `"Load"` for a load pattern or `"Accel"` for a ground acceleration.
    pub load_type: String,
    /// Load pattern name, or the acceleration direction label (`"U1"` ..
    /// `"R3"`).
    pub load_name: String,
    /// Time-history function driving this load.
    pub function: String,
    pub scale_factor: f64,
    pub time_factor: f64,
    pub arrival_time: f64,
    pub csys: String,
    pub angle: f64,
}

impl HistoryLoad {
    /// A load-pattern entry with unit time factor, zero arrival time and
    /// the global coordinate system.
    pub fn pattern(name: &str, function: &str, scale_factor: f64) -> Self {
        Self {
            load_type: "Load".into(),
            load_name: name.into(),
            function: function.into(),
            scale_factor,
            time_factor: 1.0,
            arrival_time: 0.0,
            csys: "Global".into(),
            angle: 0.0,
        }
    }

    /// A ground-acceleration entry along `direction` (`"U1"` .. `"R3"`).
    pub fn accel(direction: &str, function: &str, scale_factor: f64) -> Self {
        Self {
            load_type: "Accel".into(),
            load_name: direction.into(),
            function: function.into(),
            scale_factor,
            time_factor: 1.0,
            arrival_time: 0.0,
            csys: "Global".into(),
            angle: 0.0,
        }
    }
}

/// Splits a history-load list into the engine's parallel column arrays.
pub(crate) fn history_load_columns(loads: &[HistoryLoad]) -> SapResult<[Value; 9]> {
    if loads.is_empty() {
        return Err(SapError::InvalidArgument(
            "a history case needs at least one load entry".into(),
        ));
    }
    let col = |f: fn(&HistoryLoad) -> String| -> Vec<String> { loads.iter().map(f).collect() };
    let num = |f: fn(&HistoryLoad) -> f64| -> Vec<f64> { loads.iter().map(f).collect() };
    Ok([
        (loads.len() as i32).into(),
        col(|l| l.load_type.clone()).into(),
        col(|l| l.load_name.clone()).into(),
        col(|l| l.function.clone()).into(),
        num(|l| l.scale_factor).into(),
        num(|l| l.time_factor).into(),
        num(|l| l.arrival_time).into(),
        col(|l| l.csys.clone()).into(),
        num(|l| l.angle).into(),
    ])
}

macro_rules! direct_history_case {
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

            /// Integration scheme with explicit parameters. Use
            /// [`TimeIntegration::default_params`] for the engine defaults.
            pub fn set_time_integration(
                &self,
                name: &str,
                scheme: TimeIntegration,
                params: IntegrationParams,
            ) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetTimeIntegration"),
                        &[
                            name.into(),
                            scheme.code().into(),
                            params.alpha.into(),
                            params.beta.into(),
                            params.gamma.into(),
                            params.theta.into(),
                            params.m.into(),
                        ],
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

            /// Proportional damping. For [`DampingScheme::MassStiffness`] the
            /// two point arguments carry the mass and stiffness coefficients
            /// directly; for the period and frequency schemes they carry the
            /// two anchor points and their damping ratios.
            #[allow(clippy::too_many_arguments)]
            pub fn set_damp_proportional(
                &self,
                name: &str,
                scheme: DampingScheme,
                mass_coefficient: f64,
                stiffness_coefficient: f64,
                first_point: f64,
                first_damping: f64,
                second_point: f64,
                second_damping: f64,
            ) -> SapResult<i32> {
                Ok(self
                    .h
                    .call(
                        concat!($root, ".SetDampProportional"),
                        &[
                            name.into(),
                            scheme.code().into(),
                            mass_coefficient.into(),
                            stiffness_coefficient.into(),
                            first_point.into(),
                            second_point.into(),
                            first_damping.into(),
                            second_damping.into(),
                        ],
                    )?
                    .ret)
            }
        }
    };
}

direct_history_case!(
    /// Linear direct-integration history case.
    DirHistLinear,
    "SapModel.LoadCases.DirHistLinear"
);

direct_history_case!(
    /// Nonlinear direct-integration history case.
    DirHistNonlinear,
    "SapModel.LoadCases.DirHistNonlinear"
);

impl DirHistNonlinear {
    /// Substep sizing and iteration limits for the nonlinear solution.
    #[allow(clippy::too_many_arguments)]
    pub fn set_solution_control(
        &self,
        name: &str,
        max_substep_size: f64,
        min_substep_size: f64,
        max_iterations: i32,
        convergence_tol: f64,
        use_event_stepping: bool,
        event_tol: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.DirHistNonlinear.SetSolControlParameters",
                &[
                    name.into(),
                    max_substep_size.into(),
                    min_substep_size.into(),
                    max_iterations.into(),
                    convergence_tol.into(),
                    use_event_stepping.into(),
                    event_tol.into(),
                ],
            )?
            .ret)
    }

    pub fn set_geometric_nonlinearity(&self, name: &str, option: i32) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadCases.DirHistNonlinear.SetGeometricNonlinearity",
                &[name.into(), option.into()],
            )?
            .ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;

    #[test]
    fn test_set_loads_columns() {
        let (engine, handle) = RecordingEngine::handle();
        let case = DirHistLinear::new(handle);
        case.set_loads(
            "TH-X",
            &[HistoryLoad::accel("U1", "ELCENTRO", 9.81)],
        )
        .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.LoadCases.DirHistLinear.SetLoads");
        assert_eq!(call.args[1], Value::Int(1));
        assert_eq!(call.args[3], Value::Strs(vec!["U1".into()]));
        assert_eq!(call.args[4], Value::Strs(vec!["ELCENTRO".into()]));
        assert_eq!(call.args[6], Value::Nums(vec![1.0]));
    }

    #[test]
    fn test_time_integration_defaults() {
        let (engine, handle) = RecordingEngine::handle();
        let case = DirHistNonlinear::new(handle);
        let scheme = TimeIntegration::Collocation;
        case.set_time_integration("TH-X", scheme, scheme.default_params())
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(
            call.method,
            "SapModel.LoadCases.DirHistNonlinear.SetTimeIntegration"
        );
        assert_eq!(call.args[1], Value::Int(3));
        assert_eq!(call.args[3], Value::Num(0.1667));
        assert_eq!(call.args[5], Value::Num(1.0));
    }

    #[test]
    fn test_damp_proportional_scheme_code() {
        let (engine, handle) = RecordingEngine::handle();
        let case = DirHistLinear::new(handle);
        case.set_damp_proportional("TH-X", DampingScheme::Period, 0.0, 0.0, 0.5, 0.05, 1.5, 0.05)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Int(2));
        assert_eq!(call.args[4], Value::Num(0.5));
        assert_eq!(call.args[5], Value::Num(1.5));
    }

    #[test]
    fn test_empty_history_load_list_rejected() {
        let (engine, handle) = RecordingEngine::handle();
        let case = DirHistLinear::new(handle);
        assert!(case.set_loads("TH-X", &[]).is_err());
        assert_eq!(engine.call_count(), 0);
    }
}
