//! Function definitions: response-spectrum and time-history curves

use std::path::Path;

use crate::bridge::Handle;
use crate::codes::FunctionValueType;
use crate::error::{SapError, SapResult};

/// Function facade. Response-spectrum and time-history curves live in
/// their own sub-facades.
#[derive(Debug, Clone)]
pub struct Functions {
    h: Handle,
    pub rs: ResponseSpectrumFunctions,
    pub th: TimeHistoryFunctions,
}

impl Functions {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            rs: ResponseSpectrumFunctions { h: h.clone() },
            th: TimeHistoryFunctions { h: h.clone() },
            h,
        }
    }

    /// Deletes the function `name`.
    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self.h.call("SapModel.Func.Delete", &[name.into()])?.ret)
    }

    /// Names of all defined functions.
    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.Func.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }

    /// Tabulated values of any function: (abscissae, ordinates, code).
    pub fn values(&self, name: &str) -> SapResult<(Vec<f64>, Vec<f64>, i32)> {
        let r = self.h.call("SapModel.Func.GetValues", &[name.into()])?;
        Ok((r.nums_at(0)?, r.nums_at(1)?, r.ret))
    }
}

/// Response-spectrum function setters: standardized regional curves with
/// their required numeric parameters, user tabulated curves and file-based
/// curves.
#[derive(Debug, Clone)]
pub struct ResponseSpectrumFunctions {
    h: Handle,
}

impl ResponseSpectrumFunctions {
    /// Eurocode 8 (2004) design spectrum.
    #[allow(clippy::too_many_arguments)]
    pub fn eurocode8_2004(
        &self,
        name: &str,
        country: i32,
        direction: i32,
        spectrum_type: i32,
        ground_type: i32,
        ag: f64,
        beta: f64,
        q: f64,
        damping: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetEurocode82004_1",
                &[
                    name.into(),
                    country.into(),
                    direction.into(),
                    spectrum_type.into(),
                    ground_type.into(),
                    ag.into(),
                    beta.into(),
                    q.into(),
                    damping.into(),
                ],
            )?
            .ret)
    }

    /// Chinese GB 50011-2010 spectrum.
    pub fn chinese_2010(
        &self,
        name: &str,
        alpha_max: f64,
        seismic_intensity: i32,
        tg: f64,
        period_reduction: f64,
        damping: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetChinese2010",
                &[
                    name.into(),
                    alpha_max.into(),
                    seismic_intensity.into(),
                    tg.into(),
                    period_reduction.into(),
                    damping.into(),
                ],
            )?
            .ret)
    }

    /// IBC 2006 spectrum.
    #[allow(clippy::too_many_arguments)]
    pub fn ibc_2006(
        &self,
        name: &str,
        ss: f64,
        s1: f64,
        tl: f64,
        site_class: i32,
        fa: f64,
        fv: f64,
        damping: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetIBC2006",
                &[
                    name.into(),
                    ss.into(),
                    s1.into(),
                    tl.into(),
                    site_class.into(),
                    fa.into(),
                    fv.into(),
                    damping.into(),
                ],
            )?
            .ret)
    }

    /// Italian NTC 2008 spectrum.
    #[allow(clippy::too_many_arguments)]
    pub fn ntc_2008(
        &self,
        name: &str,
        parameters_option: i32,
        ag: f64,
        f0: f64,
        tcs: f64,
        soil_type: i32,
        topography: i32,
        h_ratio: f64,
        q: f64,
        damping: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetNTC2008",
                &[
                    name.into(),
                    parameters_option.into(),
                    ag.into(),
                    f0.into(),
                    tcs.into(),
                    soil_type.into(),
                    topography.into(),
                    h_ratio.into(),
                    q.into(),
                    damping.into(),
                ],
            )?
            .ret)
    }

    /// User tabulated spectrum of (period, value) points.
    pub fn user(
        &self,
        name: &str,
        periods: &[f64],
        values: &[f64],
        damping: f64,
    ) -> SapResult<i32> {
        if periods.len() != values.len() {
            return Err(SapError::InvalidArgument(format!(
                "period list ({}) and value list ({}) differ in length",
                periods.len(),
                values.len()
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetUser",
                &[
                    name.into(),
                    (periods.len() as i32).into(),
                    periods.into(),
                    values.into(),
                    damping.into(),
                ],
            )?
            .ret)
    }

    /// Spectrum read from a text file. `value_type` declares whether the
    /// abscissa column holds frequencies or periods.
    pub fn from_file(
        &self,
        name: &str,
        path: &Path,
        head_lines: i32,
        damping: f64,
        value_type: FunctionValueType,
    ) -> SapResult<i32> {
        let path = path.to_str().ok_or_else(|| {
            SapError::InvalidArgument(format!("path {} is not valid UTF-8", path.display()))
        })?;
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncRS.SetFromFile_1",
                &[
                    name.into(),
                    path.into(),
                    head_lines.into(),
                    damping.into(),
                    value_type.code().into(),
                ],
            )?
            .ret)
    }
}

/// Time-history function setters.
#[derive(Debug, Clone)]
pub struct TimeHistoryFunctions {
    h: Handle,
}

impl TimeHistoryFunctions {
    /// User tabulated history of (time, value) points.
    pub fn user(&self, name: &str, times: &[f64], values: &[f64]) -> SapResult<i32> {
        if times.len() != values.len() {
            return Err(SapError::InvalidArgument(format!(
                "time list ({}) and value list ({}) differ in length",
                times.len(),
                values.len()
            )));
        }
        Ok(self
            .h
            .call(
                "SapModel.Func.FuncTH.SetUser",
                &[
                    name.into(),
                    (times.len() as i32).into(),
                    times.into(),
                    values.into(),
                ],
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
    fn test_from_file_maps_value_type() {
        let (engine, handle) = RecordingEngine::handle();
        let functions = Functions::new(handle);
        functions
            .rs
            .from_file(
                "RS1",
                Path::new("spectra/ec8.txt"),
                2,
                0.05,
                FunctionValueType::Period,
            )
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.Func.FuncRS.SetFromFile_1");
        assert_eq!(call.args[4], Value::Int(2));
    }

    #[test]
    fn test_user_spectrum_rejects_ragged_tables() {
        let (engine, handle) = RecordingEngine::handle();
        let functions = Functions::new(handle);
        assert!(functions
            .rs
            .user("RS1", &[0.1, 0.2], &[1.0], 0.05)
            .is_err());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_th_user_forwards_count() {
        let (engine, handle) = RecordingEngine::handle();
        let functions = Functions::new(handle);
        functions
            .th
            .user("TH1", &[0.0, 0.1, 0.2], &[0.0, 1.0, 0.0])
            .unwrap();
        assert_eq!(engine.last_call().unwrap().args[1], Value::Int(3));
    }
}
