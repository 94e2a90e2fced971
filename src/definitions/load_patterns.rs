//! Load pattern definitions

use crate::bridge::Handle;
use crate::error::SapResult;

/// Load pattern type, engine codes 1..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPatternType {
    Dead = 1,
    SuperDead = 2,
    Live = 3,
    ReduceLive = 4,
    Quake = 5,
    Wind = 6,
    Snow = 7,
    Other = 8,
}

impl LoadPatternType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Load pattern facade.
#[derive(Debug, Clone)]
pub struct LoadPatterns {
    h: Handle,
}

impl LoadPatterns {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    /// Adds a load pattern, optionally with a matching linear static case.
    pub fn add(
        &self,
        name: &str,
        pattern_type: LoadPatternType,
        self_weight_multiplier: f64,
        add_analysis_case: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadPatterns.Add",
                &[
                    name.into(),
                    pattern_type.code().into(),
                    self_weight_multiplier.into(),
                    add_analysis_case.into(),
                ],
            )?
            .ret)
    }

    pub fn change_name(&self, name: &str, new_name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.LoadPatterns.ChangeName",
                &[name.into(), new_name.into()],
            )?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.LoadPatterns.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.LoadPatterns.Delete", &[name.into()])?
            .ret)
    }

    /// Self-weight multiplier of pattern `name`.
    pub fn self_weight_multiplier(&self, name: &str) -> SapResult<(f64, i32)> {
        let r = self
            .h
            .call("SapModel.LoadPatterns.GetSelfWTMultiplier", &[name.into()])?;
        Ok((r.num_at(0)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.LoadPatterns.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_add_forwards_type_code() {
        let (engine, handle) = RecordingEngine::handle();
        let patterns = LoadPatterns::new(handle);
        patterns.add("EQX", LoadPatternType::Quake, 0.0, true).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.LoadPatterns.Add");
        assert_eq!(call.args[1], Value::Int(5));
        assert_eq!(call.args[3], Value::Bool(true));
    }
}
