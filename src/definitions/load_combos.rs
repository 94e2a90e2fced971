//! Load combination definitions

use crate::bridge::Handle;
use crate::error::SapResult;

/// Combination rule, engine codes 0..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboType {
    LinearAdditive = 0,
    Envelope = 1,
    AbsoluteAdditive = 2,
    Srss = 3,
    RangeAdditive = 4,
}

impl ComboType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Whether a combination entry references a load case or another combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboEntryKind {
    LoadCase = 0,
    LoadCombo = 1,
}

impl ComboEntryKind {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Load combination facade.
#[derive(Debug, Clone)]
pub struct LoadCombos {
    h: Handle,
}

impl LoadCombos {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    pub fn add(&self, name: &str, combo_type: ComboType) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.RespCombo.Add",
                &[name.into(), combo_type.code().into()],
            )?
            .ret)
    }

    /// Adds or updates one scaled entry of combination `name`.
    pub fn set_case_list(
        &self,
        name: &str,
        kind: ComboEntryKind,
        case_name: &str,
        scale_factor: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.RespCombo.SetCaseList",
                &[
                    name.into(),
                    kind.code().into(),
                    case_name.into(),
                    scale_factor.into(),
                ],
            )?
            .ret)
    }

    /// Removes one entry from combination `name`.
    pub fn delete_case(
        &self,
        name: &str,
        kind: ComboEntryKind,
        case_name: &str,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.RespCombo.DeleteCase",
                &[name.into(), kind.code().into(), case_name.into()],
            )?
            .ret)
    }

    pub fn delete(&self, name: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call("SapModel.RespCombo.Delete", &[name.into()])?
            .ret)
    }

    pub fn count(&self) -> SapResult<(i32, i32)> {
        let r = self.h.call("SapModel.RespCombo.Count", &[])?;
        Ok((r.int_at(0)?, r.ret))
    }

    pub fn name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.RespCombo.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::Value;

    #[test]
    fn test_set_case_list_forwards_entry() {
        let (engine, handle) = RecordingEngine::handle();
        let combos = LoadCombos::new(handle);
        combos.add("ULS", ComboType::LinearAdditive).unwrap();
        combos
            .set_case_list("ULS", ComboEntryKind::LoadCase, "DEAD", 1.35)
            .unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.RespCombo.SetCaseList");
        assert_eq!(call.args[1], Value::Int(0));
        assert_eq!(call.args[3], Value::Num(1.35));
    }
}
