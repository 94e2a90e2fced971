//! Engine automation bridge
//!
//! Every facade in this crate forwards to an out-of-process analysis engine
//! through one small adapter seam: [`EngineBridge`]. A call names the vendor
//! method by its dotted path (e.g. `"SapModel.PointObj.AddCartesian"`),
//! passes positional [`Value`] arguments, and receives a [`Reply`] holding
//! the engine's integer return code (0 = success) plus any out-parameters.
//!
//! The production transport (COM or whatever object-automation binding the
//! host platform provides) is supplied by the consumer as an `EngineBridge`
//! implementation. [`recording::RecordingEngine`] is the in-crate test
//! double: it records every call and plays back canned replies.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{SapError, SapResult};

/// A value crossing the automation bridge in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Num(f64),
    Str(String),
    Bools(Vec<bool>),
    Ints(Vec<i32>),
    Nums(Vec<f64>),
    Strs(Vec<String>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Num(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::Bools(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::Ints(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Nums(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Strs(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Nums(v.to_vec())
    }
}

impl From<&[bool]> for Value {
    fn from(v: &[bool]) -> Self {
        Value::Bools(v.to_vec())
    }
}

impl From<&[i32]> for Value {
    fn from(v: &[i32]) -> Self {
        Value::Ints(v.to_vec())
    }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Value::Strs(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[bool; N]> for Value {
    fn from(v: [bool; N]) -> Self {
        Value::Bools(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Value::Nums(v.to_vec())
    }
}

/// The engine's answer to a single invocation: the integer return code
/// (0 = success) plus positional out-parameters in the vendor's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub ret: i32,
    pub outs: Vec<Value>,
}

impl Reply {
    /// A plain success with no out-parameters.
    pub fn ok() -> Self {
        Self {
            ret: 0,
            outs: Vec::new(),
        }
    }

    /// A reply with an explicit code and no out-parameters.
    pub fn code(ret: i32) -> Self {
        Self {
            ret,
            outs: Vec::new(),
        }
    }

    /// A reply with a code and out-parameters.
    pub fn with_outs(ret: i32, outs: Vec<Value>) -> Self {
        Self { ret, outs }
    }

    fn out(&self, index: usize, expected: &'static str) -> SapResult<&Value> {
        self.outs
            .get(index)
            .ok_or(SapError::TypeMismatch { index, expected })
    }

    pub fn bool_at(&self, index: usize) -> SapResult<bool> {
        match self.out(index, "bool")? {
            Value::Bool(v) => Ok(*v),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "bool",
            }),
        }
    }

    pub fn int_at(&self, index: usize) -> SapResult<i32> {
        match self.out(index, "int")? {
            Value::Int(v) => Ok(*v),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "int",
            }),
        }
    }

    pub fn num_at(&self, index: usize) -> SapResult<f64> {
        match self.out(index, "num")? {
            Value::Num(v) => Ok(*v),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "num",
            }),
        }
    }

    pub fn str_at(&self, index: usize) -> SapResult<String> {
        match self.out(index, "str")? {
            Value::Str(v) => Ok(v.clone()),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "str",
            }),
        }
    }

    pub fn bools_at(&self, index: usize) -> SapResult<Vec<bool>> {
        match self.out(index, "bool array")? {
            Value::Bools(v) => Ok(v.clone()),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "bool array",
            }),
        }
    }

    pub fn ints_at(&self, index: usize) -> SapResult<Vec<i32>> {
        match self.out(index, "int array")? {
            Value::Ints(v) => Ok(v.clone()),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "int array",
            }),
        }
    }

    pub fn nums_at(&self, index: usize) -> SapResult<Vec<f64>> {
        match self.out(index, "num array")? {
            Value::Nums(v) => Ok(v.clone()),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "num array",
            }),
        }
    }

    pub fn strs_at(&self, index: usize) -> SapResult<Vec<String>> {
        match self.out(index, "str array")? {
            Value::Strs(v) => Ok(v.clone()),
            _ => Err(SapError::TypeMismatch {
                index,
                expected: "str array",
            }),
        }
    }
}

/// The out-of-process object-automation seam.
///
/// Implementations serialize the call over whatever transport the host
/// platform provides. The engine serializes requests on its side, so no
/// locking exists at this level; the whole facade is single-threaded
/// cooperative.
pub trait EngineBridge {
    /// Invokes `method` (a dotted vendor path) with positional arguments.
    fn invoke(&self, method: &str, args: &[Value]) -> SapResult<Reply>;
}

/// The shared engine handle.
///
/// Holds the opaque reference to the running engine (the application root
/// and its model root are both addressed through the dotted method path).
/// Created once by the owning root object and cloned into every category
/// facade, so all facades talk to the same engine instance rather than
/// whichever instance happens to be foremost.
#[derive(Clone)]
pub struct Handle {
    bridge: Rc<dyn EngineBridge>,
}

impl Handle {
    pub fn new(bridge: Rc<dyn EngineBridge>) -> Self {
        Self { bridge }
    }

    /// Forwards one call to the engine.
    pub fn call(&self, method: &str, args: &[Value]) -> SapResult<Reply> {
        self.bridge.invoke(method, args)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").finish_non_exhaustive()
    }
}

pub mod recording {
    //! In-memory engine double for tests.

    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    use super::{EngineBridge, Handle, Reply, Value};
    use crate::error::SapResult;

    /// One recorded invocation.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: String,
        pub args: Vec<Value>,
    }

    /// An engine double that records every call and plays back canned
    /// replies. Reply resolution order: the FIFO queue first, then the
    /// per-method stub map, then a default success with no out-parameters.
    #[derive(Default)]
    pub struct RecordingEngine {
        calls: RefCell<Vec<RecordedCall>>,
        queued: RefCell<VecDeque<Reply>>,
        stubs: RefCell<HashMap<String, Reply>>,
    }

    impl RecordingEngine {
        pub fn new() -> Self {
            Self::default()
        }

        /// Convenience: a shared engine plus a handle over it.
        pub fn handle() -> (Rc<RecordingEngine>, Handle) {
            let engine = Rc::new(RecordingEngine::new());
            let handle = Handle::new(engine.clone());
            (engine, handle)
        }

        /// Queues a reply consumed by the next call, FIFO.
        pub fn enqueue(&self, reply: Reply) {
            self.queued.borrow_mut().push_back(reply);
        }

        /// Stubs a fixed reply for every call to `method`.
        pub fn stub(&self, method: &str, reply: Reply) {
            self.stubs.borrow_mut().insert(method.to_string(), reply);
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.borrow().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn last_call(&self) -> Option<RecordedCall> {
            self.calls.borrow().last().cloned()
        }
    }

    impl EngineBridge for RecordingEngine {
        fn invoke(&self, method: &str, args: &[Value]) -> SapResult<Reply> {
            self.calls.borrow_mut().push(RecordedCall {
                method: method.to_string(),
                args: args.to_vec(),
            });
            if let Some(reply) = self.queued.borrow_mut().pop_front() {
                return Ok(reply);
            }
            if let Some(reply) = self.stubs.borrow().get(method) {
                return Ok(reply.clone());
            }
            Ok(Reply::ok())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingEngine;
    use super::*;

    #[test]
    fn test_reply_accessors() {
        let reply = Reply::with_outs(
            0,
            vec![
                Value::Num(1.5),
                Value::Bools(vec![true, false]),
                Value::Str("Global".into()),
            ],
        );
        assert_eq!(reply.num_at(0).unwrap(), 1.5);
        assert_eq!(reply.bools_at(1).unwrap(), vec![true, false]);
        assert_eq!(reply.str_at(2).unwrap(), "Global");
        assert!(reply.int_at(0).is_err());
        assert!(reply.num_at(5).is_err());
    }

    #[test]
    fn test_reply_serializes_for_capture() {
        let reply = Reply::with_outs(0, vec![Value::Str("1".into()), Value::Nums(vec![2.5])]);
        let json = serde_json::to_string(&reply).unwrap();
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reply);
    }

    #[test]
    fn test_recording_engine_defaults_to_success() {
        let (engine, handle) = RecordingEngine::handle();
        let reply = handle.call("SapModel.File.Save", &["x.sdb".into()]).unwrap();
        assert_eq!(reply.ret, 0);
        assert!(reply.outs.is_empty());
        assert_eq!(engine.call_count(), 1);
        assert_eq!(engine.last_call().unwrap().method, "SapModel.File.Save");
    }

    #[test]
    fn test_recording_engine_queue_beats_stub() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub("M", Reply::code(2));
        engine.enqueue(Reply::code(1));
        assert_eq!(handle.call("M", &[]).unwrap().ret, 1);
        assert_eq!(handle.call("M", &[]).unwrap().ret, 2);
    }
}
