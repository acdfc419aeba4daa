use pyo3::prelude::*;
use strpeek::InspectedValue;

use crate::process::LldbProcess;

/// An `lldb.SBValue` seen through [`InspectedValue`].
///
/// Python exceptions never escape: a failing lookup is a missing child and
/// a failing conversion is a non-numeric value.
#[derive(Clone, Debug)]
pub struct LldbValue<'py> {
    value: Bound<'py, PyAny>,
    process: LldbProcess<'py>,
}

impl<'py> LldbValue<'py> {
    /// Wraps `value` together with the process returned by its
    /// `GetProcess()`.
    ///
    /// # Errors
    ///
    /// Propagates the exception raised by `GetProcess`.
    pub fn new(value: Bound<'py, PyAny>) -> PyResult<Self> {
        let process = LldbProcess::new(value.call_method0("GetProcess")?);
        Ok(Self { value, process })
    }
}

impl<'py> InspectedValue for LldbValue<'py> {
    type Memory = LldbProcess<'py>;

    fn child(&self, name: &str) -> Option<Self> {
        let child = self
            .value
            .call_method1("GetChildMemberWithName", (name,))
            .ok()?;
        let valid = child
            .call_method0("IsValid")
            .and_then(|valid| valid.extract::<bool>())
            .unwrap_or(false);
        valid.then(|| Self {
            value: child,
            process: self.process.clone(),
        })
    }

    fn as_unsigned(&self) -> Option<u64> {
        self.value
            .call_method1("GetValueAsUnsigned", (0u64,))
            .and_then(|n| n.extract::<u64>())
            .ok()
    }

    fn memory(&self) -> &LldbProcess<'py> {
        &self.process
    }
}
