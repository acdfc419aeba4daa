use pyo3::prelude::*;
use strpeek::{SummaryKind, SummaryRegistry};

use crate::value::LldbValue;

/// An `lldb.SBDebugger` receiving `type summary add` commands.
///
/// LLDB binds summaries to Python callables by name, so each registered
/// type is routed to the function of the same kind in `module`.
#[derive(Debug)]
pub struct LldbDebugger<'py> {
    debugger: Bound<'py, PyAny>,
    module: String,
}

impl<'py> LldbDebugger<'py> {
    pub fn new(debugger: Bound<'py, PyAny>, module: &str) -> Self {
        Self {
            debugger,
            module: module.to_owned(),
        }
    }
}

// LLDB binds summaries to Python callables by name, so the Rust function
// pointer is dropped and the kind's exported function name is used instead.
impl<'py> SummaryRegistry<LldbValue<'py>> for LldbDebugger<'py> {
    fn add_summary(&mut self, type_name: &'static str, _summarizer: fn(&LldbValue<'py>) -> String) {
        let Some(kind) = SummaryKind::from_type_name(type_name) else {
            tracing::warn!(type_name, "no python summary function for type");
            return;
        };
        let command = kind.lldb_command(&self.module);
        if let Err(err) = self.debugger.call_method1("HandleCommand", (command,)) {
            tracing::warn!(type_name, %err, "HandleCommand failed");
        }
    }
}
