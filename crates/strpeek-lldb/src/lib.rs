//! LLDB summaries for `string`, `string_builder` and `string_cursor`.
//!
//! Built with `ext-module`, this crate is a Python extension module named
//! `strpeek_lldb`. `command script import` only loads Python sources or
//! packages, so LLDB goes through the shim in `python/strpeek_formatters.py`:
//!
//! ```text
//! $ cp target/release/libstrpeek_lldb.so python/strpeek_lldb.so
//! (lldb) command script import python/strpeek_formatters.py
//! ```
//!
//! The shim's `__lldb_init_module` calls [`register_with_debugger`] with its
//! own module name, binding the three summary functions below to their type
//! names.

mod debugger;
mod process;
mod value;

pub use debugger::LldbDebugger;
pub use process::LldbProcess;
pub use value::LldbValue;

use pyo3::prelude::*;
use strpeek::{Summary, SummaryKind, SummaryOptions, summarize_as};

const MODULE_NAME: &str = "strpeek_lldb";

fn summarize(kind: SummaryKind, valobj: &Bound<'_, PyAny>) -> String {
    match LldbValue::new(valobj.clone()) {
        Ok(value) => summarize_as(kind, &value, &SummaryOptions::default()).to_string(),
        Err(_) => Summary::Unreadable.to_string(),
    }
}

/// Summary for an `SBValue` of type `string`.
#[pyfunction]
#[pyo3(signature = (valobj, _internal_dict = None, _options = None))]
pub fn string_summary(
    valobj: &Bound<'_, PyAny>,
    _internal_dict: Option<&Bound<'_, PyAny>>,
    _options: Option<&Bound<'_, PyAny>>,
) -> String {
    summarize(SummaryKind::String, valobj)
}

/// Summary for an `SBValue` of type `string_builder`.
#[pyfunction]
#[pyo3(signature = (valobj, _internal_dict = None, _options = None))]
pub fn string_builder_summary(
    valobj: &Bound<'_, PyAny>,
    _internal_dict: Option<&Bound<'_, PyAny>>,
    _options: Option<&Bound<'_, PyAny>>,
) -> String {
    summarize(SummaryKind::StringBuilder, valobj)
}

/// Summary for an `SBValue` of type `string_cursor`.
#[pyfunction]
#[pyo3(signature = (valobj, _internal_dict = None, _options = None))]
pub fn string_cursor_summary(
    valobj: &Bound<'_, PyAny>,
    _internal_dict: Option<&Bound<'_, PyAny>>,
    _options: Option<&Bound<'_, PyAny>>,
) -> String {
    summarize(SummaryKind::StringCursor, valobj)
}

/// Binds the summaries of `module` in `debugger`'s session.
#[pyfunction]
#[pyo3(signature = (debugger, module = MODULE_NAME))]
pub fn register_with_debugger(debugger: &Bound<'_, PyAny>, module: &str) {
    let mut debugger = LldbDebugger::new(debugger.clone(), module);
    strpeek::register::<LldbValue<'_>, _>(&mut debugger);
}

#[pyfunction]
#[pyo3(name = "__lldb_init_module")]
fn lldb_init_module(debugger: &Bound<'_, PyAny>, _internal_dict: &Bound<'_, PyAny>) {
    register_with_debugger(debugger, MODULE_NAME);
}

#[pymodule]
pub fn strpeek_lldb(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(string_summary, m)?)?;
    m.add_function(wrap_pyfunction!(string_builder_summary, m)?)?;
    m.add_function(wrap_pyfunction!(string_cursor_summary, m)?)?;
    m.add_function(wrap_pyfunction!(register_with_debugger, m)?)?;
    m.add_function(wrap_pyfunction!(lldb_init_module, m)?)?;
    Ok(())
}
