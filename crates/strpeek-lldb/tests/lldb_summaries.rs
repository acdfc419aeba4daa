use pyo3::{
    Bound, PyAny, PyResult, Python,
    types::{PyAnyMethods, PyBytes, PyDict, PyDictMethods, PyListMethods, PyModule},
};
use std::ffi::CString;

use strpeek_lldb::{
    register_with_debugger, string_builder_summary, string_cursor_summary, string_summary,
};

/// Just enough of the `lldb` module for the adapter: values with named
/// children, a process with mapped byte ranges, and a debugger recording
/// commands.
const FAKE_LLDB: &std::ffi::CStr = cr#"
class SBError:
    def __init__(self):
        self.ok = True

    def Success(self):
        return self.ok


class SBProcess:
    def __init__(self, regions):
        self.regions = regions
        self.reads = []

    def ReadMemory(self, address, length, error):
        self.reads.append((address, length))
        for base, data in self.regions.items():
            if base <= address and address + length <= base + len(data):
                offset = address - base
                return data[offset:offset + length]
        error.ok = False
        return None


class SBValue:
    def __init__(self, process, value=None, children=None, valid=True):
        self.process = process
        self.value = value
        self.children = children or {}
        self.valid = valid

    def GetChildMemberWithName(self, name):
        return self.children.get(name, SBValue(self.process, valid=False))

    def IsValid(self):
        return self.valid

    def GetValueAsUnsigned(self, fail_value=0):
        if not self.valid or self.value is None:
            return fail_value
        return self.value

    def GetProcess(self):
        return self.process


class SBDebugger:
    def __init__(self):
        self.commands = []

    def HandleCommand(self, command):
        self.commands.append(command)


def string(process, value, length):
    return SBValue(process, children={
        "value": SBValue(process, value),
        "length": SBValue(process, length),
    })


def builder(process, length, out_value, out_length):
    return SBValue(process, children={
        "outBuffer": string(process, out_value, out_length),
        "length": SBValue(process, length),
    })


def cursor(process, position, value, length):
    return SBValue(process, children={
        "source": string(process, value, length),
        "position": SBValue(process, position),
    })
"#;

fn fake_lldb(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let module = PyModule::from_code(py, FAKE_LLDB, c"lldb.py", c"lldb")?;
    py.import("sys")?
        .getattr("modules")?
        .set_item("lldb", &module)?;
    Ok(module)
}

/// Installs the compiled extension as `strpeek_lldb` and loads the LLDB shim
/// on top of it.
fn formatters(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let extension = PyModule::new(py, "strpeek_lldb")?;
    strpeek_lldb::strpeek_lldb(&extension)?;
    py.import("sys")?
        .getattr("modules")?
        .set_item("strpeek_lldb", &extension)?;

    let shim = CString::new(include_str!("../python/strpeek_formatters.py"))?;
    PyModule::from_code(
        py,
        &shim,
        c"strpeek_formatters.py",
        c"strpeek_formatters",
    )
}

fn process<'py>(lldb: &Bound<'py, PyModule>, regions: &[(u64, &[u8])]) -> Bound<'py, PyAny> {
    let py = lldb.py();
    let dict = PyDict::new(py);
    for (base, bytes) in regions {
        dict.set_item(base, PyBytes::new(py, bytes)).unwrap();
    }
    lldb.getattr("SBProcess").unwrap().call1((dict,)).unwrap()
}

#[test]
fn summarizes_strings() {
    Python::with_gil(|py| {
        let lldb = fake_lldb(py).unwrap();
        let process = process(&lldb, &[(0x1000, b"abc\td")]);
        let string = lldb.getattr("string").unwrap();

        let value = string.call1((&process, 0x1000, 5)).unwrap();
        assert_eq!(string_summary(&value, None, None), r#"(length: 5) "abc\td""#);

        let null = string.call1((&process, 0, 5)).unwrap();
        assert_eq!(string_summary(&null, None, None), "(null string)");

        let empty = string.call1((&process, 0x1000, 0)).unwrap();
        assert_eq!(string_summary(&empty, None, None), "(empty string)");

        let unmapped = string.call1((&process, 0x9000, 3)).unwrap();
        assert_eq!(
            string_summary(&unmapped, None, None),
            "<error reading memory>"
        );
    });
}

#[test]
fn summarizes_builders_and_cursors() {
    Python::with_gil(|py| {
        let lldb = fake_lldb(py).unwrap();
        let process = process(&lldb, &[(0x2000, b"hello world")]);

        let builder = lldb
            .getattr("builder")
            .unwrap()
            .call1((&process, 5, 0x2000, 11))
            .unwrap();
        assert_eq!(
            string_builder_summary(&builder, None, None),
            r#"length: 5 "hello""#
        );

        let cursor = lldb.getattr("cursor").unwrap();
        let mid = cursor.call1((&process, 6, 0x2000, 11)).unwrap();
        assert_eq!(
            string_cursor_summary(&mid, None, None),
            r#"(position: 6, remaining: 5) "world""#
        );

        let done = cursor.call1((&process, 11, 0x2000, 11)).unwrap();
        assert_eq!(
            string_cursor_summary(&done, None, None),
            "(position: 11, remaining: 0)"
        );

        let reads: Vec<(u64, usize)> = process.getattr("reads").unwrap().extract().unwrap();
        assert_eq!(reads, [(0x2000, 5), (0x2006, 5)]);
    });
}

#[test]
fn long_strings_read_twenty_bytes() {
    Python::with_gil(|py| {
        let lldb = fake_lldb(py).unwrap();
        let process = process(&lldb, &[(0x3000, &[b'z'; 64])]);
        let value = lldb
            .getattr("string")
            .unwrap()
            .call1((&process, 0x3000, 64))
            .unwrap();

        assert_eq!(
            string_summary(&value, None, None),
            r#"(length: 64) "zzzzzzzzzzzzzzzzzzzz""#
        );
        let reads: Vec<(u64, usize)> = process.getattr("reads").unwrap().extract().unwrap();
        assert_eq!(reads, [(0x3000, 20)]);
    });
}

#[test]
fn registers_python_summaries() {
    Python::with_gil(|py| {
        let lldb = fake_lldb(py).unwrap();
        let debugger = lldb.getattr("SBDebugger").unwrap().call0().unwrap();
        register_with_debugger(&debugger, "formatters");

        let commands = debugger.getattr("commands").unwrap();
        let commands = commands.downcast::<pyo3::types::PyList>().unwrap();
        let commands: Vec<String> = commands.iter().map(|c| c.extract().unwrap()).collect();
        assert_eq!(
            commands,
            [
                "type summary add string --python-function formatters.string_summary",
                "type summary add string_builder --python-function formatters.string_builder_summary",
                "type summary add string_cursor --python-function formatters.string_cursor_summary",
            ]
        );
    });
}

#[test]
fn shim_registers_its_own_functions() {
    Python::with_gil(|py| {
        let lldb = fake_lldb(py).unwrap();
        let formatters = formatters(py).unwrap();
        let debugger = lldb.getattr("SBDebugger").unwrap().call0().unwrap();
        formatters
            .getattr("__lldb_init_module")
            .unwrap()
            .call1((&debugger, PyDict::new(py)))
            .unwrap();

        let commands: Vec<String> = debugger.getattr("commands").unwrap().extract().unwrap();
        assert_eq!(
            commands,
            [
                "type summary add string --python-function strpeek_formatters.string_summary",
                "type summary add string_builder --python-function strpeek_formatters.string_builder_summary",
                "type summary add string_cursor --python-function strpeek_formatters.string_cursor_summary",
            ]
        );

        // LLDB calls the bound name with (valobj, internal_dict).
        let process = process(&lldb, &[(0x1000, b"via\nshim")]);
        let value = lldb
            .getattr("string")
            .unwrap()
            .call1((&process, 0x1000, 8))
            .unwrap();
        let summary: String = formatters
            .getattr("string_summary")
            .unwrap()
            .call1((&value, PyDict::new(py)))
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(summary, r#"(length: 8) "via\nshim""#);
    });
}
