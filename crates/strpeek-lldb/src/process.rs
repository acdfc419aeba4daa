use pyo3::{prelude::*, types::PyBytes};
use strpeek::{MemoryReader, ReadError, ReadErrorKind};

/// An `lldb.SBProcess` seen as a [`MemoryReader`].
#[derive(Clone, Debug)]
pub struct LldbProcess<'py> {
    process: Bound<'py, PyAny>,
}

impl<'py> LldbProcess<'py> {
    pub fn new(process: Bound<'py, PyAny>) -> Self {
        Self { process }
    }

    /// `process.ReadMemory(address, length, error)`, with `error` checked
    /// before the returned bytes are looked at.
    fn read(&self, address: u64, length: usize) -> Result<Vec<u8>, &'static str> {
        let py = self.process.py();
        let error = py
            .import("lldb")
            .and_then(|lldb| lldb.getattr("SBError")?.call0())
            .map_err(|_| "lldb.SBError is unavailable")?;
        let data = self
            .process
            .call_method1("ReadMemory", (address, length, &error))
            .map_err(|_| "ReadMemory raised")?;
        let success = error
            .call_method0("Success")
            .and_then(|ok| ok.extract::<bool>())
            .map_err(|_| "SBError.Success raised")?;
        if !success {
            return Err("ReadMemory failed");
        }
        let bytes = data
            .downcast::<PyBytes>()
            .map_err(|_| "ReadMemory returned no bytes")?;
        Ok(bytes.as_bytes().to_vec())
    }
}

impl MemoryReader for LldbProcess<'_> {
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError> {
        let bytes = self
            .read(address, length)
            .map_err(|reason| ReadError::new(address, length, ReadErrorKind::Host(reason)))?;
        if bytes.len() < length {
            return Err(ReadError::new(
                address,
                length,
                ReadErrorKind::Short(bytes.len()),
            ));
        }
        Ok(bytes)
    }
}
