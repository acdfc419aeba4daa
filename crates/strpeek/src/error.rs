use thiserror::Error;

/// A bounded read the host could not satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read {length} bytes at {address:#x}: {kind}")]
pub struct ReadError {
    /// First address of the failed request.
    pub address: u64,
    /// Number of bytes requested.
    pub length: usize,
    /// Why the read failed.
    pub kind: ReadErrorKind,
}

/// The reason a [`ReadError`] happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadErrorKind {
    /// Nothing is mapped at the requested address.
    #[error("address is not mapped")]
    Unmapped,
    /// The mapping ends before the requested length.
    #[error("only {0} bytes were readable")]
    Short(usize),
    /// The host's read primitive reported a failure of its own.
    #[error("host error: {0}")]
    Host(&'static str),
    /// Reading the process memory file failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(std::io::ErrorKind),
}

impl ReadError {
    /// Creates an error for the request `address..address + length`.
    #[must_use]
    pub fn new(address: u64, length: usize, kind: ReadErrorKind) -> Self {
        Self {
            address,
            length,
            kind,
        }
    }
}
