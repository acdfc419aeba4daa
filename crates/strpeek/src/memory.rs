use alloc::{collections::BTreeMap, vec::Vec};

use crate::error::{ReadError, ReadErrorKind};

#[cfg(all(feature = "std", target_os = "linux"))]
pub use process::ProcessMemory;

/// Reads raw bytes out of the inspected process.
///
/// Implementations either return exactly `length` bytes or fail; partial
/// buffers are reported as [`ReadErrorKind::Short`].
pub trait MemoryReader {
    /// Reads `length` bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError`] when any byte of the range is not readable.
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError>;
}

impl<M: MemoryReader + ?Sized> MemoryReader for &M {
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError> {
        (**self).read_memory(address, length)
    }
}

/// A sparse, in-memory address space made of disjoint byte regions.
///
/// Stands in for a live process in tests and fuzzing, and for hosts that
/// snapshot memory before summarizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    regions: BTreeMap<u64, Vec<u8>>,
}

impl MemoryImage {
    /// Creates an image with nothing mapped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `bytes` at `address`, replacing any region starting there.
    pub fn insert(&mut self, address: u64, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.regions.insert(address, bytes.into());
        self
    }

    /// Unmaps the region starting at `address`.
    pub fn remove(&mut self, address: u64) -> Option<Vec<u8>> {
        self.regions.remove(&address)
    }

    fn region_at(&self, address: u64) -> Option<&[u8]> {
        let (start, bytes) = self.regions.range(..=address).next_back()?;
        let offset = usize::try_from(address - start).ok()?;
        bytes.get(offset..).filter(|rest| !rest.is_empty())
    }
}

impl MemoryReader for MemoryImage {
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError> {
        let Some(available) = self.region_at(address) else {
            return Err(ReadError::new(address, length, ReadErrorKind::Unmapped));
        };
        match available.get(..length) {
            Some(bytes) => Ok(bytes.to_vec()),
            None => Err(ReadError::new(
                address,
                length,
                ReadErrorKind::Short(available.len()),
            )),
        }
    }
}

#[cfg(all(feature = "std", target_os = "linux"))]
mod process {
    use alloc::{vec, vec::Vec};
    use std::{fs::File, io, os::unix::fs::FileExt};

    use super::MemoryReader;
    use crate::error::{ReadError, ReadErrorKind};

    /// Memory of a live process, read through `/proc/<pid>/mem`.
    ///
    /// The caller needs ptrace access to the target, which a debugger
    /// attached to it already has.
    #[derive(Debug)]
    pub struct ProcessMemory {
        pid: Option<u32>,
        file: File,
    }

    impl ProcessMemory {
        /// Opens the memory of process `pid`.
        ///
        /// # Errors
        ///
        /// Fails when the process does not exist or access is denied.
        pub fn open(pid: u32) -> io::Result<Self> {
            let file = File::open(std::format!("/proc/{pid}/mem"))?;
            Ok(Self {
                pid: Some(pid),
                file,
            })
        }

        /// Opens the memory of the calling process.
        ///
        /// # Errors
        ///
        /// Fails when `/proc` is not mounted.
        pub fn current() -> io::Result<Self> {
            let file = File::open("/proc/self/mem")?;
            Ok(Self { pid: None, file })
        }

        /// Target pid, or `None` for the calling process.
        #[must_use]
        pub fn pid(&self) -> Option<u32> {
            self.pid
        }
    }

    impl MemoryReader for ProcessMemory {
        fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError> {
            let mut buf = vec![0; length];
            let mut filled = 0;
            while filled < length {
                let Some(offset) = address.checked_add(filled as u64) else {
                    return Err(ReadError::new(address, length, ReadErrorKind::Unmapped));
                };
                match self.file.read_at(&mut buf[filled..], offset) {
                    Ok(0) if filled == 0 => {
                        return Err(ReadError::new(address, length, ReadErrorKind::Unmapped));
                    }
                    Ok(0) => {
                        return Err(ReadError::new(
                            address,
                            length,
                            ReadErrorKind::Short(filled),
                        ));
                    }
                    Ok(n) => filled += n,
                    Err(err) => {
                        return Err(ReadError::new(
                            address,
                            length,
                            ReadErrorKind::Io(err.kind()),
                        ));
                    }
                }
            }
            Ok(buf)
        }
    }
}
