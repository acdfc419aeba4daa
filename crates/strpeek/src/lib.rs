//! One-line previews of string-like values living in a debuggee's memory.
//!
//! A debugger host hands a summarizer an [`InspectedValue`]; the summarizer
//! pulls the numeric fields it needs, performs at most one bounded
//! [`MemoryReader`] call, and renders a [`Summary`] whose `Display` is the
//! exact text shown in the variables view.
//!
//! ```rust
//! use strpeek::{MemoryImage, StringView, SummaryOptions, summarize_string};
//!
//! let mut memory = MemoryImage::new();
//! memory.insert(0x1000, b"abc\td");
//!
//! let view = StringView { value: 0x1000, length: 5 };
//! let summary = summarize_string(&view, &memory, &SummaryOptions::default());
//! assert_eq!(summary.to_string(), r#"(length: 5) "abc\td""#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decode;
mod error;
mod escape;
mod host;
mod memory;
mod options;
mod registrar;
mod summary;
mod view;

#[cfg(test)]
mod tests;

pub use decode::decode_lossy;
pub use error::{ReadError, ReadErrorKind};
pub use escape::escape_whitespace;
pub use host::InspectedValue;
#[cfg(all(feature = "std", target_os = "linux"))]
pub use memory::ProcessMemory;
pub use memory::{MemoryImage, MemoryReader};
pub use options::{InvalidUtf8, SummaryOptions};
pub use registrar::{SummaryKind, SummaryRegistry, lldb_commands, register, summarize_as};
pub use summary::{
    Summary, string_builder_summary, string_cursor_summary, string_summary, summarize_builder,
    summarize_cursor, summarize_string,
};
pub use view::{BuilderView, CursorView, StringView};
