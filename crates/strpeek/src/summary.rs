use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    decode::decode_lossy,
    error::ReadError,
    escape::escape_whitespace,
    host::InspectedValue,
    memory::MemoryReader,
    options::SummaryOptions,
    view::{BuilderView, CursorView, StringView},
};

/// The one-line rendering of a string-like value.
///
/// `Display` produces the exact text shown by the debugger. Previews are
/// stored decoded but unescaped; escaping happens on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// `(null string)`
    NullString,
    /// `(empty string)`
    EmptyString,
    /// `(length: N) "preview"`
    String {
        /// Full length of the string, not of the preview.
        length: u64,
        /// Decoded leading bytes.
        preview: String,
    },
    /// `length: 0`, for a builder with no content or no buffer.
    EmptyBuilder,
    /// `length: N "preview"`, followed by ` <exceeds capacity: C>` when the
    /// builder claims more bytes than its buffer holds.
    Builder {
        /// Logical length of the builder.
        length: u64,
        /// Decoded leading bytes.
        preview: String,
        /// Buffer capacity, set only when `length` exceeds it.
        overflow: Option<u64>,
    },
    /// `(position: P, remaining: R)` for a fully consumed cursor.
    CursorConsumed {
        /// Cursor position.
        position: u64,
        /// Unread bytes; always zero in practice.
        remaining: u64,
    },
    /// `(position: P, remaining: R) "preview"`
    Cursor {
        /// Cursor position.
        position: u64,
        /// Unread bytes.
        remaining: u64,
        /// Decoded leading unread bytes.
        preview: String,
    },
    /// `(position: P, length: L) <position past end>`
    CursorPastEnd {
        /// Cursor position.
        position: u64,
        /// Length of the source string.
        length: u64,
    },
    /// `<error reading memory>`
    Unreadable,
}

impl Summary {
    /// Decoded preview text, for the variants that carry one.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        match self {
            Self::String { preview, .. }
            | Self::Builder { preview, .. }
            | Self::Cursor { preview, .. } => Some(preview),
            _ => None,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullString => f.write_str("(null string)"),
            Self::EmptyString => f.write_str("(empty string)"),
            Self::String { length, preview } => {
                write!(f, "(length: {length}) \"{}\"", escape_whitespace(preview))
            }
            Self::EmptyBuilder => f.write_str("length: 0"),
            Self::Builder {
                length,
                preview,
                overflow,
            } => {
                write!(f, "length: {length} \"{}\"", escape_whitespace(preview))?;
                if let Some(capacity) = overflow {
                    write!(f, " <exceeds capacity: {capacity}>")?;
                }
                Ok(())
            }
            Self::CursorConsumed {
                position,
                remaining,
            } => write!(f, "(position: {position}, remaining: {remaining})"),
            Self::Cursor {
                position,
                remaining,
                preview,
            } => write!(
                f,
                "(position: {position}, remaining: {remaining}) \"{}\"",
                escape_whitespace(preview)
            ),
            Self::CursorPastEnd { position, length } => {
                write!(f, "(position: {position}, length: {length}) <position past end>")
            }
            Self::Unreadable => f.write_str("<error reading memory>"),
        }
    }
}

/// One bounded read of at most `options.preview_limit` bytes, decoded.
fn read_preview<M: MemoryReader + ?Sized>(
    memory: &M,
    address: u64,
    available: u64,
    options: &SummaryOptions,
) -> Result<String, ReadError> {
    let window = options.window(available);
    match memory.read_memory(address, window) {
        Ok(mut bytes) => {
            tracing::trace!(address, window, "read preview");
            bytes.truncate(window);
            Ok(decode_lossy(&bytes, options.invalid_utf8))
        }
        Err(err) => {
            tracing::trace!(address, window, %err, "preview unreadable");
            Err(err)
        }
    }
}

/// Summarizes a `string`.
pub fn summarize_string<M: MemoryReader + ?Sized>(
    view: &StringView,
    memory: &M,
    options: &SummaryOptions,
) -> Summary {
    if view.is_null() {
        return Summary::NullString;
    }
    if view.length == 0 {
        return Summary::EmptyString;
    }
    match read_preview(memory, view.value, view.length, options) {
        Ok(preview) => Summary::String {
            length: view.length,
            preview,
        },
        Err(_) => Summary::Unreadable,
    }
}

/// Summarizes a `string_builder`.
///
/// The preview window follows the builder's own `length`. When that exceeds
/// a known (nonzero) buffer capacity, the read stops at the capacity and the
/// summary is flagged.
pub fn summarize_builder<M: MemoryReader + ?Sized>(
    view: &BuilderView,
    memory: &M,
    options: &SummaryOptions,
) -> Summary {
    let buffer = &view.out_buffer;
    if view.length == 0 || buffer.is_null() {
        return Summary::EmptyBuilder;
    }

    let overflow = (buffer.length != 0 && view.length > buffer.length).then_some(buffer.length);
    let available = overflow.unwrap_or(view.length);
    match read_preview(memory, buffer.value, available, options) {
        Ok(preview) => Summary::Builder {
            length: view.length,
            preview,
            overflow,
        },
        Err(_) => Summary::Unreadable,
    }
}

/// Summarizes a `string_cursor`, previewing only the unread part.
pub fn summarize_cursor<M: MemoryReader + ?Sized>(
    view: &CursorView,
    memory: &M,
    options: &SummaryOptions,
) -> Summary {
    let source = &view.source;
    if source.is_null() {
        return Summary::NullString;
    }
    if source.length == 0 {
        return Summary::EmptyString;
    }
    let Some(remaining) = view.remaining() else {
        return Summary::CursorPastEnd {
            position: view.position,
            length: source.length,
        };
    };
    if remaining == 0 {
        return Summary::CursorConsumed {
            position: view.position,
            remaining,
        };
    }

    let Some(address) = source.value.checked_add(view.position) else {
        return Summary::Unreadable;
    };
    match read_preview(memory, address, remaining, options) {
        Ok(preview) => Summary::Cursor {
            position: view.position,
            remaining,
            preview,
        },
        Err(_) => Summary::Unreadable,
    }
}

/// Host entry point for values of type `string`.
pub fn string_summary<V: InspectedValue>(value: &V) -> String {
    let view = StringView::from_value(value);
    summarize_string(&view, value.memory(), &SummaryOptions::default()).to_string()
}

/// Host entry point for values of type `string_builder`.
pub fn string_builder_summary<V: InspectedValue>(value: &V) -> String {
    let view = BuilderView::from_value(value);
    summarize_builder(&view, value.memory(), &SummaryOptions::default()).to_string()
}

/// Host entry point for values of type `string_cursor`.
pub fn string_cursor_summary<V: InspectedValue>(value: &V) -> String {
    let view = CursorView::from_value(value);
    summarize_cursor(&view, value.memory(), &SummaryOptions::default()).to_string()
}
