//! Plain snapshots of the three string-like layouts.
//!
//! Each view is extracted from a host value right before summarizing and
//! dropped right after; nothing here owns debuggee memory.

use crate::host::InspectedValue;

/// A `string`: pointer to the first byte and a byte length.
///
/// A zero `value` is the null string whatever `length` says; a non-null
/// `value` with zero `length` is the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringView {
    /// Address of the first byte.
    pub value: u64,
    /// Number of bytes.
    pub length: u64,
}

/// A `string_builder`: logical length plus the output buffer it appends to.
///
/// `out_buffer.length` is the buffer's capacity; only the first `length`
/// bytes are content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderView {
    /// Bytes appended so far.
    pub length: u64,
    /// Backing storage.
    pub out_buffer: StringView,
}

/// A `string_cursor`: read position over an immutable source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorView {
    /// Offset of the next unread byte.
    pub position: u64,
    /// String being consumed.
    pub source: StringView,
}

impl StringView {
    /// Reads the `value` and `length` members of `handle`.
    pub fn from_value<V: InspectedValue>(handle: &V) -> Self {
        Self {
            value: handle.unsigned_field("value"),
            length: handle.unsigned_field("length"),
        }
    }

    /// `true` when `value` is zero.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value == 0
    }
}

impl BuilderView {
    /// Reads `length` and the `outBuffer` string of `handle`.
    pub fn from_value<V: InspectedValue>(handle: &V) -> Self {
        Self {
            length: handle.unsigned_field("length"),
            out_buffer: handle
                .child("outBuffer")
                .map(|buffer| StringView::from_value(&buffer))
                .unwrap_or_default(),
        }
    }
}

impl CursorView {
    /// Reads `position` and the embedded `source` string of `handle`.
    pub fn from_value<V: InspectedValue>(handle: &V) -> Self {
        Self {
            position: handle.unsigned_field("position"),
            source: handle
                .child("source")
                .map(|source| StringView::from_value(&source))
                .unwrap_or_default(),
        }
    }

    /// Unread bytes, or `None` when `position` is past the end of `source`.
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        self.source.length.checked_sub(self.position)
    }
}
