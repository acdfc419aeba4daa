use alloc::{format, string::String, vec::Vec};

use crate::{
    host::InspectedValue,
    options::SummaryOptions,
    summary::{
        Summary, string_builder_summary, string_cursor_summary, string_summary,
        summarize_builder, summarize_cursor, summarize_string,
    },
    view::{BuilderView, CursorView, StringView},
};

/// The three recognized string-like types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryKind {
    /// `string`
    String,
    /// `string_builder`
    StringBuilder,
    /// `string_cursor`
    StringCursor,
}

impl SummaryKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 3] = [Self::String, Self::StringBuilder, Self::StringCursor];

    /// Type name the host matches variables against.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringBuilder => "string_builder",
            Self::StringCursor => "string_cursor",
        }
    }

    /// Name of the summary function exported to scripting hosts.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::String => "string_summary",
            Self::StringBuilder => "string_builder_summary",
            Self::StringCursor => "string_cursor_summary",
        }
    }

    /// Reverse of [`SummaryKind::type_name`].
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// LLDB command binding this kind to `<module>.<function>`.
    #[must_use]
    pub fn lldb_command(self, module: &str) -> String {
        format!(
            "type summary add {} --python-function {module}.{}",
            self.type_name(),
            self.function_name()
        )
    }

    /// Summary function for values of this kind, using default options.
    #[must_use]
    pub fn summarizer<V: InspectedValue>(self) -> fn(&V) -> String {
        match self {
            Self::String => string_summary::<V>,
            Self::StringBuilder => string_builder_summary::<V>,
            Self::StringCursor => string_cursor_summary::<V>,
        }
    }
}

/// The host side of registration: a table from type name to summarizer.
pub trait SummaryRegistry<V: InspectedValue> {
    /// Binds `summarizer` to `type_name`, replacing any previous binding.
    fn add_summary(&mut self, type_name: &'static str, summarizer: fn(&V) -> String);
}

/// Binds all three summarizers in `registry`. Calling it again rebinds.
pub fn register<V, R>(registry: &mut R)
where
    V: InspectedValue,
    R: SummaryRegistry<V> + ?Sized,
{
    for kind in SummaryKind::ALL {
        tracing::debug!(type_name = kind.type_name(), "registering summary");
        registry.add_summary(kind.type_name(), kind.summarizer::<V>());
    }
}

/// Summarizes `value` as `kind` with explicit options.
pub fn summarize_as<V: InspectedValue>(
    kind: SummaryKind,
    value: &V,
    options: &SummaryOptions,
) -> Summary {
    let memory = value.memory();
    match kind {
        SummaryKind::String => summarize_string(&StringView::from_value(value), memory, options),
        SummaryKind::StringBuilder => {
            summarize_builder(&BuilderView::from_value(value), memory, options)
        }
        SummaryKind::StringCursor => {
            summarize_cursor(&CursorView::from_value(value), memory, options)
        }
    }
}

/// LLDB commands binding each type to `<module>.<function>` summaries.
///
/// ```rust
/// let commands = strpeek::lldb_commands("formatters");
/// assert_eq!(
///     commands[0],
///     "type summary add string --python-function formatters.string_summary"
/// );
/// ```
#[must_use]
pub fn lldb_commands(module: &str) -> Vec<String> {
    SummaryKind::ALL
        .into_iter()
        .map(|kind| kind.lldb_command(module))
        .collect()
}
