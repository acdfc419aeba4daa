/// How the lenient decoder treats bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidUtf8 {
    /// Silently remove invalid sequences.
    #[default]
    Drop,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
}

/// Configuration for the summarizers.
///
/// # Examples
///
/// ```rust
/// use strpeek::{InvalidUtf8, SummaryOptions};
///
/// let options = SummaryOptions {
///     invalid_utf8: InvalidUtf8::Replace,
///     ..Default::default()
/// };
/// assert_eq!(options.preview_limit, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum number of bytes read from the debuggee for one preview.
    ///
    /// Keeps the variables view responsive on arbitrarily large strings.
    /// A limit of zero is treated as one.
    ///
    /// # Default
    ///
    /// `20`
    pub preview_limit: usize,

    /// Treatment of undecodable bytes inside the preview window.
    ///
    /// # Default
    ///
    /// [`InvalidUtf8::Drop`]
    pub invalid_utf8: InvalidUtf8,
}

impl SummaryOptions {
    /// Number of bytes to read for a span of `available` bytes.
    pub(crate) fn window(&self, available: u64) -> usize {
        let limit = self.preview_limit.max(1);
        usize::try_from(available).map_or(limit, |available| available.min(limit))
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            preview_limit: 20,
            invalid_utf8: InvalidUtf8::Drop,
        }
    }
}
