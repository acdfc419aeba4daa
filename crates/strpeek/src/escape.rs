use alloc::{borrow::Cow, string::String};

/// Mnemonic for each whitespace control character that would otherwise break
/// a one-line summary.
const fn mnemonic(c: char) -> Option<&'static str> {
    match c {
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\u{0B}' => Some("\\v"),
        '\u{0C}' => Some("\\f"),
        '\r' => Some("\\r"),
        _ => None,
    }
}

/// Replaces tab, newline, vertical tab, form feed and carriage return with
/// their two-character escapes (`\t`, `\n`, `\v`, `\f`, `\r`).
///
/// Everything else, including other control characters, passes through
/// untouched. Borrows the input when there is nothing to escape.
///
/// ```rust
/// use strpeek::escape_whitespace;
///
/// assert_eq!(escape_whitespace("a\tb\r\n"), "a\\tb\\r\\n");
/// assert_eq!(escape_whitespace("\u{7}bell"), "\u{7}bell");
/// ```
#[must_use]
pub fn escape_whitespace(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c| mnemonic(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 4);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match mnemonic(c) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use rstest::rstest;

    use super::escape_whitespace;

    #[rstest]
    #[case("\t", "\\t")]
    #[case("\n", "\\n")]
    #[case("\u{0B}", "\\v")]
    #[case("\u{0C}", "\\f")]
    #[case("\r", "\\r")]
    #[case("line one\r\nline two", "line one\\r\\nline two")]
    #[case("tab\tin\tthe\tmiddle", "tab\\tin\\tthe\\tmiddle")]
    fn escapes_whitespace_controls(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_whitespace(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("\u{0}\u{7}\u{1B}[0m")]
    #[case("caf\u{E9} \u{1F600}")]
    #[case("already \\t escaped")]
    fn leaves_everything_else_alone(#[case] input: &str) {
        let out = escape_whitespace(input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, input);
    }
}
