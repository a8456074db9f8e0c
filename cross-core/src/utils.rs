//! String casing helpers.

use std::borrow::Cow;

/// Lower-case the first character of a string (e.g., "InputMessage" -> "inputMessage").
///
/// Every other character is kept as is, so this is not a word-splitting
/// conversion: "HTTPServer" becomes "hTTPServer". Empty input is returned
/// unchanged, and a single character is lower-cased like any other first
/// character. Casing follows Unicode rules and never depends on the locale.
///
/// Borrows the input when nothing changes.
pub fn to_camel_case(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        None => Cow::Borrowed(s),
        Some(c) if c.to_lowercase().eq(std::iter::once(c)) => Cow::Borrowed(s),
        Some(c) => Cow::Owned(c.to_lowercase().chain(chars).collect()),
    }
}

/// [`to_camel_case`] for input that may be absent; `None` stays `None`.
pub fn to_camel_case_opt(s: Option<&str>) -> Option<Cow<'_, str>> {
    s.map(to_camel_case)
}
