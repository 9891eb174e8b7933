//! RTF text escaping.

use std::fmt::Write;

/// Escape raw text for inclusion in an RTF document body.
///
/// - `\` becomes `\\` and `{` becomes `\{`, so document content cannot
///   break out of the surrounding control-word stream. The closing brace is
///   left alone, matching the output of previous generators.
/// - Characters above U+007F become `\ud{\uc6\u<code>}` with the code point
///   zero-padded to six digits, keeping the output ASCII-only.
/// - TAB becomes the `\tab` control word.
///
/// Total function: never fails, and printable-ASCII text without `\`, `{`
/// or TAB passes through unchanged. Each source character is classified
/// once, so escapes are never re-escaped.
pub fn escape_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '\t' => out.push_str("\\tab"),
            c if (c as u32) > 0x7f => {
                // Full scalar value, not UTF-16 units: astral characters
                // yield one escape with the true code point.
                let _ = write!(out, "\\ud{{\\uc6\\u{:06}}}", c as u32);
            }
            c => out.push(c),
        }
    }

    out
}

/// Quote a resolved URL for use inside a `HYPERLINK` field instruction.
///
/// Field instructions are not document text, so this is not [`escape_rtf`]:
/// the URL is wrapped in double quotes with `\`, `{`, `}` and `"`
/// backslash-escaped so the destination stays safely delimited.
pub fn quote_field_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 2);
    out.push('"');
    for c in url.chars() {
        match c {
            '\\' | '{' | '}' | '"' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
