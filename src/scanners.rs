//! Scanning for the end of a math span.

/// Find the offset in `text` at which the closing `delimiter` of a math span
/// begins.
///
/// `text` starts just past the opening delimiter.  A match only counts at
/// brace depth zero or below, so `{ ) }` does not close a `(` span.  A
/// backslash hides the byte after it: `\)` never matches `)`, and `\{` never
/// opens a group.  Depth may go negative on stray `}`s; that simply keeps
/// matching enabled.
///
/// Scanning is byte-wise.  A UTF-8 delimiter can only match at a character
/// boundary, and an escaped multi-byte character leaves continuation bytes
/// behind that can match none of `\`, `{`, `}` or a delimiter's first byte.
pub fn find_end_of_math(delimiter: &str, text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let delim = delimiter.as_bytes();
    let mut index = 0;
    let mut brace_level: isize = 0;

    while index < bytes.len() {
        if brace_level <= 0 && bytes[index..].starts_with(delim) {
            return Some(index);
        }

        match bytes[index] {
            b'\\' => index += 1,
            b'{' => brace_level += 1,
            b'}' => brace_level -= 1,
            _ => (),
        }

        index += 1;
    }

    None
}
