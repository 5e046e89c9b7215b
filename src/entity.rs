//! Character reference decoding for the HTML reader.

use std::borrow::Cow;
use std::char;

include!(concat!(env!("OUT_DIR"), "/entitydata.rs"));

/// Decode the character reference at the start of `text`, which begins just
/// after an `&`.
///
/// Returns the decoded text and the number of bytes consumed, `;`
/// included.  Named references are the full HTML5 set; a few of them stand
/// for two characters.  Numeric references that don't name a usable scalar
/// value decode to U+FFFD.
pub fn unescape(text: &str) -> Option<(Cow<'static, str>, usize)> {
    let bytes = text.as_bytes();

    if bytes.first() == Some(&b'#') {
        let (radix, start) = match bytes.get(1) {
            Some(b'x') | Some(b'X') => (16, 2),
            _ => (10, 1),
        };

        let digits = bytes[start..]
            .iter()
            .take_while(|b| (**b as char).is_digit(radix))
            .count();
        let end = start + digits;
        if digits == 0 || digits > 8 || bytes.get(end) != Some(&b';') {
            return None;
        }

        let codepoint = u32::from_str_radix(&text[start..end], radix).unwrap_or(0);
        let ch = match codepoint {
            0 => '\u{fffd}',
            c => char::from_u32(c).unwrap_or('\u{fffd}'),
        };
        return Some((Cow::Owned(ch.to_string()), end + 1));
    }

    let end = bytes
        .iter()
        .take(MAX_NAME_LENGTH + 1)
        .position(|&b| b == b';')?;
    ENTITIES
        .get(&text[..end])
        .map(|&chars| (Cow::Borrowed(chars), end + 1))
}

/// Decode every character reference in `text`.  Anything that isn't a
/// recognised reference is kept literally.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp + 1..];
        match unescape(rest) {
            Some((chars, len)) => {
                out.push_str(&chars);
                rest = &rest[len..];
            }
            None => out.push('&'),
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named() {
        assert_eq!(unescape_html("a &lt; b &amp;&amp; c"), "a < b && c");
        assert_eq!(unescape_html("&nbsp;"), "\u{a0}");
    }

    #[test]
    fn numeric() {
        assert_eq!(unescape_html("&#36;&#x24;&#X24;"), "$$$");
        assert_eq!(unescape_html("&#0;"), "\u{fffd}");
        assert_eq!(unescape_html("&#xD800;"), "\u{fffd}");
    }

    #[test]
    fn full_named_set() {
        assert_eq!(unescape_html("&copy; &mdash; &eacute; &Alpha;"), "\u{a9} \u{2014} \u{e9} \u{391}");
        assert_eq!(unescape_html("&NotEqualTilde;"), "\u{2242}\u{338}");
        assert_eq!(unescape_html("&CounterClockwiseContourIntegral;"), "\u{2233}");
    }

    #[test]
    fn unknown_kept() {
        assert_eq!(unescape_html("&bogus; & &#; &amp"), "&bogus; & &#; &amp");
    }
}
