//! Reading HTML fragments into a content tree and writing them back out.

mod reader;

use crate::nodes::{AstNode, NodeValue};
use phf::phf_set;
use std::fmt::{self, Write};

pub use self::reader::parse_fragment;

/// Elements that never have content or an end tag.
pub(crate) static VOID_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "source", "track", "wbr",
};

/// Elements whose content is taken literally, up to the matching end tag.
pub(crate) static RAW_TEXT_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "script", "style", "xmp",
};

/// Like [`RAW_TEXT_ELEMENTS`], but character references are decoded.
pub(crate) static ESCAPABLE_RAW_TEXT_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "textarea", "title",
};

const fn byte_set(bytes: &[u8]) -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        set[bytes[i] as usize] = true;
        i += 1;
    }
    set
}

const HTML_UNSAFE: [bool; 256] = byte_set(b"&<>\"");

/// Write `buffer` to `output`, escaping `&`, `<`, `>` and `"`.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let mut offset = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => unreachable!(),
            };
            output.write_str(&buffer[offset..i])?;
            output.write_str(esc)?;
            offset = i + 1;
        }
    }

    output.write_str(&buffer[offset..])
}

/// Formats a content tree as HTML.
///
/// Text is escaped, except inside raw text elements such as `script`.
/// Comments and `Raw` nodes are written verbatim.  Bare attributes come out
/// with an empty value (`checked=""`).
pub fn format_html<'a>(root: &'a AstNode<'a>, output: &mut dyn Write) -> fmt::Result {
    HtmlFormatter { output }.format(root)
}

struct HtmlFormatter<'o> {
    output: &'o mut dyn Write,
}

impl<'o> HtmlFormatter<'o> {
    fn format<'a>(&mut self, root: &'a AstNode<'a>) -> fmt::Result {
        // Iterate with a work stack rather than recursing, so deeply nested
        // input can't overflow.
        enum Phase {
            Pre,
            Post,
        }
        let mut stack = vec![(root, Phase::Pre)];

        while let Some((node, phase)) = stack.pop() {
            match phase {
                Phase::Pre => {
                    if self.enter(node)? {
                        stack.push((node, Phase::Post));
                        for child in node.children().collect::<Vec<_>>().into_iter().rev() {
                            stack.push((child, Phase::Pre));
                        }
                    }
                }
                Phase::Post => self.exit(node)?,
            }
        }

        Ok(())
    }

    /// Returns whether the node's children and end tag should follow.
    fn enter<'a>(&mut self, node: &'a AstNode<'a>) -> Result<bool, fmt::Error> {
        match node.data.borrow().value {
            NodeValue::Document => Ok(true),
            NodeValue::Element(ref element) => {
                write!(self.output, "<{}", element.name)?;
                for (key, value) in &element.attrs {
                    write!(self.output, " {}=\"", key)?;
                    escape(self.output, value)?;
                    self.output.write_str("\"")?;
                }
                self.output.write_str(">")?;
                Ok(!VOID_ELEMENTS.contains(element.name.to_ascii_lowercase().as_str()))
            }
            NodeValue::Text(ref literal) => {
                if in_raw_text(node) {
                    self.output.write_str(literal)?;
                } else {
                    escape(self.output, literal)?;
                }
                Ok(false)
            }
            NodeValue::Comment(ref literal) => {
                write!(self.output, "<!--{}-->", literal)?;
                Ok(false)
            }
            NodeValue::Raw(ref literal) => {
                self.output.write_str(literal)?;
                Ok(false)
            }
        }
    }

    fn exit<'a>(&mut self, node: &'a AstNode<'a>) -> fmt::Result {
        if let NodeValue::Element(ref element) = node.data.borrow().value {
            write!(self.output, "</{}>", element.name)?;
        }
        Ok(())
    }
}

fn in_raw_text<'a>(node: &'a AstNode<'a>) -> bool {
    node.parent().map_or(false, |parent| match parent.data.borrow().value {
        NodeValue::Element(ref element) => {
            RAW_TEXT_ELEMENTS.contains(element.name.to_ascii_lowercase().as_str())
        }
        _ => false,
    })
}
