use crate::entity;
use crate::html::{ESCAPABLE_RAW_TEXT_ELEMENTS, RAW_TEXT_ELEMENTS, VOID_ELEMENTS};
use crate::nodes::{self, AstNode, NodeElement, NodeValue};
use typed_arena::Arena;

/// Parse an HTML fragment into a tree rooted at a `Document` node.
///
/// The reader is forgiving rather than conforming: it never fails.  A `<`
/// that doesn't start a well-formed tag is text, end tags close the nearest
/// open element with the same name and are dropped if there is none, and
/// elements left open at the end are closed implicitly.  Adjacent text is
/// always merged into a single text node.
///
/// ```rust
/// # use autotex::{Arena, parse_fragment, nodes::collect_text};
/// let arena = Arena::new();
/// let root = parse_fragment(&arena, "<p>a &lt; <b>b</b></p>");
/// assert_eq!(collect_text(root), "a < b");
/// ```
pub fn parse_fragment<'a>(arena: &'a Arena<AstNode<'a>>, input: &str) -> &'a AstNode<'a> {
    let root = nodes::new_node(arena, NodeValue::Document);
    let mut reader = Reader {
        arena,
        input,
        pos: 0,
        open: vec![root],
        text: String::new(),
    };
    reader.run();
    root
}

struct Reader<'a, 'i> {
    arena: &'a Arena<AstNode<'a>>,
    input: &'i str,
    pos: usize,
    open: Vec<&'a AstNode<'a>>,
    text: String,
}

struct StartTag {
    element: NodeElement,
    self_closing: bool,
}

impl<'a, 'i> Reader<'a, 'i> {
    fn run(&mut self) {
        let input = self.input;
        while self.pos < input.len() {
            let rest = &input[self.pos..];
            let lt = match rest.find('<') {
                Some(lt) => lt,
                None => {
                    self.push_text(rest);
                    self.pos = input.len();
                    break;
                }
            };

            self.push_text(&rest[..lt]);
            self.pos += lt;

            if !self.markup() {
                self.text.push('<');
                self.pos += 1;
            }
        }

        self.flush_text();
    }

    /// Try to consume markup at `self.pos`, which points at a `<`.
    fn markup(&mut self) -> bool {
        let input = self.input;
        let rest = &input[self.pos..];

        if let Some(body) = rest.strip_prefix("<!--") {
            let (comment, consumed) = match body.find("-->") {
                Some(end) => (&body[..end], 4 + end + 3),
                None => (body, rest.len()),
            };
            self.append(NodeValue::Comment(comment.to_string()));
            self.pos += consumed;
            return true;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let consumed = rest.find('>').map_or(rest.len(), |gt| gt + 1);
            self.append(NodeValue::Raw(rest[..consumed].to_string()));
            self.pos += consumed;
            return true;
        }

        if let Some(body) = rest.strip_prefix("</") {
            let name_len = tag_name_len(body);
            if name_len == 0 {
                return false;
            }
            let gt = match body[name_len..].find('>') {
                Some(gt) => gt,
                None => return false,
            };
            self.close(&body[..name_len]);
            self.pos += 2 + name_len + gt + 1;
            return true;
        }

        match self.start_tag(&rest[1..]) {
            Some((tag, consumed)) => {
                self.pos += 1 + consumed;
                self.open_element(tag);
                true
            }
            None => false,
        }
    }

    fn start_tag(&self, body: &str) -> Option<(StartTag, usize)> {
        let name_len = tag_name_len(body);
        if name_len == 0 {
            return None;
        }

        let bytes = body.as_bytes();
        let mut element = NodeElement::new(&body[..name_len]);
        let mut i = name_len;

        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            match bytes.get(i)? {
                b'>' => {
                    return Some((
                        StartTag {
                            element,
                            self_closing: false,
                        },
                        i + 1,
                    ))
                }
                b'/' => {
                    if bytes.get(i + 1) == Some(&b'>') {
                        return Some((
                            StartTag {
                                element,
                                self_closing: true,
                            },
                            i + 2,
                        ));
                    }
                    i += 1;
                    continue;
                }
                _ => (),
            }

            let key_start = i;
            while i < bytes.len()
                && !matches!(bytes[i], b'=' | b'>' | b'/')
                && !bytes[i].is_ascii_whitespace()
            {
                i += 1;
            }
            let key = &body[key_start..i];

            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if bytes.get(i) != Some(&b'=') {
                element.attrs.push((key.to_string(), String::new()));
                continue;
            }
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            let value = match *bytes.get(i)? {
                quote @ b'"' | quote @ b'\'' => {
                    let len = body[i + 1..].find(quote as char)?;
                    let value = &body[i + 1..i + 1 + len];
                    i += len + 2;
                    value
                }
                _ => {
                    let start = i;
                    while i < bytes.len() && bytes[i] != b'>' && !bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    &body[start..i]
                }
            };
            element
                .attrs
                .push((key.to_string(), entity::unescape_html(value)));
        }
    }

    fn open_element(&mut self, tag: StartTag) {
        let name = tag.element.name.to_ascii_lowercase();
        let node = self.append(NodeValue::Element(tag.element));

        if tag.self_closing || VOID_ELEMENTS.contains(name.as_str()) {
            return;
        }

        let decode = ESCAPABLE_RAW_TEXT_ELEMENTS.contains(name.as_str());
        if decode || RAW_TEXT_ELEMENTS.contains(name.as_str()) {
            self.raw_text(node, &name, decode);
        } else {
            self.open.push(node);
        }
    }

    /// Everything up to `</name` becomes the element's only child.
    fn raw_text(&mut self, node: &'a AstNode<'a>, name: &str, decode: bool) {
        let input = self.input;
        let rest = &input[self.pos..];
        let end = find_end_tag(rest, name);
        let content = &rest[..end];

        if !content.is_empty() {
            let literal = if decode {
                entity::unescape_html(content)
            } else {
                content.to_string()
            };
            node.append(nodes::new_text(self.arena, literal));
        }

        self.pos += end;
        if self.pos < input.len() {
            let tail = &input[self.pos..];
            self.pos += tail.find('>').map_or(tail.len(), |gt| gt + 1);
        }
    }

    fn close(&mut self, name: &str) {
        self.flush_text();
        let found = self.open.iter().skip(1).rposition(|node| {
            node.data
                .borrow()
                .value
                .element()
                .map_or(false, |e| e.name.eq_ignore_ascii_case(name))
        });
        match found {
            Some(ix) => self.open.truncate(ix + 1),
            None => log::debug!("ignoring stray </{}>", name),
        }
    }

    fn append(&mut self, value: NodeValue) -> &'a AstNode<'a> {
        self.flush_text();
        let node = nodes::new_node(self.arena, value);
        self.current().append(node);
        node
    }

    fn current(&self) -> &'a AstNode<'a> {
        self.open[self.open.len() - 1]
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(&entity::unescape_html(text));
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let node = nodes::new_text(self.arena, text);
        self.current().append(node);
    }
}

fn tag_name_len(body: &str) -> usize {
    let bytes = body.as_bytes();
    if !bytes.first().map_or(false, u8::is_ascii_alphabetic) {
        return 0;
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b':' | b'_'))
        .count()
}

/// Offset of the first `</name` in `text` (ASCII case-insensitive), or the
/// end of `text`.
fn find_end_tag(text: &str, name: &str) -> usize {
    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(lt) = text[from..].find("</") {
        let at = from + lt;
        let candidate = &bytes[at + 2..];
        if candidate.len() >= name.len()
            && candidate[..name.len()].eq_ignore_ascii_case(name.as_bytes())
        {
            return at;
        }
        from = at + 2;
    }

    text.len()
}
