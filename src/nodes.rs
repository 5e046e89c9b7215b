//! The content tree that math detection runs over.

use crate::arena_tree::Node;
use std::cell::RefCell;
use typed_arena::Arena;

/// The core content node enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The root of a parsed fragment.  Contains any other nodes.
    Document,

    /// An element such as `<p>` or `<span class="x">`.  Contains any other nodes.
    Element(NodeElement),

    /// Literal text.  This is the only kind of node math detection rewrites.
    Text(String),

    /// A comment.  Never scanned, never descended into.
    Comment(String),

    /// Pre-rendered markup, written out verbatim.  Used for doctypes and
    /// processing instructions read from input, and available to render
    /// backends that hand back finished markup rather than a node tree.
    Raw(String),
}

/// An element's name and attributes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeElement {
    /// The tag name as written in the source.
    pub name: String,

    /// Attributes in source order.  A bare attribute has an empty value.
    pub attrs: Vec<(String, String)>,
}

impl NodeElement {
    /// An element with no attributes.
    pub fn new<S: Into<String>>(name: S) -> Self {
        NodeElement {
            name: name.into(),
            attrs: vec![],
        }
    }

    /// Add an attribute, keeping source order.
    pub fn with_attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Look up an attribute by name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// The three kinds of node the tree walker tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Candidate for math detection.
    Text,
    /// Descended into unless its tag is ignored.
    Element,
    /// Left alone entirely.
    Other,
}

impl NodeValue {
    /// Classify this node for traversal.
    ///
    /// `Document` counts as an element so that a whole parsed fragment can be
    /// handed to the walker's recursion like any other container.
    pub fn kind(&self) -> NodeKind {
        match *self {
            NodeValue::Text(..) => NodeKind::Text,
            NodeValue::Document | NodeValue::Element(..) => NodeKind::Element,
            NodeValue::Comment(..) | NodeValue::Raw(..) => NodeKind::Other,
        }
    }

    /// The literal of a `Text` node.
    pub fn text(&self) -> Option<&str> {
        match *self {
            NodeValue::Text(ref t) => Some(t),
            _ => None,
        }
    }

    /// The element data of an `Element` node.
    pub fn element(&self) -> Option<&NodeElement> {
        match *self {
            NodeValue::Element(ref e) => Some(e),
            _ => None,
        }
    }
}

/// A single node's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,
}

impl Ast {
    /// Wrap a node value.
    pub fn new(value: NodeValue) -> Self {
        Ast { value }
    }
}

/// The type of a node within the content tree.
///
/// The `Ast` sits in a `RefCell` so node values can be read and rewritten
/// through the shared references the tree hands out.
pub type AstNode<'a> = Node<'a, RefCell<Ast>>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new, unlinked AST node for the given value.
    fn from(value: NodeValue) -> Self {
        Node::new(RefCell::new(Ast::new(value)))
    }
}

/// Allocate an unlinked node in `arena`.
pub fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(value.into())
}

/// Allocate an element node in `arena`.
pub fn new_element<'a>(arena: &'a Arena<AstNode<'a>>, element: NodeElement) -> &'a AstNode<'a> {
    new_node(arena, NodeValue::Element(element))
}

/// Allocate a text node in `arena`.
pub fn new_text<'a, S: Into<String>>(arena: &'a Arena<AstNode<'a>>, text: S) -> &'a AstNode<'a> {
    new_node(arena, NodeValue::Text(text.into()))
}

/// Concatenate the literals of every text node at or beneath `node`.
pub fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    for n in node.descendants() {
        if let NodeValue::Text(ref t) = n.data.borrow().value {
            out.push_str(t);
        }
    }
    out
}
