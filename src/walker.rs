//! Finding and replacing math in a content tree.

use crate::adapters::MathRendererAdapter;
use crate::error::Error;
use crate::nodes::{AstNode, NodeKind, NodeValue};
use crate::options::{Delimiter, Options, OptionsOverride, Plugins, RenderErrorPolicy};
use crate::plugins::html_math::HtmlMathRenderer;
use crate::render;
use crate::segment;
use rustc_hash::FxHashSet;
use typed_arena::Arena;

/// Render every delimited math span in the text beneath `container`, using
/// the default renderer.
///
/// `options` is laid over [`Options::default`] key by key.  Fails with
/// [`Error::Validation`] before touching anything if `container` is `None`
/// or a delimiter is empty.
///
/// ```rust
/// # use autotex::{Arena, format_html, parse_fragment, process_math_in_element};
/// let arena = Arena::new();
/// let root = parse_fragment(&arena, "<p>Area: \\(\\pi r^2\\)</p><pre>\\(x\\)</pre>");
/// process_math_in_element(&arena, Some(root), None).unwrap();
///
/// let mut html = String::new();
/// format_html(root, &mut html).unwrap();
/// assert_eq!(
///     html,
///     "<p>Area: <span class=\"math math-inline\" data-math-style=\"inline\">\\pi r^2</span></p>\
///      <pre>\\(x\\)</pre>"
/// );
/// ```
pub fn process_math_in_element<'a>(
    arena: &'a Arena<AstNode<'a>>,
    container: Option<&'a AstNode<'a>>,
    options: Option<OptionsOverride>,
) -> Result<(), Error> {
    process_math_in_element_with_plugins(arena, container, options, &Plugins::default())
}

/// As [`process_math_in_element`], rendering with the plugins given.
pub fn process_math_in_element_with_plugins<'a>(
    arena: &'a Arena<AstNode<'a>>,
    container: Option<&'a AstNode<'a>>,
    options: Option<OptionsOverride>,
    plugins: &Plugins,
) -> Result<(), Error> {
    let container =
        container.ok_or_else(|| Error::Validation("No element provided to process".to_string()))?;
    let options = Options::default().merge(options.unwrap_or_default());

    let default_renderer = HtmlMathRenderer::new();
    let renderer: &dyn MathRendererAdapter = match plugins.render.math_renderer {
        Some(renderer) => renderer,
        None => &default_renderer,
    };

    walk(arena, container, &options, renderer)
}

/// Replace math in the text beneath `container` according to `options`.
///
/// Text nodes are split and replaced in place.  Elements are descended into
/// unless their tag is in `options.ignored_tags`.  Anything else is left
/// alone.  Nodes inserted by a replacement are never visited.
pub fn walk<'a>(
    arena: &'a Arena<AstNode<'a>>,
    container: &'a AstNode<'a>,
    options: &Options,
    renderer: &dyn MathRendererAdapter,
) -> Result<(), Error> {
    options.validate()?;
    Walker::new(arena, options, renderer).process_element(container)
}

struct Walker<'a, 'o> {
    arena: &'a Arena<AstNode<'a>>,
    delimiters: &'o [Delimiter],
    ignored_tags: FxHashSet<String>,
    renderer: &'o dyn MathRendererAdapter,
    policy: RenderErrorPolicy,
}

impl<'a, 'o> Walker<'a, 'o> {
    fn new(
        arena: &'a Arena<AstNode<'a>>,
        options: &'o Options,
        renderer: &'o dyn MathRendererAdapter,
    ) -> Self {
        Walker {
            arena,
            delimiters: &options.delimiters,
            ignored_tags: options
                .ignored_tags
                .iter()
                .map(|t| caseless::default_case_fold_str(t))
                .collect(),
            renderer,
            policy: options.error_policy,
        }
    }

    fn process_element(&self, elem: &'a AstNode<'a>) -> Result<(), Error> {
        // Each entry is the next sibling still to visit at one level of
        // nesting.  A node's successor is pushed before the node is handled,
        // so whatever gets spliced in its place is stepped over.
        let mut stack = vec![elem.first_child()];

        while let Some(cursor) = stack.pop() {
            let node = match cursor {
                Some(node) => node,
                None => continue,
            };
            stack.push(node.next_sibling());

            let kind = node.data.borrow().value.kind();
            match kind {
                NodeKind::Text => self.replace_text(node)?,
                NodeKind::Element => {
                    if self.should_process(node) {
                        stack.push(node.first_child());
                    }
                }
                NodeKind::Other => (),
            }
        }

        Ok(())
    }

    fn should_process(&self, node: &'a AstNode<'a>) -> bool {
        match node.data.borrow().value {
            NodeValue::Element(ref element) => {
                let name = caseless::default_case_fold_str(&element.name);
                if self.ignored_tags.contains(&name) {
                    log::debug!("skipping <{}>", element.name);
                    false
                } else {
                    true
                }
            }
            _ => true,
        }
    }

    fn replace_text(&self, node: &'a AstNode<'a>) -> Result<(), Error> {
        let segments = match node.data.borrow().value {
            NodeValue::Text(ref text) => segment::split_with_delimiters(text, self.delimiters)?,
            _ => return Ok(()),
        };

        if !segments.iter().any(|s| s.is_math()) {
            return Ok(());
        }

        let fragment = render::build_fragment(self.arena, segments, self.renderer, self.policy)?;
        for &new in fragment.iter() {
            node.insert_before(new);
        }
        node.detach();

        log::debug!("replaced text node with {} nodes", fragment.len());
        Ok(())
    }
}
