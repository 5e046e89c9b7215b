//! A minimal math renderer that marks spans up for client-side typesetting.

use crate::adapters::{MathRenderOptions, MathRendererAdapter};
use crate::error::RenderError;
use crate::nodes::{self, AstNode, NodeElement};
use typed_arena::Arena;

#[derive(Debug, Default, Copy, Clone)]
/// Wraps each span in a `span` element tagged with its style:
///
/// ```html
/// <span class="math math-inline" data-math-style="inline">x^2</span>
/// ```
///
/// The source is kept as a text child, so it is escaped once when the tree
/// is written out.  Spans whose braces don't balance are rejected.
pub struct HtmlMathRenderer;

impl HtmlMathRenderer {
    /// Construct a new `HtmlMathRenderer`.
    pub fn new() -> Self {
        HtmlMathRenderer
    }
}

impl MathRendererAdapter for HtmlMathRenderer {
    fn render<'a>(
        &self,
        arena: &'a Arena<AstNode<'a>>,
        math: &str,
        options: &MathRenderOptions,
    ) -> Result<&'a AstNode<'a>, RenderError> {
        check_braces(math)?;

        let style = if options.display { "display" } else { "inline" };
        let span = nodes::new_element(
            arena,
            NodeElement::new("span")
                .with_attr("class", format!("math math-{}", style))
                .with_attr("data-math-style", style),
        );
        span.append(nodes::new_text(arena, math));
        Ok(span)
    }
}

fn check_braces(math: &str) -> Result<(), RenderError> {
    let bytes = math.as_bytes();
    let mut open = vec![];
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => open.push(i),
            b'}' => {
                if open.pop().is_none() {
                    return Err(RenderError::new(format!("unexpected '}}' at {}", i)));
                }
            }
            _ => (),
        }
        i += 1;
    }

    match open.pop() {
        Some(at) => Err(RenderError::new(format!("unclosed '{{' at {}", at))),
        None => Ok(()),
    }
}
