use crate::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;

mod pathological;
mod plugins;
mod properties;
mod segments;

/// A plain text segment.
fn text(literal: &str) -> Segment {
    Segment::Text(literal.to_string())
}

/// A math segment.
fn math(data: &str, display: bool) -> Segment {
    Segment::Math {
        data: data.to_string(),
        display,
    }
}

/// One pass over `input` with a single delimiter pair.
fn split(input: &str, left: &str, right: &str, display: bool) -> SegmentSequence {
    split_at_delimiters(vec![text(input)], left, right, display).unwrap()
}

/// Merge adjacent `Text` segments and drop empty ones, leaving what a
/// renderer would actually see.
fn merged(segments: &[Segment]) -> SegmentSequence {
    let mut out: SegmentSequence = vec![];
    for segment in segments {
        match (segment, out.last_mut()) {
            (Segment::Text(t), _) if t.is_empty() => (),
            (Segment::Text(t), Some(Segment::Text(prev))) => prev.push_str(t),
            (segment, _) => out.push(segment.clone()),
        }
    }
    out
}

/// Rebuild the source text one pass was run over.
fn reassemble(segments: &[Segment], left: &str, right: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match *segment {
            Segment::Text(ref t) => out.push_str(t),
            Segment::Math { ref data, .. } => {
                out.push_str(left);
                out.push_str(data);
                out.push_str(right);
            }
        }
    }
    out
}

fn html(input: &str, expected: &str) {
    html_opts(input, expected, OptionsOverride::default())
}

fn html_opts(input: &str, expected: &str, options: OptionsOverride) {
    html_plugins_opts(input, expected, options, &Plugins::default())
}

fn html_plugins(input: &str, expected: &str, plugins: &Plugins) {
    html_plugins_opts(input, expected, OptionsOverride::default(), plugins)
}

fn html_plugins_opts(input: &str, expected: &str, options: OptionsOverride, plugins: &Plugins) {
    let output = render_html_with_plugins(input, Some(options), plugins)
        .unwrap_or_else(|err| panic!("rendering {:?} failed: {}", input, err));
    assert_eq!(output, expected, "input: {:?}", input);
}

/// `<span class="math math-inline" …>` as written by the default renderer.
fn inline(source: &str) -> String {
    format!(
        "<span class=\"math math-inline\" data-math-style=\"inline\">{}</span>",
        source
    )
}

/// `<span class="math math-display" …>` as written by the default renderer.
fn display(source: &str) -> String {
    format!(
        "<span class=\"math math-display\" data-math-style=\"display\">{}</span>",
        source
    )
}

fn dollars() -> Vec<Delimiter> {
    vec![Delimiter::new("$", "$", false).unwrap()]
}

/// Renders every span as a `<m>` element and counts the calls.  Sources
/// starting with `!` are rejected.
#[derive(Default)]
struct CountingRenderer {
    calls: Cell<usize>,
}

impl MathRendererAdapter for CountingRenderer {
    fn render<'a>(
        &self,
        arena: &'a Arena<AstNode<'a>>,
        math: &str,
        options: &MathRenderOptions,
    ) -> Result<&'a AstNode<'a>, RenderError> {
        self.calls.set(self.calls.get() + 1);
        if math.starts_with('!') {
            return Err(RenderError::new(format!("rejected {}", math)));
        }

        let mut element = nodes::NodeElement::new("m");
        if options.display {
            element = element.with_attr("display", "");
        }
        let node = nodes::new_element(arena, element);
        node.append(nodes::new_text(arena, math));
        Ok(node)
    }
}

fn to_html<'a>(root: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    format_html(root, &mut out).unwrap();
    out
}
