//! Turning segments into content nodes.

use crate::adapters::{MathRenderOptions, MathRendererAdapter};
use crate::error::{Error, RenderError};
use crate::nodes::{self, AstNode, NodeElement};
use crate::options::RenderErrorPolicy;
use crate::segment::{Segment, SegmentSequence};
use smallvec::SmallVec;
use typed_arena::Arena;

/// Unattached nodes ready to be spliced into a tree, in order.
pub type Fragment<'a> = SmallVec<[&'a AstNode<'a>; 8]>;

/// Build content nodes for `segments`.
///
/// Text segments become text nodes holding their literal verbatim; empty ones
/// produce nothing.  Math segments go through `renderer`.  Under
/// [`RenderErrorPolicy::Abort`] the first failure is returned; under
/// [`RenderErrorPolicy::Isolate`] it is replaced by an error marker.
pub fn build_fragment<'a>(
    arena: &'a Arena<AstNode<'a>>,
    segments: SegmentSequence,
    renderer: &dyn MathRendererAdapter,
    policy: RenderErrorPolicy,
) -> Result<Fragment<'a>, Error> {
    let mut fragment = Fragment::new();

    for segment in segments {
        match segment {
            Segment::Text(text) => {
                if !text.is_empty() {
                    fragment.push(nodes::new_text(arena, text));
                }
            }
            Segment::Math { data, display } => {
                let options = MathRenderOptions { display };
                match renderer.render(arena, &data, &options) {
                    Ok(node) => fragment.push(node),
                    Err(err) => match policy {
                        RenderErrorPolicy::Abort => return Err(err.into()),
                        RenderErrorPolicy::Isolate => {
                            log::warn!("math rendering failed for {:?}: {}", data, err);
                            fragment.push(error_marker(arena, &data, &err));
                        }
                    },
                }
            }
        }
    }

    Ok(fragment)
}

fn error_marker<'a>(
    arena: &'a Arena<AstNode<'a>>,
    math: &str,
    err: &RenderError,
) -> &'a AstNode<'a> {
    let marker = nodes::new_element(
        arena,
        NodeElement::new("span")
            .with_attr("class", "math-error")
            .with_attr("title", err.message.clone()),
    );
    marker.append(nodes::new_text(arena, math));
    marker
}
