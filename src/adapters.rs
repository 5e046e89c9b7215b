//! Adapter traits for plugins.
//!
//! A math typesetter plugs into the tree walker by implementing
//! [`MathRendererAdapter`] and being handed over through
//! [`Plugins`](crate::Plugins).

use crate::error::RenderError;
use crate::nodes::AstNode;
use typed_arena::Arena;

/// The struct passed to the `MathRendererAdapter`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MathRenderOptions {
    /// Typeset as a standalone block rather than inline with the text.
    pub display: bool,
}

/// Implement this adapter for creating a plugin that typesets math.
pub trait MathRendererAdapter {
    /// Render one math span.
    ///
    /// `math`: the raw source between the delimiters, delimiters excluded.
    ///
    /// Returns exactly one node allocated in `arena`, unattached; it may carry
    /// children of its own.  The node is spliced into the tree as is and is
    /// never scanned for delimiters again.
    fn render<'a>(
        &self,
        arena: &'a Arena<AstNode<'a>>,
        math: &str,
        options: &MathRenderOptions,
    ) -> Result<&'a AstNode<'a>, RenderError>;
}
