//! A library for finding TeX math in HTML text and swapping it for rendered
//! output, leaving the surrounding markup alone.
//!
//! Text is split at configured delimiter pairs (`$$…$$`, `\[…\]` and `\(…\)`
//! by default).  Closing delimiters inside brace groups or after a backslash
//! don't count, so `\(\text{)}\)` stays whole.  Each span is handed to a
//! [`MathRendererAdapter`], and the node it returns replaces the span in
//! the tree.  Elements such as `script` and `pre` are never entered.
//!
//! ```
//! use autotex::render_html;
//!
//! assert_eq!(
//!     render_html("<p>\\(e^{i\\pi} = -1\\)</p>", None).unwrap(),
//!     "<p><span class=\"math math-inline\" data-math-style=\"inline\">e^{i\\pi} = -1</span></p>"
//! );
//! ```
//!
//! Working on a tree directly, with a single `$` as the only delimiter:
//!
//! ```
//! use autotex::{format_html, parse_fragment, process_math_in_element, Arena, Delimiter, OptionsOverride};
//!
//! let arena = Arena::new();
//! let root = parse_fragment(&arena, "<p>Let $x$ be odd.</p><code>$y$</code>");
//!
//! let options = OptionsOverride {
//!     delimiters: Some(vec![Delimiter::new("$", "$", false).unwrap()]),
//!     ..OptionsOverride::default()
//! };
//! process_math_in_element(&arena, Some(root), Some(options)).unwrap();
//!
//! let mut html = String::new();
//! format_html(root, &mut html).unwrap();
//! assert_eq!(
//!     html,
//!     "<p>Let <span class=\"math math-inline\" data-math-style=\"inline\">x</span> be odd.</p>\
//!      <code>$y$</code>"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(
    future_incompatible,
    nonstandard_style,
    unused_extern_crates,
    unused_import_braces
)]

pub mod adapters;
pub mod arena_tree;
mod entity;
mod error;
pub mod html;
pub mod nodes;
mod options;
pub mod plugins;
pub mod render;
pub mod scanners;
pub mod segment;
#[cfg(test)]
mod tests;
mod walker;

pub use crate::adapters::{MathRenderOptions, MathRendererAdapter};
pub use crate::error::{Error, RenderError};
pub use crate::html::{format_html, parse_fragment};
pub use crate::nodes::{AstNode, NodeValue};
pub use crate::options::{
    default_delimiters, default_ignored_tags, Delimiter, Options, OptionsOverride, Plugins,
    RenderErrorPolicy, RenderPlugins, DEFAULT_IGNORED_TAGS,
};
pub use crate::render::{build_fragment, Fragment};
pub use crate::scanners::find_end_of_math;
pub use crate::segment::{split_at_delimiters, split_with_delimiters, Segment, SegmentSequence};
pub use crate::walker::{process_math_in_element, process_math_in_element_with_plugins, walk};
pub use typed_arena::Arena;

/// Parse `html`, render the math in it with the default renderer, and write
/// the result back out as HTML.
pub fn render_html(html: &str, options: Option<OptionsOverride>) -> Result<String, Error> {
    render_html_with_plugins(html, options, &Plugins::default())
}

/// As [`render_html`], rendering with the plugins given.
pub fn render_html_with_plugins(
    html: &str,
    options: Option<OptionsOverride>,
    plugins: &Plugins<'_>,
) -> Result<String, Error> {
    let arena = Arena::new();
    let root = parse_fragment(&arena, html);
    process_math_in_element_with_plugins(&arena, Some(root), options, plugins)?;

    let mut out = String::with_capacity(html.len());
    format_html(root, &mut out).unwrap_or_else(|_| unreachable!("writing to a String"));
    Ok(out)
}
