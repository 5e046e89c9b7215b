//! Splitting text into literal runs and delimited math spans.

use crate::error::Error;
use crate::options::{self, Delimiter};
use crate::scanners;
use jetscii::Substring;

/// One unit of a text node's content stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.  No delimiter has been consumed from it.
    Text(String),

    /// The source strictly between an opening and a closing delimiter.
    Math {
        /// Raw math source, delimiters excluded.
        data: String,
        /// Whether the delimiter pair that produced this span is display-mode.
        display: bool,
    },
}

impl Segment {
    /// The segment's literal, whichever kind it is.
    pub fn data(&self) -> &str {
        match *self {
            Segment::Text(ref data) | Segment::Math { ref data, .. } => data,
        }
    }

    /// Whether this is a math span.
    pub fn is_math(&self) -> bool {
        matches!(*self, Segment::Math { .. })
    }
}

/// Segments in reading order.
pub type SegmentSequence = Vec<Segment>;

/// Split every `Text` segment of `segments` at `left`/`right` pairs.
///
/// Math segments pass through untouched, so spans claimed by an earlier call
/// are never rescanned.  The opening delimiter is found by plain substring
/// search; only the closing side honours brace depth and backslash escapes
/// (see [`scanners::find_end_of_math`]).  An opening delimiter with no close
/// is left in place: the rest of the text, `left` included, comes out as a
/// trailing `Text` segment.
///
/// The text before each span and after the last one is always emitted, even
/// when empty, so `"(x)"` splits into `Text("")`, `Math("x")`, `Text("")`.
///
/// Fails with [`Error::Validation`] if `left` or `right` is empty.
pub fn split_at_delimiters(
    segments: SegmentSequence,
    left: &str,
    right: &str,
    display: bool,
) -> Result<SegmentSequence, Error> {
    options::check_pair(left, right)?;
    let finder = Substring::new(left);
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Text(text) => split_text(&text, &finder, left.len(), right, display, &mut out),
            math => out.push(math),
        }
    }

    Ok(out)
}

fn split_text(
    text: &str,
    finder: &Substring,
    left_len: usize,
    right: &str,
    display: bool,
    out: &mut SegmentSequence,
) {
    let mut curr = 0;

    while let Some(offset) = finder.find(&text[curr..]) {
        let start = curr + offset;
        out.push(Segment::Text(text[curr..start].to_string()));

        let body = start + left_len;
        match scanners::find_end_of_math(right, &text[body..]) {
            Some(len) => {
                out.push(Segment::Math {
                    data: text[body..body + len].to_string(),
                    display,
                });
                curr = body + len + right.len();
            }
            None => {
                curr = start;
                break;
            }
        }
    }

    out.push(Segment::Text(text[curr..].to_string()));
}

/// Run [`split_at_delimiters`] once per delimiter pair, in order.
///
/// Earlier pairs take precedence: whatever they claim is frozen as math
/// before later pairs see the text.
pub fn split_with_delimiters(
    text: &str,
    delimiters: &[Delimiter],
) -> Result<SegmentSequence, Error> {
    let mut segments = vec![Segment::Text(text.to_string())];

    for delimiter in delimiters {
        segments = split_at_delimiters(
            segments,
            &delimiter.left,
            &delimiter.right,
            delimiter.display,
        )?;
        log::trace!(
            "split at {:?}..{:?}: {} segments",
            delimiter.left,
            delimiter.right,
            segments.len()
        );
    }

    Ok(segments)
}
