//! Configuration for math detection and rendering.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathRendererAdapter;
use crate::error::Error;

/// Tags whose content is never treated as prose.
pub const DEFAULT_IGNORED_TAGS: &[&str] = &["script", "noscript", "style", "textarea", "pre", "code"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A pair of literal strings marking a math span.
pub struct Delimiter {
    /// Opens a span.  Found by plain substring search.
    pub left: String,

    /// Closes a span.  Only matched outside brace groups and escapes.
    pub right: String,

    /// Whether spans from this pair are typeset in display mode.
    pub display: bool,
}

impl Delimiter {
    /// A delimiter pair.  Neither side may be empty.
    ///
    /// ```rust
    /// # use autotex::Delimiter;
    /// assert!(Delimiter::new("$", "$", false).is_ok());
    /// assert!(Delimiter::new("", "$", false).is_err());
    /// ```
    pub fn new<L: Into<String>, R: Into<String>>(
        left: L,
        right: R,
        display: bool,
    ) -> Result<Self, Error> {
        let delimiter = Delimiter {
            left: left.into(),
            right: right.into(),
            display,
        };
        delimiter.validate()?;
        Ok(delimiter)
    }

    fn literal(left: &str, right: &str, display: bool) -> Self {
        Delimiter {
            left: left.to_string(),
            right: right.to_string(),
            display,
        }
    }

    /// Check that neither side is empty.
    pub fn validate(&self) -> Result<(), Error> {
        check_pair(&self.left, &self.right)
    }
}

pub(crate) fn check_pair(left: &str, right: &str) -> Result<(), Error> {
    if left.is_empty() || right.is_empty() {
        return Err(Error::Validation(format!(
            "delimiters must not be empty: {:?}..{:?}",
            left, right
        )));
    }
    Ok(())
}

/// The delimiter pairs used when none are configured, in precedence order.
///
/// A single `$` is left out on purpose: it ruins ordinary prose that
/// mentions money.
pub fn default_delimiters() -> Vec<Delimiter> {
    vec![
        Delimiter::literal("$$", "$$", true),
        Delimiter::literal("\\[", "\\]", true),
        Delimiter::literal("\\(", "\\)", false),
    ]
}

/// [`DEFAULT_IGNORED_TAGS`], owned.
pub fn default_ignored_tags() -> Vec<String> {
    DEFAULT_IGNORED_TAGS.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What to do when the render backend rejects a span.
pub enum RenderErrorPolicy {
    /// Stop the walk and return the error.  Replacements already made stay
    /// in the tree; text after the failing node is left as it was.
    #[default]
    Abort,

    /// Put an error marker in place of the failing span and carry on.
    ///
    /// The marker is `<span class="math-error" title="MESSAGE">SOURCE</span>`,
    /// where `SOURCE` is the raw math between the delimiters.
    Isolate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella options struct.
///
/// ```rust
/// # use autotex::{Options, RenderErrorPolicy};
/// let options = Options::default();
/// assert_eq!(options.delimiters[0].left, "$$");
/// assert!(options.ignored_tags.iter().any(|t| t == "pre"));
/// assert_eq!(options.error_policy, RenderErrorPolicy::Abort);
/// ```
pub struct Options {
    /// Delimiter pairs in precedence order.  Each pair is fully applied before
    /// the next one runs.
    #[cfg_attr(feature = "bon", builder(default = default_delimiters()))]
    pub delimiters: Vec<Delimiter>,

    /// Elements whose subtrees are never scanned.  Matched against tag names
    /// without regard to case.
    #[cfg_attr(feature = "bon", builder(default = default_ignored_tags()))]
    pub ignored_tags: Vec<String>,

    /// How render backend failures are handled.
    #[cfg_attr(feature = "bon", builder(default))]
    pub error_policy: RenderErrorPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            delimiters: default_delimiters(),
            ignored_tags: default_ignored_tags(),
            error_policy: RenderErrorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Caller-supplied settings laid over [`Options::default`].
///
/// Every field that is `Some` replaces the default outright; lists are not
/// concatenated.
pub struct OptionsOverride {
    /// Replaces [`Options::delimiters`].
    pub delimiters: Option<Vec<Delimiter>>,

    /// Replaces [`Options::ignored_tags`].
    pub ignored_tags: Option<Vec<String>>,

    /// Replaces [`Options::error_policy`].
    pub error_policy: Option<RenderErrorPolicy>,
}

impl Options {
    /// Lay `overrides` over these options, key by key.
    ///
    /// ```rust
    /// # use autotex::{Delimiter, Options, OptionsOverride};
    /// let dollars = vec![Delimiter::new("$", "$", false).unwrap()];
    /// let options = Options::default().merge(OptionsOverride {
    ///     delimiters: Some(dollars.clone()),
    ///     ..OptionsOverride::default()
    /// });
    /// assert_eq!(options.delimiters, dollars);
    /// assert_eq!(options.ignored_tags, Options::default().ignored_tags);
    /// ```
    pub fn merge(self, overrides: OptionsOverride) -> Options {
        Options {
            delimiters: overrides.delimiters.unwrap_or(self.delimiters),
            ignored_tags: overrides.ignored_tags.unwrap_or(self.ignored_tags),
            error_policy: overrides.error_policy.unwrap_or(self.error_policy),
        }
    }

    /// Check every delimiter pair.
    pub fn validate(&self) -> Result<(), Error> {
        self.delimiters.iter().try_for_each(Delimiter::validate)
    }
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Typesets math spans.  When unset, [`HtmlMathRenderer`] is used.
    ///
    /// [`HtmlMathRenderer`]: crate::plugins::html_math::HtmlMathRenderer
    pub math_renderer: Option<&'p dyn MathRendererAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field("math_renderer", &"impl MathRendererAdapter")
            .finish()
    }
}
