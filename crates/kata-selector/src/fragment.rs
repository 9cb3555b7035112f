//! Selector fragments and their kinds.

use std::fmt;

use strum_macros::{Display, EnumIter};

/// What a fragment renders as.
///
/// Declaration order is the order simple selectors must appear in within a
/// compound selector. [`Combinator`](FragmentKind::Combinator) sorts last
/// and only ever appears where two builders were joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    Combinator,
}

impl FragmentKind {
    /// Kinds that may occur at most once in a builder.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// One piece of a selector: its raw text and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    kind: FragmentKind,
}

impl Fragment {
    /// A fragment of `kind` holding `text` without its prefix (`main`, not
    /// `#main`).
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// The raw text, without prefix or padding.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The fragment's kind.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = &self.text;
        match self.kind {
            FragmentKind::Element => f.write_str(text),
            FragmentKind::Id => write!(f, "#{text}"),
            FragmentKind::Class => write!(f, ".{text}"),
            FragmentKind::Attribute => write!(f, "[{text}]"),
            FragmentKind::PseudoClass => write!(f, ":{text}"),
            FragmentKind::PseudoElement => write!(f, "::{text}"),
            FragmentKind::Combinator => write!(f, " {text} "),
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The combinators written as a token between two compound selectors. The
/// descendant combinator is bare whitespace and has no token, so it is not
/// listed; pass any other literal token to
/// [`SelectorBuilder::combine`](crate::SelectorBuilder::combine) directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,
    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,
    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
    /// [§ 16.5](https://www.w3.org/TR/selectors-4/#the-column-combinator) `A || B`
    Column,
}

impl Combinator {
    /// The token written between the two sides.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}
