//! The selector builder.

use std::fmt;

use crate::{Fragment, FragmentKind, SelectorError};

/// Builds a selector string one simple selector at a time.
///
/// Each append checks the new fragment against what is already there:
/// element, id and pseudo-element may each appear once, and kinds may only
/// move forward through [`FragmentKind`] order. A rejected append leaves
/// the builder untouched.
///
/// ```
/// use kata_selector::SelectorBuilder;
///
/// let mut builder = SelectorBuilder::new();
/// let text = builder.element("a")?.attribute("href$=\".png\"")?.pseudo_class("focus")?.stringify();
/// assert_eq!(text, "a[href$=\".png\"]:focus");
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
}

/// A new, empty builder.
#[must_use]
pub const fn new_selector_builder() -> SelectorBuilder {
    SelectorBuilder::new()
}

/// Join two builders as `left token right`.
///
/// `left` absorbs the combination. The fragments of `right` were checked
/// when `right` was built and are not checked again.
#[must_use]
pub fn combine(
    mut left: SelectorBuilder,
    token: impl AsRef<str>,
    right: SelectorBuilder,
) -> SelectorBuilder {
    left.push_combination(token.as_ref(), right.fragments);
    left
}

impl SelectorBuilder {
    /// A new, empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Append a type selector, rendered as `name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an element is already present,
    /// [`SelectorError::OutOfOrder`] if a later kind is already last.
    pub fn element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Element, name.into())
    }

    /// Append an ID selector, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an id is already present,
    /// [`SelectorError::OutOfOrder`] if a later kind is already last.
    pub fn id(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Id, name.into())
    }

    /// Append a class selector, rendered as `.name`. Classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a later kind is already last.
    pub fn class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Class, name.into())
    }

    /// Append an attribute selector, rendered as `[expr]`. The expression
    /// is taken verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a later kind is already last.
    pub fn attribute(&mut self, expr: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Attribute, expr.into())
    }

    /// Append a pseudo-class, rendered as `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a later kind is already last.
    pub fn pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name.into())
    }

    /// Append a pseudo-element, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element is already
    /// present, [`SelectorError::OutOfOrder`] if a later kind is already
    /// last.
    pub fn pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name.into())
    }

    /// Append ` token ` followed by every fragment of `right`.
    ///
    /// Accepts a [`Combinator`](crate::Combinator) or any literal token.
    pub fn combine(&mut self, token: impl AsRef<str>, right: &Self) -> &mut Self {
        self.push_combination(token.as_ref(), right.fragments.iter().cloned());
        self
    }

    /// Render every fragment in order, with no separators of its own.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// The fragments in render order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments, combinators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn append(&mut self, kind: FragmentKind, text: String) -> Result<&mut Self, SelectorError> {
        self.check(kind)?;
        let fragment = Fragment::new(kind, text);
        #[cfg(feature = "builder-trace")]
        eprintln!("[selector] +{kind} {fragment}");
        self.fragments.push(fragment);
        Ok(self)
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.fragments.iter().any(|f| f.kind() == kind) {
            return Err(SelectorError::DuplicatePart { kind });
        }
        // Equal kinds may follow each other; only moving backwards fails.
        if let Some(last) = self.fragments.last().filter(|last| last.kind() > kind) {
            return Err(SelectorError::OutOfOrder {
                kind,
                after: last.kind(),
            });
        }
        Ok(())
    }

    fn push_combination(&mut self, token: &str, right: impl IntoIterator<Item = Fragment>) {
        #[cfg(feature = "builder-trace")]
        eprintln!("[selector] +combinator '{token}'");
        self.fragments.push(Fragment::new(FragmentKind::Combinator, token));
        self.fragments.extend(right);
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments
            .iter()
            .try_for_each(|fragment| write!(f, "{fragment}"))
    }
}
