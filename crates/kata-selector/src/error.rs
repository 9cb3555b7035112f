//! Errors raised by [`SelectorBuilder`](crate::SelectorBuilder) appends.

use thiserror::Error;

use crate::FragmentKind;

/// An append was rejected. The builder is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// [§ 3.1](https://www.w3.org/TR/selectors-4/#structure)
    /// A compound selector holds at most one type selector, one ID and one
    /// pseudo-element.
    #[error("{kind} may occur only once in a selector")]
    DuplicatePart {
        /// The kind that was repeated.
        kind: FragmentKind,
    },

    /// Simple selectors must appear in the order element, id, class,
    /// attribute, pseudo-class, pseudo-element.
    #[error(
        "{kind} cannot follow {after}: selector parts go element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind that was being appended.
        kind: FragmentKind,
        /// The kind of the fragment already at the end of the sequence.
        after: FragmentKind,
    },
}
