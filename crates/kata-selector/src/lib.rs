//! CSS selector string builder.
//!
//! Builds selectors such as `div#main + table#data` from typed parts,
//! rejecting part sequences that [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//! does not allow inside a compound selector. The builder only renders
//! text; it neither parses nor matches selectors.
//!
//! # Example
//!
//! ```
//! use kata_selector::{Combinator, combine, new_selector_builder};
//!
//! let mut left = new_selector_builder();
//! let _ = left.element("div")?.id("main")?;
//! let mut right = new_selector_builder();
//! let _ = right.element("table")?.id("data")?;
//!
//! assert_eq!(combine(left, Combinator::NextSibling, right).stringify(), "div#main + table#data");
//! # Ok::<(), kata_selector::SelectorError>(())
//! ```

mod builder;
mod error;
mod fragment;

pub use builder::{SelectorBuilder, combine, new_selector_builder};
pub use error::SelectorError;
pub use fragment::{Combinator, Fragment, FragmentKind};
