//! Turn `kind:text` command-line parts into a selector.

use kata_selector::{SelectorBuilder, SelectorError, combine};
use thiserror::Error;

/// Why a list of parts did not produce a selector.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum PartsError {
    /// A part had no `kind:` prefix or an unknown kind.
    #[error("unrecognised part '{0}'")]
    Unknown(String),
    /// The builder rejected a part.
    #[error("'{part}': {source}")]
    Rejected {
        /// The offending part as typed.
        part: String,
        /// What the builder reported.
        source: SelectorError,
    },
}

/// Apply `parts` in order. `combine:TOKEN` closes the selector so far and
/// starts a fresh right-hand builder; the two are joined once the next
/// combine or the end of the list is reached.
pub fn build(parts: &[String]) -> Result<SelectorBuilder, PartsError> {
    let mut done: Option<(SelectorBuilder, String)> = None;
    let mut current = SelectorBuilder::new();

    for part in parts {
        let (kind, text) = part
            .split_once(':')
            .ok_or_else(|| PartsError::Unknown(part.clone()))?;

        let appended = match kind {
            "element" => current.element(text),
            "id" => current.id(text),
            "class" => current.class(text),
            "attr" | "attribute" => current.attribute(text),
            "pseudo-class" => current.pseudo_class(text),
            "pseudo-element" => current.pseudo_element(text),
            "combine" => {
                let left = join(done.take(), std::mem::take(&mut current));
                done = Some((left, text.to_owned()));
                continue;
            }
            _ => return Err(PartsError::Unknown(part.clone())),
        };
        if let Err(source) = appended {
            return Err(PartsError::Rejected {
                part: part.clone(),
                source,
            });
        }
    }

    Ok(join(done, current))
}

fn join(left: Option<(SelectorBuilder, String)>, right: SelectorBuilder) -> SelectorBuilder {
    match left {
        Some((left, token)) => combine(left, token, right),
        None => right,
    }
}
