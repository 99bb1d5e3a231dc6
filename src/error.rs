//! Errors raised while reading entry markup.

use thiserror::Error;

/// A required piece of an entry file is missing or the file is not XML.
///
/// Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("<{element}> is missing required child <{child}>")]
    MissingChild {
        element: String,
        child: &'static str,
    },

    #[error("malformed XML")]
    Xml(#[from] roxmltree::Error),
}
