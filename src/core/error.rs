//! Typed errors raised by the document model and the merge engine.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Malformed document content.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] toml::de::Error),

    #[error("expected a string for `{key}`, found {found}")]
    NotAString { key: String, found: &'static str },

    #[error("expected `{key}` to be a table, found {found}")]
    NotATable { key: String, found: &'static str },

    #[error("expected `info.merged` to be a boolean, found {found}")]
    NotABool { found: &'static str },
}

/// Failure to load or persist a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed TOML in `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to serialize document")]
    Serialize(#[from] toml::ser::Error),
}

/// Two variants disagree on key identity at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("variants are out of order in {section} at position {position}: `{left}` != `{right}`")]
pub struct OrderingError {
    pub section: &'static str,
    pub position: usize,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Ordering(#[from] OrderingError),
}
