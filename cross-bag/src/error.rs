use cross_core::ArgumentError;
use miette::Diagnostic;
use thiserror::Error;

use crate::reflect::ReadError;

/// Result type for property bag operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    #[diagnostic(code(cross::read_property))]
    Read(#[from] ReadError),

    #[error("property '{key}' is already defined by the source object")]
    #[diagnostic(
        code(cross::duplicate_key),
        help("rename the additional property, or merge with MergePolicy::Overwrite to replace it")
    )]
    DuplicateKey { key: String },

    #[error("cannot build a property bag from {found}")]
    #[diagnostic(
        code(cross::not_an_object),
        help("only values that serialize as a struct or map have named properties")
    )]
    NotAnObject { found: &'static str },

    #[error("failed to serialize the source object")]
    #[diagnostic(code(cross::serialize))]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// Name of the offending parameter, for argument errors.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument(err) => err.param_name(),
            _ => None,
        }
    }
}
