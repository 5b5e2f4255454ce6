//! Errors reported by the sponge API.
use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The context or the input can not be used, e.g. absorbing into an
    /// already finalized context or selecting an unknown variant.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The destination buffer does not have an acceptable length.
    #[error("invalid output buffer: expected {expected} bytes, got {actual}")]
    InvalidOutput { expected: usize, actual: usize },
    /// A step of a composed operation reported a failure.
    #[error("hash computation failed: {0}")]
    GenericFailure(String),
}

impl Error {
    pub(crate) fn already_finalized() -> Self {
        Self::InvalidInput("context has already been finalized".to_owned())
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
