//! Errors raised while building or interpreting an L-System.

use thiserror::Error;

/// Failures of grammar construction and turtle interpretation.
///
/// Every operation in this crate is deterministic, so an error is always a
/// direct consequence of the input and is never worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LindenmayerError {
    /// The grammar configuration is malformed (e.g. no start symbol).
    #[error("invalid grammar configuration: {0}")]
    InvalidConfig(String),

    /// A `]` was found while the state stack was empty.
    #[error("unbalanced stack: pop at symbol offset {index} with no saved state")]
    UnbalancedStack { index: usize },
}

pub type Result<T> = std::result::Result<T, LindenmayerError>;
