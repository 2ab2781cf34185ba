//! Error types for htmlnode

use thiserror::Error;

/// Errors raised while constructing nodes.
///
/// Rendering itself never fails; the only failure is malformed construction.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An attribute was given more than one value.
    #[error("attribute \"{name}\" takes at most one value, got {count}")]
    InvalidArity { name: String, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
