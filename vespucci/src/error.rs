//! Error types used by the crate.

use thiserror::Error;

/// Vespucci error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtensionError {
    /// A required construction option was not supplied.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
}
