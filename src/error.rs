//! Error types shared by the cipher core and the CLI front end.

use thiserror::Error;

/// Everything that can go wrong before the transform runs. The engine itself
/// has no failure mode once its inputs are validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The message contains a byte outside the cipher alphabet.
    #[error("Invalid <MESSAGE>")]
    InvalidMessage,

    /// The key contains a character outside the cipher alphabet.
    #[error("Invalid <KEY>: '{0}'")]
    InvalidKey(String),

    /// The mode argument is neither "E" nor "D".
    #[error("Unknown <MODE>: '{0}'")]
    UnknownMode(String),

    /// Cyclic expansion of an empty key is undefined.
    #[error("<KEY> must not be empty")]
    EmptyKey,
}
