use thiserror::Error;

/// Errors reported by the fallible parts of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A compared value was absent. Absent inputs are a precondition
    /// violation, not an empty string.
    #[error("compared value is absent")]
    AbsentInput,

    /// The given URI does not use the `file` scheme or carries no path.
    #[error("not a file URI: {0}")]
    InvalidUri(String),

    /// The given string is not valid hexadecimal.
    #[error("malformed hex string")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
