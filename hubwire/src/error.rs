//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Codec error: {0}")]
    Core(#[from] hubwire_core::Error),

    #[error("Unsupported message: {0:?}")]
    UnsupportedMessage(String),
}

impl Error {
    /// Check if the input text itself was bad
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Self::Core(error) => error.is_malformed_input(),
            Self::UnsupportedMessage(_) => true,
        }
    }
}
