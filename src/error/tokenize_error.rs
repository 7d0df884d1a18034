#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum TokenizeError {
    /// The input contains a character outside the accepted lexical set.
    InvalidCharacter {
        /// The offending slice of the input.
        slice: String,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { .. } => write!(f, "Invalid characters found"),
        }
    }
}

impl std::error::Error for TokenizeError {}
