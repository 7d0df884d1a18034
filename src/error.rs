/// Tokenization errors.
///
/// Defines the error type raised while breaking the input text into tokens.
/// Tokenization fails only for characters outside the accepted lexical set.
pub mod tokenize_error;

/// Parsing errors.
///
/// Defines all error types that can occur while the recursive descent
/// consumes the token sequence: grammar violations, zero divisors, trailing
/// tokens, and excessive nesting.
pub mod parse_error;

pub use parse_error::ParseError;
pub use tokenize_error::TokenizeError;
