#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during parsing and evaluation.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input where a value was required.
    UnexpectedEnd,
    /// An opening parenthesis has no matching `)`.
    MissingClosingParen,
    /// A division's right operand evaluated to exactly zero.
    DivisionByZero,
    /// Found extra tokens after a syntactically complete expression.
    TrailingInput,
    /// Parenthesis nesting exceeded the parser's depth ceiling.
    TooDeep,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: '{token}'"),

            Self::UnexpectedEnd => write!(f, "Unexpected end of input"),

            Self::MissingClosingParen => write!(f, "Missing closing bracket"),

            Self::DivisionByZero => write!(f, "Division by zero"),

            Self::TrailingInput => write!(f, "Unexpected input"),

            Self::TooDeep => write!(f, "Expression is nested too deeply"),
        }
    }
}

impl std::error::Error for ParseError {}
