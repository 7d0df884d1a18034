/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a sequence of
/// tokens, each corresponding to a meaningful element of the grammar:
/// numeric literals, the four arithmetic operators, and grouping marks. This
/// is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Parses numeric literals to their `f64` value at tokenization time.
/// - Reports a lexical error for any unrecognized character.
pub mod lexer;

/// The parser module evaluates the token stream by recursive descent.
///
/// The parser consumes tokens produced by the lexer through three mutually
/// recursive functions, one per precedence level, computing the numeric
/// result directly as it descends. No syntax tree is built.
///
/// # Responsibilities
/// - Enforces the precedence-layered grammar (expression, term, factor).
/// - Applies both operator groups with left-to-right associativity.
/// - Reports grammar violations, zero divisors, and excessive nesting.
pub mod parser;

/// The format module renders numeric results for display.
///
/// Converts the `f64` produced by the parser into the canonical display
/// string: integral values as plain integers, everything else rounded to
/// two decimal places.
pub mod format;
