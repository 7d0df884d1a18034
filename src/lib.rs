//! # numex
//!
//! numex is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions over `+`, `-`,
//! `*`, `/`, and parentheses, returning either the formatted numeric result
//! or a descriptive error string.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    engine::{format::format_value, lexer::tokenize, parser::parse_expression},
    error::ParseError,
};

/// Orchestrates the stages of expression evaluation.
///
/// This module ties together the lexer, the recursive-descent parser, and
/// the result formatter. The three stages form a pipeline in which each
/// depends only on the one before it.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and formatter.
/// - Exposes each stage for standalone use.
/// - Manages the flow of data and errors between phases.
pub mod engine;
/// Provides unified error types for tokenization and parsing.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. It standardizes error reporting and carries detailed
/// information about failures for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser).
/// - Attaches human-readable messages to every error kind.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Evaluates an arithmetic expression and returns its display string.
///
/// This function runs the full pipeline on the provided text: tokenize,
/// parse, verify that every token was consumed, and format the numeric
/// result. Any failure at any stage is converted into the string
/// `"Invalid Expression: <message>"`. It never panics and it always
/// returns a string.
///
/// Each call is independent; no state is shared between invocations.
///
/// # Examples
/// ```
/// use numex::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("3 + 4 * 2"), "11");
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate("(3 + 4) * 2"), "14");
///
/// // Failures come back as a string, never as a panic.
/// assert_eq!(evaluate("5 / 0"), "Invalid Expression: Division by zero");
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> String {
    let tokens = match tokenize(expression) {
        Ok(tokens) => tokens,
        Err(e) => return format!("Invalid Expression: {e}"),
    };

    let mut iter = tokens.iter().peekable();

    match parse_expression(&mut iter, 0) {
        Ok(value) => {
            if iter.next().is_some() {
                return format!("Invalid Expression: {}", ParseError::TrailingInput);
            }
            format_value(value)
        },
        Err(e) => format!("Invalid Expression: {e}"),
    }
}
