use std::iter::Peekable;

use crate::{engine::lexer::Token, error::ParseError};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested parenthesis levels accepted by the parser.
///
/// The grammar itself bounds recursion by input length, but adversarial
/// inputs like a long run of `(` would otherwise translate directly into
/// call-stack depth. Inputs nesting deeper than this fail with
/// [`ParseError::TooDeep`].
pub const MAX_DEPTH: usize = 64;

/// Parses a full expression and computes its value.
///
/// This is the entry point for expression parsing. It handles the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy. Both operators fold
/// left-associatively into an accumulating result, so `10 - 2 - 3`
/// computes `(10 - 2) - 3`.
///
/// Grammar: `expression := term {("+" | "-") term}`
///
/// # Parameters
/// - `tokens`: Token iterator shared by the whole descent.
/// - `depth`: Current parenthesis nesting level.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// Returns `ParseError::TooDeep` past [`MAX_DEPTH`] nesting levels, and
/// propagates any error from the lower precedence levels.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<f64>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }

    let mut result = parse_term(tokens, depth)?;
    loop {
        match tokens.peek() {
            Some(Token::Plus) => {
                tokens.next();
                result += parse_term(tokens, depth)?;
            },
            Some(Token::Minus) => {
                tokens.next();
                result -= parse_term(tokens, depth)?;
            },
            _ => break,
        }
    }

    Ok(result)
}

/// Parses multiplication-level expressions.
///
/// Identical in structure to [`parse_expression`] one precedence level
/// higher, applying `*` and `/` left-to-right. A division whose right
/// operand is exactly `0.0` is rejected before the division is performed,
/// never detected after the fact through an infinity result.
///
/// Grammar: `term := factor {("*" | "/") factor}`
///
/// # Parameters
/// - `tokens`: Token iterator shared by the whole descent.
/// - `depth`: Current parenthesis nesting level.
///
/// # Returns
/// The numeric value of the term.
///
/// # Errors
/// Returns `ParseError::DivisionByZero` for a zero divisor, and propagates
/// any error from factor parsing.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<f64>
    where I: Iterator<Item = &'a Token>
{
    let mut result = parse_factor(tokens, depth)?;
    loop {
        match tokens.peek() {
            Some(Token::Star) => {
                tokens.next();
                result *= parse_factor(tokens, depth)?;
            },
            Some(Token::Slash) => {
                tokens.next();
                let divisor = parse_factor(tokens, depth)?;
                if divisor == 0.0 {
                    return Err(ParseError::DivisionByZero);
                }
                result /= divisor;
            },
            _ => break,
        }
    }

    Ok(result)
}

/// Parses a single factor: a numeric literal or a parenthesized expression.
///
/// Consumes exactly one token to decide. An opening `(` recurses into
/// [`parse_expression`] one nesting level deeper and then requires the
/// matching `)`, which is consumed as well.
///
/// The grammar has no unary minus: a `-` where a value is expected is an
/// unexpected token, so `-3` and `3 + -2` are invalid.
///
/// Grammar: `factor := number | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator shared by the whole descent.
/// - `depth`: Current parenthesis nesting level.
///
/// # Returns
/// The numeric value of the factor.
///
/// # Errors
/// - `ParseError::UnexpectedEnd` if the input ends where a value was
///   required.
/// - `ParseError::MissingClosingParen` if an opening parenthesis has no
///   matching `)`, including at end-of-input.
/// - `ParseError::UnexpectedToken` for any other token, such as a stray
///   operator or a stray `)`.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<f64>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(*value),

        Some(Token::LParen) => {
            let result = parse_expression(tokens, depth + 1)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(result),
                _ => Err(ParseError::MissingClosingParen),
            }
        },

        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string(), }),

        None => Err(ParseError::UnexpectedEnd),
    }
}
