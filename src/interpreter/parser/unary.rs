use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression, parse_if_expression},
            utils::{expect, next_if_kind, parse_comma_separated, unexpected},
        },
        stack::ensure_sufficient_stack,
        value::core::Value,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `not` / `!`  (logical not)
/// - `++` / `--`  (pre-increment, pre-decrement)
///
/// Unary operators are right-associative, so an input like `not -x` is parsed
/// as `not (-x)`. Increment and decrement need a variable operand.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "not" | "!" | "++" | "--") unary
///            | postfix
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a postfix-level expression.
///
/// # Errors
/// Returns `InvalidIncrementTarget` if `++` or `--` is applied to anything
/// other than a variable name.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| parse_unary_inner(tokens))
}

fn parse_unary_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return parse_postfix(tokens);
    };

    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        TokenKind::PlusPlus => UnaryOperator::PreIncrement,
        TokenKind::MinusMinus => UnaryOperator::PreDecrement,
        _ => return parse_postfix(tokens),
    };
    tokens.next();

    let operand = parse_unary(tokens)?;
    if op.is_mutating() && !matches!(operand, Expr::Identifier { .. }) {
        return Err(ParseError::InvalidIncrementTarget { line:   token.line,
                                                        column: token.column, });
    }

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       line: token.line })
}

/// Parses an optional postfix increment or decrement.
///
/// Grammar: `postfix := power ("++" | "--")?`
///
/// # Errors
/// Returns `InvalidIncrementTarget` if the operand is not a variable name.
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_power(tokens)?;

    let op = match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::PlusPlus) => UnaryOperator::PostIncrement,
        Some(TokenKind::MinusMinus) => UnaryOperator::PostDecrement,
        _ => return Ok(expr),
    };

    let Some(token) = tokens.next() else {
        return Ok(expr);
    };
    if !matches!(expr, Expr::Identifier { .. }) {
        return Err(ParseError::InvalidIncrementTarget { line:   token.line,
                                                        column: token.column, });
    }

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(expr),
                       line: token.line })
}

/// Parses function calls.
///
/// Any primary expression may be followed by one or more argument lists;
/// whether the callee is actually callable is decided at run time.
///
/// Grammar: `call := primary ("(" (expression ("," expression)*)? ")")*`
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_primary(tokens)?;

    while let Some(token) = next_if_kind(tokens, TokenKind::LParen) {
        let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
        expr = Expr::FunctionCall { callee: Box::new(expr),
                                    arguments,
                                    line: token.line };
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string and boolean literals
/// - identifiers
/// - parenthesized expressions
/// - `if` expressions
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression.
///
/// # Errors
/// Returns `InvalidNumber` for malformed numeric literals and
/// `UnexpectedToken` / `UnexpectedEndOfInput` when no expression can start at
/// the current token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0, column: 0 });
    };
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            let number = token.text
                              .parse::<f64>()
                              .map_err(|_| ParseError::InvalidNumber { text:   token.text.clone(),
                                                                       line,
                                                                       column: token.column, })?;
            Ok(Expr::Literal { value: Value::Number(number),
                               line })
        },
        TokenKind::String => Ok(Expr::Literal { value: Value::String(token.text.clone()),
                                                line }),
        TokenKind::True => Ok(Expr::Literal { value: Value::Bool(true),
                                              line }),
        TokenKind::False => Ok(Expr::Literal { value: Value::Bool(false),
                                               line }),
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.text.clone(),
                                                       line }),
        TokenKind::If => parse_if_expression(tokens, line),
        TokenKind::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, "')' after expression")?;
            Ok(expr)
        },
        _ => Err(unexpected(token)),
    }
}
