use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_assignment,
            statement::parse_statement,
            utils::{expect, peek_kind, skip_semicolons},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest bracket and prefix operator nesting a program may use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete token stream into a program.
///
/// A program is a sequence of statements, optionally separated by `;`.
/// Parsing stops at the `EndOfFile` token.
///
/// Grammar: `program := (statement ";"?)* EOF`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The top-level statements in source order.
///
/// # Errors
/// Returns the first `ParseError` encountered. No partial program is
/// returned. Input nested deeper than [`MAX_NESTING_DEPTH`] is rejected with
/// `NestingTooDeep` before any statement is parsed.
///
/// # Example
/// ```
/// use calcscript::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("x = 1; y = 2\nprint x + y").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 3);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    check_nesting(tokens)?;

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_semicolons(&mut iter);
        if peek_kind(&mut iter) == TokenKind::EndOfFile {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Rejects token streams whose nesting would exceed [`MAX_NESTING_DEPTH`].
///
/// Every open `(` or `{` adds a level until it is closed, and so does each
/// prefix operator in an unbroken run such as `- - not x`.
fn check_nesting(tokens: &[Token]) -> ParseResult<()> {
    let mut brackets = 0_usize;
    let mut prefix_run = 0_usize;

    for token in tokens {
        match token.kind {
            TokenKind::LParen | TokenKind::LBrace => {
                brackets += 1;
                prefix_run = 0;
            },
            TokenKind::RParen | TokenKind::RBrace => {
                brackets = brackets.saturating_sub(1);
                prefix_run = 0;
            },
            TokenKind::Minus | TokenKind::Not | TokenKind::PlusPlus | TokenKind::MinusMinus => {
                prefix_run += 1;
            },
            _ => prefix_run = 0,
        }

        if brackets + prefix_run > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                    line:   token.line,
                                                    column: token.column, });
        }
    }

    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens)
}

/// Parses the conditional expression.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <then_expr> else <else_expr>
/// ```
/// Unlike the `if` statement, the expression form always needs an `else`
/// branch because it must produce a value.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// An `Expr::IfExpr` node representing the full conditional expression.
///
/// # Errors
/// - `ExpectedToken` if the parentheses or the `else` keyword are missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')' after if condition")?;

    let then_branch = parse_expression(tokens)?;
    expect(tokens, TokenKind::Else, "'else' in if expression")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      line })
}
