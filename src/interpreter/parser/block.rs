use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{next_if_kind, skip_semicolons, unexpected},
        },
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// semicolons. Parsing continues until a closing `}` token is encountered.
///
/// Grammar: `block := "{" (statement ";"?)* "}"`
///
/// The result is returned as `Statement::Block { statements, line }`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A block statement containing all parsed statements.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_semicolons(tokens);

        if next_if_kind(tokens, TokenKind::RBrace).is_some() {
            break;
        }
        if let Some(token) = tokens.peek()
           && token.kind == TokenKind::EndOfFile
        {
            return Err(unexpected(token));
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(Statement::Block { statements, line })
}
