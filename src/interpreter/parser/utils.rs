use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// An exhausted iterator reports `EndOfFile`, so callers never have to treat
/// the missing synthetic end marker as a separate case.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::EndOfFile, |token| token.kind)
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// The consumed token, or `None` (consuming nothing) if the kind differs.
pub(in crate::interpreter::parser) fn next_if_kind<'a, I>(tokens: &mut Peekable<I>,
                                                          kind: TokenKind)
                                                          -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == kind)
}

/// Consumes the next token and checks that it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Human readable description used in the error message, such
///   as `"')' after if condition"`.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `ExpectedToken` if another token is found, or
/// `UnexpectedEndOfInput` if the input ends first.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) if token.kind == TokenKind::EndOfFile => {
            Err(ParseError::UnexpectedEndOfInput { line:   token.line,
                                                   column: token.column, })
        },
        Some(token) => Err(ParseError::ExpectedToken { expected: expected.to_string(),
                                                       found:    token.text.clone(),
                                                       line:     token.line,
                                                       column:   token.column, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0, column: 0 }),
    }
}

/// Builds the error reported when `token` cannot start or continue the
/// construct being parsed.
pub(in crate::interpreter::parser) fn unexpected(token: &Token) -> ParseError {
    if token.kind == TokenKind::EndOfFile {
        ParseError::UnexpectedEndOfInput { line:   token.line,
                                           column: token.column, }
    } else {
        ParseError::UnexpectedToken { token:  token.text.clone(),
                                      line:   token.line,
                                      column: token.column, }
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists, parameter lists and
/// parenthesized `print` arguments. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if next_if_kind(tokens, closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == closing => break,
            Some(token) if token.kind == TokenKind::EndOfFile => {
                return Err(ParseError::UnexpectedEndOfInput { line:   token.line,
                                                              column: token.column, });
            },
            Some(token) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or {closing:?}"),
                                                       found:    token.text.clone(),
                                                       line:     token.line,
                                                       column:   token.column, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0, column: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `TokenKind::Identifier`. Keywords and named
/// constants have already been reclassified by the lexer, so they are
/// rejected here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, "identifier").map(|token| token.text.clone())
}

/// Skips any number of `;` separators.
pub(in crate::interpreter::parser) fn skip_semicolons<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while next_if_kind(tokens, TokenKind::Semicolon).is_some() {}
}

/// Returns `true` if a token of this kind ends the current statement.
pub(in crate::interpreter::parser) const fn ends_statement(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Semicolon | TokenKind::RBrace | TokenKind::EndOfFile)
}
