use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                ends_statement, expect, next_if_kind, parse_comma_separated, parse_identifier,
                peek_kind,
            },
        },
        stack::ensure_sufficient_stack,
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block (`{ ... }`),
/// - an `if`, `while` or `for` statement,
/// - a function declaration (`function` or `procedure`),
/// - a `return` statement,
/// - a `print` statement,
/// - an expression used as a statement.
///
/// The leading keyword selects the construct; anything else is parsed as an
/// expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| parse_statement_inner(tokens))
}

fn parse_statement_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0, column: 0 });
    };
    let line = token.line;

    match token.kind {
        TokenKind::LBrace => {
            tokens.next();
            parse_block(tokens, line)
        },
        TokenKind::If => {
            tokens.next();
            parse_if_statement(tokens, line)
        },
        TokenKind::While => {
            tokens.next();
            parse_while_statement(tokens, line)
        },
        TokenKind::For => {
            tokens.next();
            parse_for_statement(tokens, line)
        },
        TokenKind::Function | TokenKind::Procedure => {
            tokens.next();
            parse_function_definition(tokens, line)
        },
        TokenKind::Return => {
            tokens.next();
            parse_return_statement(tokens, line)
        },
        TokenKind::Print => {
            tokens.next();
            parse_print_statement(tokens, line)
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <statement> [;] [else <statement>]
/// ```
/// A single `;` may separate the then-branch from `else`, so that
/// `if (x) a = 1; else a = 2` reads naturally. A `;` that is not followed by
/// `else` is left in place for the enclosing statement list.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')' after if condition")?;

    let then_branch = parse_statement(tokens)?;

    if peek_kind(tokens) == TokenKind::Semicolon {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if peek_kind(&mut lookahead) == TokenKind::Else {
            tokens.next();
        }
    }

    let else_branch = if next_if_kind(tokens, TokenKind::Else).is_some() {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')' after while condition")?;

    let body = parse_statement(tokens)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses a C-style `for` loop.
///
/// Grammar:
/// `for := "for" "(" expression ";" expression ";" expression ")" statement`
///
/// All three clauses are required.
fn parse_for_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'(' after 'for'")?;
    let init = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after for loop initializer")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after for loop condition")?;
    let update = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')' after for loop clauses")?;

    let body = parse_statement(tokens)?;

    Ok(Statement::For { init,
                        condition,
                        update,
                        body: Box::new(body),
                        line })
}

/// Parses a function definition.
///
/// Grammar:
/// `function := ("function" | "procedure") identifier "(" params ")" statement`
///
/// Both keywords produce the same kind of definition. The body is any
/// statement, usually a block.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `function` keyword.
/// - `line`: Line number of the keyword.
///
/// # Returns
/// A `Statement::Function` holding the shared definition.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;

    let body = parse_statement(tokens)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                 params,
                                                 body,
                                                 line })))
}

/// Parses a `return` statement.
///
/// The value is optional: `return` directly followed by `;`, `}` or the end
/// of input returns nothing.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let value = if ends_statement(peek_kind(tokens)) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };

    Ok(Statement::Return { value, line })
}

/// Parses a `print` statement.
///
/// Two spellings are accepted:
/// ```text
///     print a, b, c
///     print(a, b, c)
/// ```
/// The parenthesized form is recognized only when its closing `)` is not
/// followed by something that continues an expression, so `print (a + b) * 2`
/// still prints a single product.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `print` keyword.
/// - `line`: Line number of the keyword.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if ends_statement(peek_kind(tokens)) {
        return Ok(Statement::Print { arguments: Vec::new(),
                                     line });
    }

    if peek_kind(tokens) == TokenKind::LParen && is_argument_list(tokens.clone()) {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
        return Ok(Statement::Print { arguments, line });
    }

    let mut arguments = vec![parse_expression(tokens)?];
    while next_if_kind(tokens, TokenKind::Comma).is_some() {
        arguments.push(parse_expression(tokens)?);
    }

    Ok(Statement::Print { arguments, line })
}

/// Scans ahead from an opening `(` to its matching `)` and reports whether
/// the parenthesized group is the whole argument list of a `print`.
fn is_argument_list<'a, I>(mut lookahead: Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    let mut depth = 0_usize;

    for token in lookahead.by_ref() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            },
            TokenKind::EndOfFile => return false,
            _ => {},
        }
    }

    !continues_expression(peek_kind(&mut lookahead))
}

/// Returns `true` if a token of this kind can follow a complete operand and
/// extend it into a larger expression.
const fn continues_expression(kind: TokenKind) -> bool {
    use TokenKind::{
        And, BangEqual, Caret, Comma, Div, EqualEqual, Equals, Greater, GreaterEqual, LParen,
        Less, LessEqual, Minus, MinusAssign, MinusMinus, Mod, Or, Percent, Plus, PlusAssign,
        PlusPlus, Slash, SlashAssign, Star, StarAssign, StarStar,
    };

    matches!(kind,
             Plus | Minus | Star | Slash | Caret | StarStar | Percent | Mod | Div
             | EqualEqual | BangEqual | Less | Greater | LessEqual | GreaterEqual
             | And | Or
             | Equals | PlusAssign | MinusAssign | StarAssign | SlashAssign
             | PlusPlus | MinusMinus
             | LParen | Comma)
}
