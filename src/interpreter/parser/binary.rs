use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_unary},
        },
        stack::ensure_sufficient_stack,
    },
};

/// Parses assignment and compound assignment.
///
/// Assignment is right-associative: `a = b = 3` assigns `3` to `b` and then
/// to `a`. The left side must be a plain variable name.
///
/// The rule is:
/// `assignment := logical_or (("=" | "+=" | "-=" | "*=" | "/=") assignment)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` with an assignment operator, or the plain operand when
/// no assignment follows.
///
/// # Errors
/// Returns `InvalidAssignmentTarget` if the left side is not an identifier.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| parse_assignment_inner(tokens))
}

fn parse_assignment_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_logical_or(tokens)?;

    if let Some(token) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token.kind)
       && op.is_assignment()
    {
        let (line, column) = (token.line, token.column);
        tokens.next();

        if !matches!(left, Expr::Identifier { .. }) {
            return Err(ParseError::InvalidAssignmentTarget { line, column });
        }

        let right = parse_assignment(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses a left-associative chain of binary operators.
///
/// `next` parses the operands; `accepts` selects which operators belong to
/// this precedence level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           next: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = next(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            let line = token.line;
            tokens.next();
            let right = next(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_equality, |op| op == BinaryOperator::And)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// The rule is: `comparison := term (("<" | ">" | "<=" | ">=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_term, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::Greater
                 | BinaryOperator::LessEqual
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `mod`, `%` and `div`.
///
/// The rule is: `factor := unary (("*" | "/" | "mod" | "%" | "div") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op,
                 BinaryOperator::Mul
                 | BinaryOperator::Div
                 | BinaryOperator::Mod
                 | BinaryOperator::IntDiv)
    })
}

/// Parses exponentiation expressions.
///
/// The right operand is parsed at unary level, which makes the operator
/// right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`, and `2 ^ -1` is
/// accepted. `**` is a synonym of `^`.
///
/// The rule is: `power := call (("^" | "**") unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_call(tokens)?;

    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Caret | TokenKind::StarStar)
    {
        let line = token.line;
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison, logical or assignment) and `None` for all other
/// tokens.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use calcscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::StarStar), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator as B;

    let op = match kind {
        TokenKind::Plus => B::Add,
        TokenKind::Minus => B::Sub,
        TokenKind::Star => B::Mul,
        TokenKind::Slash => B::Div,
        TokenKind::Caret | TokenKind::StarStar => B::Pow,
        TokenKind::Percent | TokenKind::Mod => B::Mod,
        TokenKind::Div => B::IntDiv,
        TokenKind::Less => B::Less,
        TokenKind::Greater => B::Greater,
        TokenKind::LessEqual => B::LessEqual,
        TokenKind::GreaterEqual => B::GreaterEqual,
        TokenKind::EqualEqual => B::Equal,
        TokenKind::BangEqual => B::NotEqual,
        TokenKind::And => B::And,
        TokenKind::Or => B::Or,
        TokenKind::Equals => B::Assign,
        TokenKind::PlusAssign => B::AddAssign,
        TokenKind::MinusAssign => B::SubAssign,
        TokenKind::StarAssign => B::MulAssign,
        TokenKind::SlashAssign => B::DivAssign,
        _ => return None,
    };

    Some(op)
}
