/// Parser entry points.
///
/// Defines the `ParseResult` alias, the program-level `parse` function, the
/// expression entry point and the conditional expression.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from assignment down to
/// exponentiation, plus the token-to-operator mapping.
pub mod binary;

/// Unary, postfix, call and primary expression parsing.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading keyword to the `if`, `while`, `for`, function,
/// `return` and `print` parsers, falling back to expression statements.
pub mod statement;

/// Shared parser helpers: lookahead, expectation checks and list parsing.
pub(crate) mod utils;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse};
