//! # calcscript
//!
//! calcscript is an interpreter for a small dynamically typed calculator
//! language written in Rust. It supports arithmetic on numbers and strings,
//! variables with block scoping, `if`/`while`/`for`, user-defined functions
//! with recursion, and a library of math builtins.
//!
//! ```
//! use calcscript::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//!
//! interpreter.execute("function fact(n) { if (n <= 1) return 1 else return n * fact(n - 1) }");
//! assert_eq!(interpreter.execute("fact(9)"), "362880");
//! assert_eq!(interpreter.execute("fact(10)"), "3.6288e+06");
//! assert_eq!(interpreter.execute("2 ^ 3 ^ 2"), "512");
//! assert_eq!(interpreter.execute("round(PI * 100) / 100"), "3.14");
//! ```

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Interactive session commands and display switches.
pub mod command;
/// Execution limits.
pub mod config;
/// Bracket-balance tracking for multi-line interactive input.
pub mod continuation;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the runtime context to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the `Interpreter` session used by the binary and by embedders.
pub mod interpreter;
/// Running whole script files statement by statement.
pub mod script;

pub use config::Config;
pub use error::Error;
pub use interpreter::{session::Interpreter, value::core::Value};
