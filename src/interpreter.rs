/// The runtime state shared across statements and `execute` calls.
///
/// Holds the stack of variable scopes and the table of user-defined
/// functions.
pub mod context;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. Named constants
/// such as `pi` are replaced by their numeric value here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports unterminated strings; unknown characters become `Invalid`
///   tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports arithmetic, function calls, assignments, loops and more.
pub mod parser;
/// The user-facing interpreter session.
///
/// Ties lexing, parsing and evaluation together behind string-in,
/// string-out methods and keeps the context alive between calls.
pub mod session;
/// Stack growth for the recursive parser and evaluator.
pub(crate) mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically typed `Value` used during
/// interpretation: null, booleans, numbers and strings. It also provides the
/// loose conversions and comparisons the operators are built on.
pub mod value;
