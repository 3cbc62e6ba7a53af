/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals and unterminated strings, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, unknown names, domain
/// violations of the math library and exhausted execution limits.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running source text through the interpreter.
///
/// Lexing and parsing failures happen before a single statement is evaluated,
/// so a `Parse` error never leaves side effects behind. A `Runtime` error
/// aborts the current statement but keeps the effects of everything that ran
/// before it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a parsed statement failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error points at.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// let error = interpreter.evaluate("x = 1\ny = (x").unwrap_err();
    /// assert_eq!(error.line(), 2);
    ///
    /// let error = interpreter.evaluate("x = 1\n\nx / 0").unwrap_err();
    /// assert_eq!(error.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(error) => error.line(),
            Self::Runtime(error) => error.line(),
        }
    }
}
