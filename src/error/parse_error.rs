#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A string literal was opened but its closing quote never appeared.
    #[error("Error on line {line}, column {column}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line of the opening quote.
        line:   usize,
        /// The source column of the opening quote.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}, column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}, column {column}: Expected {expected}, found '{found}'.")]
    ExpectedToken {
        /// Description of what the parser needed.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}, column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The left side of an assignment is not a variable name.
    #[error("Error on line {line}, column {column}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line of the assignment operator.
        line:   usize,
        /// The source column of the assignment operator.
        column: usize,
    },
    /// The operand of `++` or `--` is not a variable name.
    #[error("Error on line {line}, column {column}: Increment and decrement need a variable.")]
    InvalidIncrementTarget {
        /// The source line of the operator.
        line:   usize,
        /// The source column of the operator.
        column: usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Error on line {line}, column {column}: Invalid number '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Brackets or prefix operators are nested beyond the parser's limit.
    #[error("Error on line {line}, column {column}: Nesting deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line of the token that crossed the limit.
        line:   usize,
        /// The source column of the token that crossed the limit.
        column: usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    ///
    /// # Example
    /// ```
    /// use calcscript::error::ParseError;
    ///
    /// let error = ParseError::UnexpectedEndOfInput { line: 3, column: 7 };
    /// assert_eq!(error.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::InvalidAssignmentTarget { line, .. }
            | Self::InvalidIncrementTarget { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}
