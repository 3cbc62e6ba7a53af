#[derive(Debug, thiserror::Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or update an undefined variable.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is neither built in nor user defined.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted argument count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero (`/` or `div`).
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero (`mod` or `%`).
    #[error("Error on line {line}: Modulo by zero.")]
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A math function was called outside of its domain.
    #[error("Error on line {line}: Domain error in '{function}': {details}.")]
    DomainError {
        /// The built-in function that rejected its argument.
        function: String,
        /// Details about the violated domain.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An assignment or increment target was not a variable.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to an operand it does not support.
    #[error("Error on line {line}: Invalid operand: {details}.")]
    InvalidOperand {
        /// Details about the operator and operand.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The expression before `(` does not name a function.
    #[error("Error on line {line}: Only named functions can be called.")]
    InvalidCallee {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function with the name of a built-in.
    #[error("Error on line {line}: Cannot redefine built-in function '{name}'.")]
    BuiltinRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested user function calls exceeded the configured depth.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The configured budget of loop iterations and calls ran out.
    #[error("Error on line {line}: Step limit of {limit} exceeded.")]
    StepLimitExceeded {
        /// The configured step budget.
        limit: u64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing `print` output to the sink failed.
    #[error("Error on line {line}: Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error points at.
    ///
    /// # Example
    /// ```
    /// use calcscript::error::RuntimeError;
    ///
    /// let error = RuntimeError::DivisionByZero { line: 4 };
    /// assert_eq!(error.line(), 4);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::DomainError { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::InvalidOperand { line, .. }
            | Self::InvalidCallee { line }
            | Self::BuiltinRedefinition { line, .. }
            | Self::RecursionLimit { line, .. }
            | Self::StepLimitExceeded { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
