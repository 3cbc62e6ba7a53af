use std::io::{self, Write};

use crate::{
    config::Config,
    error::Error,
    interpreter::{
        context::Context,
        evaluator::{core::Evaluator, function::core::BUILTIN_FUNCTIONS},
        lexer::{tokenize, tokenize_from_line},
        parser::parse,
        value::core::Value,
    },
};

/// A long-lived interpreter session.
///
/// Variables and functions defined by one `execute` call stay visible to the
/// following ones until [`Interpreter::clear_context`] is called. `print`
/// writes to the configured output sink, standard output by default.
///
/// # Example
/// ```
/// use calcscript::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// assert_eq!(interpreter.execute("function sq(x) { return x * x }"), "");
/// assert_eq!(interpreter.execute("sq(12)"), "144");
///
/// assert_eq!(interpreter.execute("1 / 0"), "");
/// assert!(interpreter.last_error().contains("Division by zero"));
/// ```
pub struct Interpreter {
    context:    Context,
    config:     Config,
    output:     Box<dyn Write>,
    last_error: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with default limits that prints to standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an interpreter with the given limits that prints to standard
    /// output.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { context: Context::new(),
               config,
               output: Box::new(io::stdout()),
               last_error: String::new() }
    }

    /// Replaces the sink that `print` writes to.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));
    /// assert_eq!(interpreter.execute("print 1; 2"), "2");
    /// ```
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    /// Lexes, parses and evaluates `source`.
    ///
    /// Nothing runs if the source does not parse. Otherwise statements run
    /// in order; a top-level `return` stops the program early.
    ///
    /// # Returns
    /// The value of the last executed statement if it was an expression
    /// statement or a `return`, and `None` for any other statement.
    ///
    /// # Errors
    /// The first parse or runtime error. Statements that ran before a runtime
    /// error keep their effects.
    ///
    /// # Example
    /// ```
    /// use calcscript::{Interpreter, interpreter::value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.evaluate("x = 2; x ^ 10").unwrap(), Some(Value::Number(1024.0)));
    /// assert_eq!(interpreter.evaluate("while (x < 3) x++").unwrap(), None);
    /// assert!(interpreter.evaluate("x +").is_err());
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Option<Value>, Error> {
        self.evaluate_from_line(source, 1)
    }

    /// Evaluates `source` as the part of a larger file that starts on line
    /// `first_line`.
    ///
    /// Identical to [`Interpreter::evaluate`] except that line numbers in
    /// errors, including those raised later inside functions defined here,
    /// are counted from `first_line`.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// let error = interpreter.evaluate_from_line("a = 1\nb = a / 0", 41).unwrap_err();
    /// assert_eq!(error.line(), 42);
    /// assert_eq!(error.to_string(), "Error on line 42: Division by zero.");
    /// ```
    pub fn evaluate_from_line(&mut self,
                              source: &str,
                              first_line: usize)
                              -> Result<Option<Value>, Error> {
        let tokens = tokenize_from_line(source, first_line)?;
        let program = parse(&tokens)?;

        let mut evaluator = Evaluator::new(&mut self.context, self.output.as_mut(), &self.config);
        Ok(evaluator.eval_program(&program)?)
    }

    /// Executes `source` and returns the display form of its result.
    ///
    /// Returns an empty string when the last statement produces no shown
    /// value or when execution fails. On failure the message is available
    /// from [`Interpreter::last_error`]; it is cleared at the start of every
    /// call.
    pub fn execute(&mut self, source: &str) -> String {
        self.last_error.clear();
        tracing::debug!(source, "executing");

        match self.evaluate(source) {
            Ok(Some(value)) => value.to_string(),
            Ok(None) => String::new(),
            Err(error) => {
                tracing::debug!(%error, "execution failed");
                self.last_error = error.to_string();
                String::new()
            },
        }
    }

    /// Executes each non-blank line separately, keeping state between them.
    ///
    /// Lines are trimmed first. One result is collected per executed line.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let results = interpreter.execute_multiple(&["a = 3", "   ", "  a * 2  "]);
    ///
    /// assert_eq!(results, vec!["3", "6"]);
    /// ```
    pub fn execute_multiple<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        lines.iter()
             .map(|line| line.as_ref().trim())
             .filter(|line| !line.is_empty())
             .map(|line| self.execute(line))
             .collect()
    }

    /// Returns `true` if `source` lexes and parses. Nothing is evaluated.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let interpreter = Interpreter::new();
    ///
    /// assert!(interpreter.is_valid_syntax("if (x > 1) y = 2 else y = 3"));
    /// assert!(!interpreter.is_valid_syntax("while (x"));
    /// ```
    #[must_use]
    pub fn is_valid_syntax(&self, source: &str) -> bool {
        tokenize(source).and_then(|tokens| parse(&tokens)).is_ok()
    }

    /// The message of the most recent failure, or `""` if the last
    /// `execute` succeeded.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Discards all variables and functions.
    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    /// Sorted names of all live variables and user-defined functions.
    #[must_use]
    pub fn available_identifiers(&self) -> Vec<String> {
        self.context.identifiers()
    }

    /// Names of every builtin function.
    #[must_use]
    pub fn builtin_functions() -> Vec<&'static str> {
        BUILTIN_FUNCTIONS.to_vec()
    }

    /// The session's variables and functions.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// The session's limits.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
