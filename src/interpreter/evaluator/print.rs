use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a `print` statement.
    ///
    /// Arguments are evaluated left to right and their display forms are
    /// written back to back, followed by a newline.
    ///
    /// # Errors
    /// Any error from an argument, or `Output` if the sink cannot be written.
    ///
    /// # Example
    /// ```
    /// use calcscript::{
    ///     Config,
    ///     interpreter::{context::Context, evaluator::core::Evaluator, lexer::tokenize, parser::parse},
    /// };
    ///
    /// let tokens = tokenize("print \"x = \", 1 + 2").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut context = Context::new();
    /// let mut output = Vec::new();
    /// let config = Config::default();
    /// Evaluator::new(&mut context, &mut output, &config).eval_program(&program).unwrap();
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "x = 3\n");
    /// ```
    pub(crate) fn eval_print(&mut self, arguments: &[Expr], line: usize) -> EvalResult<()> {
        let text = arguments.iter()
                            .map(|argument| self.eval(argument).map(|value| value.to_string()))
                            .collect::<EvalResult<String>>()?;

        writeln!(self.output, "{text}").map_err(|source| RuntimeError::Output { source, line })
    }
}
