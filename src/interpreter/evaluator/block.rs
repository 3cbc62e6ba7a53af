use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a block of statements in a new scope.
    ///
    /// The scope is popped again however the block ends: normally, through
    /// a `return`, or with an error.
    ///
    /// # Returns
    /// The flow of the last executed statement, or `Flow::Normal(Null)` for
    /// an empty block.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.execute("x = 1");
    /// interpreter.execute("{ y = 2; x = x + y }");
    ///
    /// assert_eq!(interpreter.execute("x"), "3");
    /// assert_eq!(interpreter.execute("y"), "");
    /// ```
    pub(crate) fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.context.push_scope();
        let result = self.eval_statements(statements);
        self.context.pop_scope();
        result
    }

    fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        let mut last = Value::Null;
        for statement in statements {
            match self.eval_statement(statement)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }
}
