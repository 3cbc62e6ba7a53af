use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an `if` statement.
    ///
    /// A false condition without an `else` branch yields `Null`.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>)
                          -> EvalResult<Flow> {
        if self.eval(condition)?.to_bool() {
            self.eval_statement(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval_statement(else_branch)
        } else {
            Ok(Flow::Normal(Value::Null))
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is checked before each iteration and every iteration
    /// counts as one step. A `return` inside the body ends the loop and is
    /// passed on.
    ///
    /// # Returns
    /// The value of the last executed body, or `Null` if the body never ran.
    ///
    /// # Errors
    /// Any error from the condition or body, or `StepLimitExceeded`.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Statement,
                             line: usize)
                             -> EvalResult<Flow> {
        let mut last = Value::Null;
        while self.eval(condition)?.to_bool() {
            self.tick(line)?;
            match self.eval_statement(body)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }

    /// Evaluates a C-style `for` loop.
    ///
    /// `init` runs once, then the condition, body and update repeat until
    /// the condition is false. The loop opens no scope of its own, so a
    /// counter assigned in `init` is still visible afterwards.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.execute("total = 0");
    /// interpreter.execute("for (i = 1; i <= 4; i++) total += i");
    ///
    /// assert_eq!(interpreter.execute("total"), "10");
    /// assert_eq!(interpreter.execute("i"), "5");
    /// ```
    pub(crate) fn eval_for(&mut self,
                           init: &Expr,
                           condition: &Expr,
                           update: &Expr,
                           body: &Statement,
                           line: usize)
                           -> EvalResult<Flow> {
        self.eval(init)?;

        let mut last = Value::Null;
        while self.eval(condition)?.to_bool() {
            self.tick(line)?;
            match self.eval_statement(body)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
            self.eval(update)?;
        }
        Ok(Flow::Normal(last))
    }
}
