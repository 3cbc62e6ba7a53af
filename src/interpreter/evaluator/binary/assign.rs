use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::arithmetic::eval_arithmetic,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `=` and the compound assignments `+=`, `-=`, `*=`, `/=`.
    ///
    /// The right side is evaluated first. A plain assignment writes it into
    /// the nearest scope that already holds the name, or the innermost scope
    /// if none does. A compound assignment combines the current value with
    /// the right side using the matching arithmetic operator before writing
    /// it back.
    ///
    /// # Returns
    /// The value that was stored.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the target is not a variable.
    /// - `UnknownVariable` for a compound assignment to an unbound name.
    /// - Any error of the arithmetic step, such as `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.execute("x = 4"), "4");
    /// assert_eq!(interpreter.execute("x *= 2 + 1"), "12");
    /// assert_eq!(interpreter.execute("x += \"!\""), "12!");
    /// ```
    pub(crate) fn eval_assignment(&mut self,
                                  target: &Expr,
                                  op: BinaryOperator,
                                  value: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let value = self.eval(value)?;
        let value = match op.compound_base() {
            Some(base) => {
                let current = self.eval_identifier(name, line)?;
                eval_arithmetic(base, &current, &value, line)?
            },
            None => value,
        };

        self.context.assign_nearest(name, value.clone());
        Ok(value)
    }
}
