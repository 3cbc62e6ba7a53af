use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not
    /// already decide the result. The result is always a boolean.
    ///
    /// # Example
    /// ```
    /// use calcscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// // `missing` is never looked up.
    /// assert_eq!(interpreter.execute("false and missing"), "false");
    /// assert_eq!(interpreter.execute("1 or missing"), "true");
    /// assert_eq!(interpreter.execute("\"\" or 0"), "false");
    /// ```
    pub(crate) fn eval_logic(&mut self,
                             left: &Expr,
                             op: BinaryOperator,
                             right: &Expr)
                             -> EvalResult<Value> {
        let left = self.eval(left)?.to_bool();

        let result = match op {
            BinaryOperator::And => left && self.eval(right)?.to_bool(),
            _ => left || self.eval(right)?.to_bool(),
        };

        Ok(Value::Bool(result))
    }
}
