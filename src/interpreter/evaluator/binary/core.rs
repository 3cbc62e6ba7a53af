use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison},
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// Assignments never evaluate their left side as a value, and `and` /
    /// `or` only evaluate the right side when it decides the result. Every
    /// other operator evaluates left then right and hands both values to
    /// [`eval_binary`].
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resulting value.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        if op.is_assignment() {
            return self.eval_assignment(left, op, right, line);
        }
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(left, op, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        eval_binary(op, &left, &right, line)
    }
}

/// Applies a non-assigning, non-short-circuit operator to two values.
///
/// # Example
/// ```
/// use calcscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let seven = eval_binary(BinaryOperator::IntDiv, &Value::Number(15.0), &Value::Number(2.0), 1);
/// assert_eq!(seven.unwrap(), Value::Number(7.0));
///
/// let yes = eval_binary(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 1);
/// assert_eq!(yes.unwrap(), Value::Bool(true));
/// ```
///
/// # Errors
/// Division and modulo by zero, or an operand that cannot be applied to the
/// operator.
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    match op {
        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            Ok(eval_comparison(op, left, right))
        },
        _ => eval_arithmetic(op, left, right, line),
    }
}
