use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation and logical not work on any value after converting it to a
    /// number or boolean. The increment and decrement forms read the
    /// variable, store the value plus or minus one back into the scope that
    /// holds it, and return either the new value (prefix) or the old value
    /// (postfix).
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `operand`: The operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `UnknownVariable` when incrementing an unbound name.
    /// - `InvalidAssignmentTarget` when the operand is not a variable.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        use UnaryOperator::{Negate, Not, PostDecrement, PostIncrement, PreDecrement, PreIncrement};

        match op {
            Negate => Ok(negate(&self.eval(operand)?)),
            Not => Ok(not(&self.eval(operand)?)),
            PreIncrement => self.step_variable(operand, 1.0, true, line),
            PreDecrement => self.step_variable(operand, -1.0, true, line),
            PostIncrement => self.step_variable(operand, 1.0, false, line),
            PostDecrement => self.step_variable(operand, -1.0, false, line),
        }
    }

    fn step_variable(&mut self,
                     operand: &Expr,
                     delta: f64,
                     prefix: bool,
                     line: usize)
                     -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = operand else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let old = self.eval_identifier(name, line)?.to_number();
        let new = old + delta;
        self.context.assign_nearest(name, Value::Number(new));

        Ok(Value::Number(if prefix { new } else { old }))
    }
}

/// Arithmetic negation of the numeric form of a value.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::unary::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Number(3.0)), Value::Number(-3.0));
/// assert_eq!(negate(&Value::Bool(true)), Value::Number(-1.0));
/// assert_eq!(negate(&Value::from("2.5")), Value::Number(-2.5));
/// ```
#[must_use]
pub fn negate(value: &Value) -> Value {
    Value::Number(-value.to_number())
}

/// Logical negation of the truthiness of a value.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::unary::not, value::core::Value};
///
/// assert_eq!(not(&Value::Number(0.0)), Value::Bool(true));
/// assert_eq!(not(&Value::from("x")), Value::Bool(false));
/// ```
#[must_use]
pub fn not(value: &Value) -> Value {
    Value::Bool(!value.to_bool())
}
