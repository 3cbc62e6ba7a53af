use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an arithmetic operator on two values.
///
/// `+` concatenates the display forms when either side is a string. All
/// other operators, and `+` on non-strings, work on `to_number()` of both
/// sides.
///
/// - `/` is floating point division.
/// - `mod` and `%` take the remainder with the sign of the dividend.
/// - `div` divides and truncates toward zero.
/// - `^` and `**` raise to a power.
///
/// # Parameters
/// - `op`: Arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` for `/` and `div` with a zero divisor.
/// - `ModuloByZero` for `mod` and `%` with a zero divisor.
/// - `InvalidOperand` if `op` is not an arithmetic operator.
///
/// # Example
/// ```
/// use calcscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let joined = eval_arithmetic(BinaryOperator::Add, &Value::from("n="), &Value::Number(4.0), 1);
/// assert_eq!(joined.unwrap(), Value::from("n=4"));
///
/// let rem = eval_arithmetic(BinaryOperator::Mod, &Value::Number(-7.0), &Value::Number(3.0), 1);
/// assert_eq!(rem.unwrap(), Value::Number(-1.0));
///
/// assert!(eval_arithmetic(BinaryOperator::Div, &Value::Number(1.0), &Value::Number(0.0), 1).is_err());
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, IntDiv, Mod, Mul, Pow, Sub};

    if op == Add && (left.is_string() || right.is_string()) {
        return Ok(Value::String(format!("{left}{right}")));
    }

    let a = left.to_number();
    let b = right.to_number();

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a / b
        },
        Mod => {
            if b == 0.0 {
                return Err(RuntimeError::ModuloByZero { line });
            }
            a % b
        },
        IntDiv => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            (a / b).trunc()
        },
        Pow => a.powf(b),
        _ => {
            return Err(RuntimeError::InvalidOperand { details: format!("'{op}' is not an arithmetic operator"),
                                                      line });
        },
    };

    Ok(Value::Number(result))
}
