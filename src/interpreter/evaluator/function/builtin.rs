use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Applies a single-argument `f64` method to the numeric form of a value.
///
/// The generated functions accept exactly one argument, convert it with
/// `to_number()` and return the result as a `Value::Number`.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Number(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)` on the numeric form of `x`.")]
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, line)?;

            Ok(Value::Number(args[0].to_number().$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(atan, atan);
real_builtin!(exp, exp);
real_builtin!(cbrt, cbrt);
real_builtin!(abs, abs);

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::builtin::pow, value::core::Value};
///
/// let r = pow(&[Value::Number(2.0), Value::Number(10.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(1024.0));
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("pow", args, 2, line)?;

    Ok(Value::Number(args[0].to_number().powf(args[1].to_number())))
}

/// Applies a rounding operation to a numeric value.
///
/// Supported rounding modes:
/// - `"floor"` → rounds down
/// - `"ceil"` → rounds up
/// - `"round"` → rounds to nearest, halfway cases away from zero
///
/// # Parameters
/// - `name`: Rounding mode.
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::builtin::unary_round, value::core::Value};
///
/// assert_eq!(unary_round("floor", &[Value::Number(-2.5)], 1).unwrap(), Value::Number(-3.0));
/// assert_eq!(unary_round("round", &[Value::Number(2.5)], 1).unwrap(), Value::Number(3.0));
/// ```
///
/// # Errors
/// `ArgumentCountMismatch` for anything but one argument, `InvalidOperand`
/// for an unknown mode.
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(name, args, 1, line)?;

    let x = args[0].to_number();
    let rounded = match name {
        "floor" => x.floor(),
        "ceil" => x.ceil(),
        "round" => x.round(),
        _ => {
            return Err(RuntimeError::InvalidOperand { details: format!("unknown rounding mode '{name}'"),
                                                      line });
        },
    };

    Ok(Value::Number(rounded))
}
