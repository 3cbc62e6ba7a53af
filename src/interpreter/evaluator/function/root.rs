use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Square root of a non-negative value.
///
/// # Errors
/// `DomainError` for negative input.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::root::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(16.0)], 1).unwrap(), Value::Number(4.0));
/// assert!(sqrt(&[Value::Number(-4.0)], 1).is_err());
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sqrt", args, 1, line)?;

    let x = args[0].to_number();
    if x < 0.0 {
        return Err(RuntimeError::DomainError { function: "sqrt".to_string(),
                                               details: format!("cannot take the square root of {x}"),
                                               line });
    }

    Ok(Value::Number(x.sqrt()))
}

/// Computes the `n`-th root of `x` as `root(n, x)`.
///
/// Negative radicands are only accepted for odd integer degrees, where the
/// real root is negative.
///
/// # Errors
/// - `DivisionByZero` for a degree of zero.
/// - `DomainError` for a negative radicand with an even or fractional degree.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::root::root, value::core::Value};
///
/// assert_eq!(root(&[Value::Number(3.0), Value::Number(-8.0)], 1).unwrap(), Value::Number(-2.0));
/// assert_eq!(root(&[Value::Number(2.0), Value::Number(9.0)], 1).unwrap(), Value::Number(3.0));
/// assert!(root(&[Value::Number(2.0), Value::Number(-9.0)], 1).is_err());
/// assert!(root(&[Value::Number(0.0), Value::Number(9.0)], 1).is_err());
/// ```
pub fn root(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("root", args, 2, line)?;

    let n = args[0].to_number();
    let x = args[1].to_number();

    if n == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    if x >= 0.0 {
        return Ok(Value::Number(x.powf(n.recip())));
    }
    if n.fract() == 0.0 && n % 2.0 != 0.0 {
        return Ok(Value::Number(-(-x).powf(n.recip())));
    }

    Err(RuntimeError::DomainError { function: "root".to_string(),
                                    details: format!("no real root of degree {n} for {x}"),
                                    line })
}
