use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Arc sine. The argument must lie in `[-1, 1]`.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::trig::asin, value::core::Value};
///
/// assert_eq!(asin(&[Value::Number(1.0)], 1).unwrap(),
///            Value::Number(std::f64::consts::FRAC_PI_2));
/// assert!(asin(&[Value::Number(1.5)], 1).is_err());
/// ```
pub fn asin(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = unit_interval_arg("asin", args, line)?;
    Ok(Value::Number(x.asin()))
}

/// Arc cosine. The argument must lie in `[-1, 1]`.
pub fn acos(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = unit_interval_arg("acos", args, line)?;
    Ok(Value::Number(x.acos()))
}

fn unit_interval_arg(name: &str, args: &[Value], line: usize) -> EvalResult<f64> {
    check_arity(name, args, 1, line)?;

    let x = args[0].to_number();
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(RuntimeError::DomainError { function: name.to_string(),
                                        details: format!("argument {x} is outside [-1, 1]"),
                                        line })
    }
}
