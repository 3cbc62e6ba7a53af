use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the minimum or maximum of one or more values.
///
/// Every argument is compared by its numeric form. The operation is selected
/// by the `name` parameter, which must be `"min"` or `"max"`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: At least one argument.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `ArgumentCountMismatch` if `args` is empty.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let args = [Value::Number(3.0), Value::Number(-7.0), Value::from("12")];
///
/// assert_eq!(min_max("min", &args, 1).unwrap(), Value::Number(-7.0));
/// assert_eq!(min_max("max", &args, 1).unwrap(), Value::Number(12.0));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut numbers = args.iter().map(Value::to_number);

    let Some(first) = numbers.next() else {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: "at least 1".to_string(),
                                                         found: 0,
                                                         line });
    };

    let result = if name == "min" {
        numbers.fold(first, f64::min)
    } else {
        numbers.fold(first, f64::max)
    };

    Ok(Value::Number(result))
}
