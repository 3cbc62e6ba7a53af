use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes a logarithm of the numeric form of a value.
///
/// `name` selects the base: `"log"` and `"ln"` are the natural logarithm,
/// `"log10"` and `"log2"` use base 10 and 2.
///
/// # Parameters
/// - `name`: Which logarithm to compute.
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `DomainError` if the argument is zero or negative.
///
/// # Example
/// ```
/// use calcscript::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// assert_eq!(log("log10", &[Value::Number(1000.0)], 1).unwrap(), Value::Number(3.0));
/// assert_eq!(log("ln", &[Value::Number(1.0)], 1).unwrap(), Value::Number(0.0));
/// assert!(log("log2", &[Value::Number(0.0)], 1).is_err());
/// ```
pub fn log(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(name, args, 1, line)?;

    let x = args[0].to_number();
    if x <= 0.0 || x.is_nan() {
        return Err(RuntimeError::DomainError { function: name.to_string(),
                                               details: format!("argument {x} is not positive"),
                                               line });
    }

    let result = match name {
        "log10" => x.log10(),
        "log2" => x.log2(),
        _ => x.ln(),
    };

    Ok(Value::Number(result))
}
