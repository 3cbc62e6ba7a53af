use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Counts one execution step against the configured step limit.
    ///
    /// Called once per loop iteration and once per user function call.
    ///
    /// # Errors
    /// Returns `StepLimitExceeded` once the count goes past the limit.
    pub(crate) fn tick(&mut self, line: usize) -> EvalResult<()> {
        self.steps += 1;
        match self.config.step_limit {
            Some(limit) if self.steps > limit => {
                Err(RuntimeError::StepLimitExceeded { limit, line })
            },
            _ => Ok(()),
        }
    }
}

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use calcscript::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = vec![Value::Number(2.0), Value::Number(1.0)];
///
/// assert!(check_arity("pow", &args, 2, 15).is_ok());
/// assert!(check_arity("sin", &args, 1, 15).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected: expected.to_string(),
                                                  found: args.len(),
                                                  line })
    }
}
