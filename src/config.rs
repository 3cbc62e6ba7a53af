/// Default limit on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

/// Execution limits applied by the evaluator.
///
/// The defaults allow any terminating program to run while still turning
/// runaway recursion into a recoverable error instead of a native stack
/// overflow. A step limit is off unless requested.
///
/// # Example
/// ```
/// use calcscript::{Config, Interpreter};
///
/// let config = Config { step_limit: Some(1_000),
///                       ..Config::default() };
/// let mut interpreter = Interpreter::with_config(config);
///
/// assert_eq!(interpreter.execute("while (true) 1"), "");
/// assert!(interpreter.last_error().contains("Step limit"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of user function calls that may be active at once.
    pub max_call_depth: usize,
    /// Maximum number of loop iterations plus function calls a single
    /// `execute` may perform. `None` means unlimited.
    pub step_limit:     Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               step_limit:     None, }
    }
}
