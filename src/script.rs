use crate::{Interpreter, continuation::LineBuffer};

/// A script statement that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Script failed at line {line}: {message}")]
pub struct ScriptError {
    /// The script line on which the failing statement starts.
    pub line:       usize,
    /// The script line the error itself points at. For a failure inside a
    /// function this is a line of the function's body.
    pub error_line: usize,
    /// The interpreter's error message.
    pub message:    String,
}

/// Runs a script one complete statement at a time.
///
/// Blank lines and lines starting with `#` between statements are skipped.
/// The remaining lines are collected until their brackets balance, then
/// executed together. Execution stops at the first failing statement. Line
/// numbers in error messages count from the top of the script.
///
/// # Returns
/// The non-empty results of the executed statements, in order.
///
/// # Errors
/// A [`ScriptError`] naming the line where the failing statement starts.
///
/// # Example
/// ```
/// use calcscript::{Interpreter, script::run_script};
///
/// let source = "# squares\nfunction sq(x) {\n    return x * x\n}\n\nsq(3)\nsq(4)\n";
/// let mut interpreter = Interpreter::new();
///
/// assert_eq!(run_script(&mut interpreter, source).unwrap(), vec!["9", "16"]);
///
/// let error = run_script(&mut interpreter, "a = 1\nb = a / 0\nc = 2").unwrap_err();
/// assert_eq!(error.line, 2);
/// assert_eq!(error.message, "Error on line 2: Division by zero.");
/// assert_eq!(interpreter.execute("c"), "");
/// ```
pub fn run_script(interpreter: &mut Interpreter, source: &str) -> Result<Vec<String>, ScriptError> {
    let mut buffer = LineBuffer::new();
    let mut results = Vec::new();
    let mut start_line = 0;

    for (index, line) in source.lines().enumerate() {
        if !buffer.needs_continuation() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            start_line = index + 1;
        }
        if !buffer.push_line(line) {
            continue;
        }

        run_statement(interpreter, &buffer.code(), start_line, &mut results)?;
        buffer.clear();
    }

    // An unbalanced tail still runs so its parse error is reported.
    if buffer.needs_continuation() {
        run_statement(interpreter, &buffer.code(), start_line, &mut results)?;
    }

    Ok(results)
}

fn run_statement(interpreter: &mut Interpreter,
                 code: &str,
                 line: usize,
                 results: &mut Vec<String>)
                 -> Result<(), ScriptError> {
    match interpreter.evaluate_from_line(code, line) {
        Ok(Some(value)) => results.push(value.to_string()),
        Ok(None) => {},
        Err(error) => {
            return Err(ScriptError { line,
                                     error_line: error.line(),
                                     message: error.to_string() });
        },
    }
    Ok(())
}
