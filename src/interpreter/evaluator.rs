/// Core evaluation logic.
///
/// Contains the `Evaluator` itself, the `Flow` signal used by `return`, and
/// dispatch over expression and statement variants.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons, short-circuit logic
/// and assignments.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, logical not, and increment and decrement of
/// variables.
pub mod unary;

/// Block evaluation with its own scope.
pub mod block;

/// Evaluation of `if`, `while` and `for` statements.
pub mod control_flow;

/// The `print` statement.
pub mod print;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides the step counter and the shared arity check.
pub mod utils;
