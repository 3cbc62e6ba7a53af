/// Function call dispatch.
///
/// Holds the builtin table and runs user-defined functions with their own
/// scope, arity check and recursion limit.
pub mod core;

/// Single-argument math builtins and `pow`.
///
/// Trigonometry, exponentials, absolute value and rounding.
pub mod builtin;

/// Inverse trigonometric functions with a restricted domain.
pub mod trig;

/// Logarithm builtins.
///
/// `log` and `ln` are the natural logarithm; `log10` and `log2` use fixed
/// bases.
pub mod log;

/// Square root, cube root and the general `root(n, x)`.
pub mod root;

/// Variadic `min` and `max`.
pub mod min_max;
