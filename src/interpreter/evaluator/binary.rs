/// Binary operation dispatch.
///
/// Routes assignments and the short-circuit operators before evaluating both
/// operands of everything else.
pub mod core;

/// Arithmetic on numbers plus string concatenation.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;

/// Short-circuit `and` / `or`.
pub mod logic;

/// Plain and compound assignment.
pub mod assign;
