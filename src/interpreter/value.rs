/// Core value representation.
///
/// Defines the dynamically typed `Value` enum together with its coercions
/// (`to_number`, `to_bool`), its display form, and the loose equality and
/// ordering rules shared by every comparison operator.
pub mod core;

/// Lenient numeric parsing of string operands and the display format of
/// numbers.
pub mod numeric;
