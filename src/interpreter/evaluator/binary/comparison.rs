use std::cmp::Ordering;

use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a comparison between two values.
///
/// Equality uses [`Value::loose_eq`]. Ordering uses [`Value::loose_cmp`], so
/// two strings compare lexicographically and every other pair compares
/// numerically. A NaN on either side makes every ordering test false.
///
/// Any operator that is not a comparison yields `false`.
///
/// # Example
/// ```
/// use calcscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let a = Value::from("10");
/// let b = Value::Number(10.0);
///
/// assert_eq!(eval_comparison(BinaryOperator::Equal, &a, &b), Value::Bool(true));
/// assert_eq!(eval_comparison(BinaryOperator::GreaterEqual, &a, &b), Value::Bool(true));
/// assert_eq!(eval_comparison(BinaryOperator::Less, &Value::from("abc"), &Value::from("abd")),
///            Value::Bool(true));
/// ```
#[must_use]
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let ordering = left.loose_cmp(right);
    let result = match op {
        Equal => left.loose_eq(right),
        NotEqual => !left.loose_eq(right),
        Less => ordering == Some(Ordering::Less),
        Greater => ordering == Some(Ordering::Greater),
        LessEqual => ordering == Some(Ordering::Less) || left.loose_eq(right),
        GreaterEqual => ordering == Some(Ordering::Greater) || left.loose_eq(right),
        _ => false,
    };

    Value::Bool(result)
}
