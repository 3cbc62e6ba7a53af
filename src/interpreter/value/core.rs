use std::cmp::Ordering;

use crate::interpreter::value::numeric::{format_number, parse_leading_number};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these four variants. Values are
/// cheap to clone and are always copied by value; there is no shared heap
/// state between variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value. Produced by statements, by functions that
    /// finish without `return`, and by an `if` without a taken branch.
    #[default]
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and logical operators.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, produced by string literals and by `+` when either
    /// operand is a string.
    String(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// Converts the value to a number.
    ///
    /// - Numbers are returned unchanged.
    /// - Booleans become `1` or `0`.
    /// - Strings are parsed leniently: the longest numeric prefix is used, and
    ///   a string without one becomes `0`.
    /// - `Null` becomes `0`.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).to_number(), 1.0);
    /// assert_eq!(Value::from("12px").to_number(), 12.0);
    /// assert_eq!(Value::from("abc").to_number(), 0.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::String(s) => parse_leading_number(s).unwrap_or(0.0),
            Self::Null => 0.0,
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Numbers are truthy when non-zero, strings when non-empty; `Null` is
    /// always false.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-2.0).to_bool());
    /// assert!(!Value::Number(0.0).to_bool());
    /// assert!(Value::from("0").to_bool());
    /// assert!(!Value::from("").to_bool());
    /// assert!(!Value::Null.to_bool());
    /// ```
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Returns the user-visible text of the value.
    ///
    /// This is the same text produced by the `Display` implementation:
    /// strings appear without quotes, numbers with six significant digits
    /// (`14` rather than `14.0`, `0.333333` for a third), and `Null` as
    /// `null`.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(14.0).to_display_string(), "14");
    /// assert_eq!(Value::Number(0.25).to_display_string(), "0.25");
    /// assert_eq!(Value::Number(2e100).to_display_string(), "2e+100");
    /// assert_eq!(Value::Bool(false).to_display_string(), "false");
    /// assert_eq!(Value::from("hi").to_display_string(), "hi");
    /// ```
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Compares two values with the language's loose equality.
    ///
    /// Values of the same variant compare directly. Values of different
    /// variants are compared by their numeric conversions, so `"3" == 3` and
    /// `true == 1` both hold.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::value::core::Value;
    ///
    /// assert!(Value::from("3").loose_eq(&Value::Number(3.0)));
    /// assert!(Value::Bool(true).loose_eq(&Value::Number(1.0)));
    /// assert!(Value::Null.loose_eq(&Value::Null));
    /// assert!(!Value::from("a").loose_eq(&Value::from("b")));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => self.to_number() == other.to_number(),
        }
    }

    /// Orders two values for the relational operators.
    ///
    /// Two strings compare lexicographically; every other pair compares
    /// numerically. Returns `None` when a `NaN` is involved.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use calcscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("apple").loose_cmp(&Value::from("banana")), Some(Ordering::Less));
    /// assert_eq!(Value::Number(2.0).loose_cmp(&Value::from("10")), Some(Ordering::Less));
    /// assert_eq!(Value::Number(f64::NAN).loose_cmp(&Value::Number(1.0)), None);
    /// ```
    #[must_use]
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
