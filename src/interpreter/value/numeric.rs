/// Parses the longest numeric prefix of a string.
///
/// Leading whitespace is skipped. The prefix may carry a sign, an integer part,
/// a fractional part and an exponent (`1e3`, `2.5E-2`). An exponent marker
/// that is not followed by digits is not part of the prefix. Text without any
/// leading digits yields `None`.
///
/// # Parameters
/// - `text`: The string to inspect.
///
/// # Returns
/// The parsed number, or `None` when the string does not start with one.
///
/// # Example
/// ```
/// use calcscript::interpreter::value::numeric::parse_leading_number;
///
/// assert_eq!(parse_leading_number("  42abc"), Some(42.0));
/// assert_eq!(parse_leading_number("-1.5e2 apples"), Some(-150.0));
/// assert_eq!(parse_leading_number("3e"), Some(3.0));
/// assert_eq!(parse_leading_number("abc"), None);
/// ```
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Significant digits shown when a number is displayed.
pub const DISPLAY_PRECISION: usize = 6;

/// Formats a number for display with [`DISPLAY_PRECISION`] significant
/// digits.
///
/// Numbers whose decimal exponent lies in `-5..6` are written in fixed
/// notation, all others in scientific notation with a signed, at least
/// two-digit exponent. Trailing zeros of the fraction are dropped, as is a
/// trailing decimal point. Infinities print as `inf`/`-inf` and NaN as `nan`.
///
/// # Example
/// ```
/// use calcscript::interpreter::value::numeric::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(123_456.0), "123456");
/// assert_eq!(format_number(1_234_567.0), "1.23457e+06");
/// assert_eq!(format_number(0.000_012_5), "1.25e-05");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // The exponent is taken after rounding, so 999999.7 becomes 1e+06.
    let scientific = format!("{number:.prec$e}", prec = DISPLAY_PRECISION - 1);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    let max_exponent = i32::try_from(DISPLAY_PRECISION).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{number:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
