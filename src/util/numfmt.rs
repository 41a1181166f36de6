//! Locale-independent rendering of floating point numbers in C `%g` style.
//!
//! Element and attribute values produced by the writer must match what a
//! `printf("%g", value)` consumer expects, so this reproduces the `%g`
//! conversion rather than Rust's shortest-roundtrip `Display`:
//!
//! - `precision` significant digits (6 by default, 0 is treated as 1),
//! - exponent notation when the decimal exponent is below -4 or at least
//!   `precision`, fixed notation otherwise,
//! - trailing zeros and a dangling decimal point removed,
//! - exponents written with a sign and at least two digits (`1e+06`).

/// Default number of significant digits, matching `%g`.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` like C's `%g`.
///
/// # Examples
///
/// ```
/// use xmloutput::util::numfmt::format_g;
///
/// assert_eq!(format_g(42.0), "42");
/// assert_eq!(format_g(0.1), "0.1");
/// assert_eq!(format_g(1_000_000.0), "1e+06");
/// assert_eq!(format_g(3.141_592_65), "3.14159");
/// ```
#[must_use]
pub fn format_g(value: f64) -> String {
    format_g_with_precision(value, DEFAULT_PRECISION)
}

/// Formats `value` like C's `%.<precision>g`.
#[must_use]
pub fn format_g_with_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Round to the requested significant digits first: the exponent that
    // decides between the two notations is the one after rounding.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let limit = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        let fixed = format!("{value:.decimals$}");
        strip_trailing_zeros(&fixed).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
