//! # Notation conversions
//!
//! Pure string routines moving floating-point text between scientific and fixed
//! notation. The decimal point is relocated by the parsed exponent; no numeric state is
//! involved and nothing here feeds back into the fraction type.
use crate::error::FractionError;

/// Whether the textual form of a floating-point value carries an exponent marker.
#[must_use]
pub fn has_scientific_notation(text: &str) -> bool {
    text.contains(['e', 'E'])
}

/// Whether the textual form of a floating-point value is plain fixed notation.
#[must_use]
pub fn has_decimal_notation(text: &str) -> bool {
    !has_scientific_notation(text)
}

/// Convert a value in scientific notation to its fixed-notation equivalent.
///
/// Input without an exponent marker is validated and returned unchanged.
///
/// # Errors
///
/// `Format` when the input is not a number in either notation.
pub fn scientific_to_decimal(text: &str) -> Result<String, FractionError> {
    let trimmed = text.trim();
    if has_decimal_notation(trimmed) {
        trimmed.parse::<f64>().map_err(|_| format_error(text))?;
        return Ok(trimmed.to_string());
    }

    let (mantissa, exponent) = trimmed
        .split_once(['e', 'E'])
        .ok_or_else(|| format_error(text))?;
    let exponent: i32 = exponent.parse().map_err(|_| format_error(text))?;
    let (negative, whole, fractional) = split_number(mantissa).ok_or_else(|| format_error(text))?;

    let digits = format!("{whole}{fractional}");
    let point = whole.len() as i32 + exponent;
    let unsigned = if point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        format!("{}.{}", &digits[..point as usize], &digits[point as usize..])
    };
    let unsigned = strip_leading_zeros(&unsigned);

    Ok(if negative { format!("-{unsigned}") } else { unsigned.to_string() })
}

/// Convert a value in fixed notation to its scientific-notation equivalent.
///
/// Zero and magnitudes already in `[1, 10)` render with a zero exponent, as
/// `<value>E+00`. Input that already carries an exponent marker is first brought into
/// fixed notation and then converted back, normalizing its mantissa.
///
/// # Errors
///
/// `Format` when the input is not a number in either notation.
pub fn decimal_to_scientific(text: &str) -> Result<String, FractionError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| format_error(text))?;
    if value == 0.0 || (1.0..10.0).contains(&value.abs()) {
        return Ok(format!("{value}E+00"));
    }
    if has_scientific_notation(trimmed) {
        let fixed = scientific_to_decimal(trimmed)?;
        return decimal_to_scientific(&fixed);
    }

    let (negative, whole, fractional) = split_number(trimmed).ok_or_else(|| format_error(text))?;
    let digits = format!("{whole}{fractional}");
    let first = digits.find(|c| c != '0').ok_or_else(|| format_error(text))?;
    let exponent = whole.len() as i32 - 1 - first as i32;

    let significant = digits[first..].trim_end_matches('0');
    let mantissa = if significant.len() > 1 {
        format!("{}.{}", &significant[..1], &significant[1..])
    } else {
        significant.to_string()
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    let body = format!("{mantissa}E{sign}{:02}", exponent.abs());

    Ok(if negative { format!("-{body}") } else { body })
}

/// Split `[sign] digits [. digits]` into its parts, or `None` for any other shape.
fn split_number(text: &str) -> Option<(bool, &str, &str)> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fractional) = match unsigned.split_once('.') {
        Some((whole, fractional)) => (whole, fractional),
        None => (unsigned, ""),
    };
    let all_digits =
        |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

    if whole.is_empty() && fractional.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fractional) {
        return None;
    }

    Some((negative, whole, fractional))
}

/// Drop redundant zeros in front of the whole part, keeping at least one digit.
fn strip_leading_zeros(text: &str) -> &str {
    let significant = text.find(|c| c != '0').unwrap_or(text.len() - 1);
    let keep = if text[significant..].starts_with('.') {
        significant.saturating_sub(1)
    } else {
        significant.min(text.len() - 1)
    };

    &text[keep..]
}

fn format_error(text: &str) -> FractionError {
    FractionError::Format(format!(
        "\"{text}\" is not a floating point number in a recognized notation",
    ))
}
