// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_json::Value;

/// Thousands separator used when the caller has no preference.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Group the integer digits of `num` in threes.
///
/// The fractional part, if any, is kept as-is after a `.`. Non-finite values
/// render as `NaN`, `Infinity` and `-Infinity`.
///
/// ```
/// use handy_core::format_currency;
///
/// assert_eq!(format_currency(1234567.891, ","), "1,234,567.891");
/// assert_eq!(format_currency(-50000.0, "."), "-50.000");
/// ```
pub fn format_currency(num: f64, separator: &str) -> String {
    if num.is_nan() {
        return "NaN".to_owned();
    }
    if num.is_infinite() {
        return if num > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    // Negative zero prints as "0".
    let rendered = if num == 0.0 { 0.0 } else { num }.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 * separator.len());
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Whether `value` is a number (JSON numbers are never NaN).
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|number| !number.is_nan())
}
