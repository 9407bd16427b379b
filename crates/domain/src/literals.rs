//! Syntax checks for numeric literals in raw user input.
//!
//! Only plain ASCII decimal notation is accepted: an optional leading `-`,
//! a run of digits, and for decimals an optional `.` followed by digits.
//! Leading `+`, exponents, whitespace and bare points are rejected.

/// Returns true when `input` is a run of ASCII digits, optionally preceded by
/// `-` when `allow_negative` is set.
#[must_use]
pub fn is_integer_literal(input: &str, allow_negative: bool) -> bool {
    let digits = match input.strip_prefix('-') {
        Some(rest) if allow_negative => rest,
        Some(_) => return false,
        None => input,
    };
    is_digit_run(digits)
}

/// Returns true when `input` is an optionally negative decimal number with at
/// most one decimal point and digits on both sides of it.
#[must_use]
pub fn is_decimal_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    match unsigned.split_once('.') {
        Some((whole, fraction)) => is_digit_run(whole) && is_digit_run(fraction),
        None => is_digit_run(unsigned),
    }
}

fn is_digit_run(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit())
}
