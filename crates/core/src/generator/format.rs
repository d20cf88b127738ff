//! Number and term formatting shared by the topic formulas.

const MAX_DECIMALS: usize = 6;

/// Round to one decimal place, dropping a trailing `.0`.
pub(crate) fn one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Exact decimal expansion of `numerator / denominator` for denominators whose
/// expansion terminates (2, 4, 5, 10, 100, ...). Longer expansions are cut at
/// six places. `denominator` must be positive.
pub(crate) fn exact_quotient(numerator: i64, denominator: i64) -> String {
    if denominator <= 0 {
        return "0".to_string();
    }
    let whole = numerator / denominator;
    let mut remainder = (numerator % denominator).abs();
    if remainder == 0 {
        return whole.to_string();
    }

    let mut digits = String::new();
    while remainder != 0 && digits.len() < MAX_DECIMALS {
        remainder *= 10;
        digits.push_str(&(remainder / denominator).to_string());
        remainder %= denominator;
    }
    let sign = if numerator < 0 && whole == 0 { "-" } else { "" };
    format!("{sign}{whole}.{digits}")
}

/// ` + 3x`, ` - 3x`, ` + x`; empty for a zero coefficient.
pub(crate) fn signed_term(coefficient: i64, variable: &str) -> String {
    if coefficient == 0 {
        return String::new();
    }
    let sign = if coefficient < 0 { '-' } else { '+' };
    let magnitude = coefficient.abs();
    if magnitude == 1 && !variable.is_empty() {
        format!(" {sign} {variable}")
    } else {
        format!(" {sign} {magnitude}{variable}")
    }
}

/// `(x + 3)`, `(x - 3)`, or `x` for zero.
pub(crate) fn linear_factor(constant: i64) -> String {
    if constant == 0 {
        return "x".to_string();
    }
    format!("(x{})", signed_term(constant, ""))
}

pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
