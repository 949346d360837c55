// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Brazilian Real input normalization and display.
//!
//! Input text follows the pt-BR convention: `R$ ` prefix, `.` for thousands
//! and `,` for decimals. Parsing never fails; unusable text degrades to a
//! sentinel (`0` for values, `None` for installment counts).

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DebtError, DebtResult};

pub const CURRENCY_PREFIX: &str = "R$";
pub const GROUPING_SEPARATOR: char = '.';
pub const DECIMAL_SEPARATOR: char = ',';

// Leading numeric prefix: sign, digits, fraction, exponent.
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?").expect("static regex")
});

const MAX_EXPONENT: i64 = 60;

/// Parses the longest leading number in `s`, ignoring trailing garbage.
/// Returns `None` when no digits lead the text or the number overflows.
pub fn parse_leading_number(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let caps = NUMERIC_PREFIX.captures(s)?;
    let int_part = caps.get(2).map_or("", |m| m.as_str());
    let frac_part = caps.get(3).map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };
    let mut n: Decimal = literal.parse().ok()?;

    if let Some(exp) = caps.get(4) {
        let exp: i64 = exp.as_str().trim_start_matches('+').parse().ok()?;
        if exp > MAX_EXPONENT {
            return None;
        }
        if exp < -MAX_EXPONENT {
            return Some(Decimal::ZERO);
        }
        for _ in 0..exp.unsigned_abs() {
            n = if exp > 0 {
                n.checked_mul(Decimal::TEN)?
            } else {
                n.checked_div(Decimal::TEN)?
            };
        }
    }
    Some(n)
}

/// Strips the currency prefix and locale separators, leaving a plain
/// `1234.56` style literal.
pub fn strip_currency(raw: &str) -> String {
    let without_prefix = match raw.find("R$ ") {
        Some(pos) => format!("{}{}", &raw[..pos], &raw[pos + 3..]),
        None => raw.replacen(CURRENCY_PREFIX, "", 1),
    };
    let ungrouped: String = without_prefix
        .chars()
        .filter(|c| *c != GROUPING_SEPARATOR)
        .collect();
    ungrouped.replacen(DECIMAL_SEPARATOR, ".", 1)
}

/// Parses a per-installment value such as `R$ 1.234,56`. Unparsable text
/// yields zero.
pub fn parse_value(raw: &str) -> Decimal {
    parse_leading_number(&strip_currency(raw)).unwrap_or(Decimal::ZERO)
}

/// Parses an installment count. `None` marks text with no leading number.
pub fn parse_installments(raw: &str) -> Option<Decimal> {
    parse_leading_number(raw)
}

/// `value * installments`, or zero when installments are not computable.
pub fn derive_total(value: Decimal, installments: Option<Decimal>) -> Decimal {
    installments
        .and_then(|n| value.checked_mul(n))
        .unwrap_or(Decimal::ZERO)
}

/// Installment count usable for a saved debt: a positive whole number.
pub fn installment_count(raw: &str) -> DebtResult<u32> {
    parse_installments(raw)
        .filter(|n| n.is_sign_positive() && !n.is_zero() && n.fract().is_zero())
        .and_then(|n| n.to_u32())
        .ok_or_else(|| DebtError::InvalidInstallments(raw.trim().to_string()))
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

fn render(plain: &str) -> String {
    let (negative, body) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_PREFIX);
    out.push(' ');
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Display form with two decimals, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded);
    if rounded.is_zero() {
        return render(plain.trim_start_matches('-'));
    }
    render(&plain)
}

/// Input form that keeps every significant decimal so that
/// `parse_value(format_brl_input(v)) == v`.
pub fn format_brl_input(amount: Decimal) -> String {
    let n = amount.normalize();
    let plain = if n.scale() < 2 {
        format!("{:.2}", n)
    } else {
        n.to_string()
    };
    render(&plain)
}
