//! Monetary constants and report formatting.
//!
//! Every monetary value and percentage in the crate is a
//! `rust_decimal::Decimal`; floats are never used for money. The bounds
//! below are the account policy and hold for the whole lifetime of every
//! account.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ceiling on any account balance.
pub const MAX_BALANCE: Decimal = dec!(50000000.00);

/// Floor for the overdraft limit: the most negative limit an account may
/// be opened with.
pub const MAX_OVERDRAFT: Decimal = dec!(-2000.00);

/// Default overdraft limit when none is given: no overdraft at all.
pub const DEFAULT_OVERDRAFT: Decimal = dec!(0.00);

/// Baseline an account's deposits are measured from.
pub const DEFAULT_BALANCE: Decimal = dec!(0.00);

/// Lowest garnishment rate, in percent. A rate of 0 means "not garnished".
pub const MIN_GARNISH_RATE: Decimal = dec!(0.0);

/// Highest garnishment rate, in percent.
pub const MAX_GARNISH_RATE: Decimal = dec!(100.0);

/// Earliest acceptable creation year.
pub const MIN_YEAR: i32 = 1900;

pub(crate) const HUNDRED: Decimal = dec!(100);

/// Returns `true` if `limit` is a well-formed overdraft limit, i.e. lies
/// in `[MAX_OVERDRAFT, 0]`.
pub fn overdraft_limit_in_range(limit: Decimal) -> bool {
    limit >= MAX_OVERDRAFT && limit <= Decimal::ZERO
}

/// Formats a balance for the report line: two decimal places, thousands
/// grouped with a space, right-aligned to width 14.
pub fn format_report_balance(balance: Decimal) -> String {
    let raw = format!("{:.2}", balance.round_dp(2));
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{:>14}", format!("{sign}{grouped}.{frac_part}"))
}

/// Formats a garnishment rate for the report line: one decimal place,
/// right-aligned to width 5.
pub fn format_report_rate(rate: Decimal) -> String {
    format!("{:>5}", format!("{:.1}", rate.round_dp(1)))
}
