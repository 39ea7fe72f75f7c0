//! Number formatting for dashboard figures.

use crate::locale::Locale;

/// Group the digits of `value` in threes with the locale's separator.
pub fn format_count(value: u64, locale: &Locale) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(locale.thousands_separator);
        }
        out.push(ch);
    }
    out
}

/// Currency amount with two decimals, e.g. `-$1,234.50`.
pub fn format_amount(amount: f64, locale: &Locale) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}{}{:02}",
        sign,
        locale.currency_symbol,
        format_count(cents / 100, locale),
        locale.decimal_separator,
        cents % 100
    )
}

/// Share of `part` in `whole` as a whole percentage; `None` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some(((part as f64 / whole as f64) * 100.0).round() as u32)
}
