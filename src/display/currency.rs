//! Currency formatting and amount parsing
//!
//! Formats amounts the way the user's locale writes money (`Rp1.500.000`)
//! and reads amounts typed either plainly (`1500000`, `12.5`) or in that
//! same grouped form.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::error::{BuduError, BuduResult};

/// Format an amount with the configured symbol, grouping and precision
///
/// Negative amounts get a leading `"- "`, e.g. `- Rp25.000`.
pub fn format_currency(amount: Decimal, settings: &Settings) -> String {
    let digits = settings.fraction_digits;
    let rounded = amount.round_dp(digits);
    let negative = rounded < Decimal::ZERO;

    let plain = format!("{:.*}", digits as usize, rounded.abs());
    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut formatted = settings.currency_symbol.clone();
    formatted.push_str(&group_digits(whole, &settings.thousands_separator));
    if let Some(fraction) = fraction {
        formatted.push_str(&settings.decimal_separator);
        formatted.push_str(fraction);
    }

    if negative {
        format!("- {}", formatted)
    } else {
        formatted
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse an amount typed by the user
///
/// Accepts `25000`, `12.5`, and grouped locale input such as `25.000`,
/// `Rp1.500.000` or `1.500,50`. The sign is kept; positivity is checked by
/// the ledger.
pub fn parse_amount(input: &str, settings: &Settings) -> BuduResult<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest
        .strip_prefix(settings.currency_symbol.as_str())
        .unwrap_or(rest)
        .trim();

    let thousands = settings.thousands_separator.as_str();
    let decimal = settings.decimal_separator.as_str();

    let (whole, fraction) = match rest.rsplit_once(decimal) {
        Some((whole, fraction)) if !decimal.is_empty() => (whole, Some(fraction)),
        _ => (rest, None),
    };

    let mut normalized = if !thousands.is_empty() && is_grouped(whole, thousands) {
        whole.replace(thousands, "")
    } else {
        whole.to_string()
    };
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    let value = Decimal::from_str(&normalized).map_err(|_| BuduError::Parse(input.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// `1.500.000` is grouped; `1.5` and `12.50` are not
fn is_grouped(text: &str, separator: &str) -> bool {
    let mut groups = text.split(separator);
    let Some(head) = groups.next() else {
        return false;
    };
    let mut tail = groups.peekable();
    if tail.peek().is_none() {
        return false;
    }

    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    all_digits(head) && head.len() <= 3 && tail.all(|g| g.len() == 3 && all_digits(g))
}
