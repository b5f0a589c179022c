//! Display formatting for product prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$12.00`
    Prefix,
    /// `12,00 €`
    Suffix,
}

/// Symbol placement and separators for one currency, following the
/// currency's conventional locale (en-US, de-DE, en-GB, tr-TR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyStyle {
    const USD: Self = Self {
        symbol: "$",
        position: SymbolPosition::Prefix,
        group_separator: ',',
        decimal_separator: '.',
    };
    const EUR: Self = Self {
        symbol: "€",
        position: SymbolPosition::Suffix,
        group_separator: '.',
        decimal_separator: ',',
    };
    const GBP: Self = Self {
        symbol: "£",
        position: SymbolPosition::Prefix,
        group_separator: ',',
        decimal_separator: '.',
    };
    const TRY: Self = Self {
        symbol: "₺",
        position: SymbolPosition::Suffix,
        group_separator: '.',
        decimal_separator: ',',
    };

    /// Looks up the style for an ISO-like currency code (case-insensitive).
    ///
    /// Unknown and empty codes use the Turkish lira style.
    #[must_use]
    pub fn for_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Self::USD,
            "EUR" => Self::EUR,
            "GBP" => Self::GBP,
            _ => Self::TRY,
        }
    }
}

/// Formats `amount` with two fixed decimals in the style of `currency`.
///
/// ```
/// use prodcanon_core::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::new(123_456, 2), "USD"), "$1,234.56");
/// assert_eq!(format_price(Decimal::new(123_456, 2), "EUR"), "1.234,56 €");
/// ```
#[must_use]
pub fn format_price(amount: Decimal, currency: &str) -> String {
    let style = CurrencyStyle::for_code(currency);

    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let number = format!(
        "{}{}{}",
        group_thousands(int_part, style.group_separator),
        style.decimal_separator,
        frac_part
    );
    let sign = if negative { "-" } else { "" };

    match style.position {
        SymbolPosition::Prefix => format!("{sign}{}{number}", style.symbol),
        SymbolPosition::Suffix => format!("{sign}{number} {}", style.symbol),
    }
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
