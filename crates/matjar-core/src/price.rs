//! Price parsing and Kuwaiti-dinar display.
//!
//! Feed prices are free text typed by hand: `"10"`, `"10 KWD"`,
//! `"12.500 د.ك"`, `"١٥٫٥ دينار"`. The first number wins; currency words are
//! ignored.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// ISO 4217 code appended to every displayed price.
pub const CURRENCY_CODE: &str = "KWD";

/// Minor units per dinar are 1000, so prices carry three decimals.
const KWD_SCALE: u32 = 3;

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid amount regex"));

/// Extracts the first numeric amount from a free-text price.
///
/// Arabic-Indic digits and the Arabic decimal separator are accepted; `,`
/// and the Arabic thousands separator are treated as grouping and removed.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let ascii: String = raw
        .chars()
        .filter_map(|ch| match ch {
            '\u{0660}'..='\u{0669}' => char::from_digit(u32::from(ch) - 0x0660, 10),
            '\u{06F0}'..='\u{06F9}' => char::from_digit(u32::from(ch) - 0x06F0, 10),
            '\u{066B}' => Some('.'),
            ',' | '\u{066C}' => None,
            other => Some(other),
        })
        .collect();

    let amount = AMOUNT_RE.find(&ascii)?;
    Decimal::from_str(amount.as_str()).ok()
}

/// Formats an amount as `"<amount> KWD"` with three decimals.
#[must_use]
pub fn format_kwd(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(KWD_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(KWD_SCALE);
    format!("{rounded} {CURRENCY_CODE}")
}

/// Parses and reformats a raw price, or returns `None` when it has no amount.
#[must_use]
pub fn display_price(raw: &str) -> Option<String> {
    parse_price(raw).map(format_kwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_price("10"), Some(Decimal::new(10, 0)));
    }

    #[test]
    fn parses_amount_with_currency_suffix() {
        assert_eq!(parse_price("10 KWD"), Some(Decimal::new(10, 0)));
        assert_eq!(parse_price("12.500 د.ك"), Some(Decimal::new(12_500, 3)));
    }

    #[test]
    fn parses_arabic_indic_digits_and_separator() {
        assert_eq!(parse_price("١٥٫٥ دينار"), Some(Decimal::new(155, 1)));
        assert_eq!(parse_price("۷"), Some(Decimal::new(7, 0)));
    }

    #[test]
    fn strips_grouping_separators() {
        assert_eq!(parse_price("1,250.5"), Some(Decimal::new(12_505, 1)));
    }

    #[test]
    fn no_digits_is_none() {
        assert!(parse_price("").is_none());
        assert!(parse_price("اتصل بنا").is_none());
    }

    #[test]
    fn format_pads_to_three_decimals() {
        assert_eq!(format_kwd(Decimal::new(10, 0)), "10.000 KWD");
        assert_eq!(format_kwd(Decimal::new(75, 1)), "7.500 KWD");
    }

    #[test]
    fn format_rounds_extra_precision() {
        assert_eq!(format_kwd(Decimal::new(123_456, 4)), "12.346 KWD");
    }

    #[test]
    fn format_rounds_half_fils_away_from_zero() {
        assert_eq!(format_kwd(Decimal::new(10_005, 4)), "1.001 KWD");
        assert_eq!(format_kwd(Decimal::new(20_025, 4)), "2.003 KWD");
    }

    #[test]
    fn display_price_roundtrips_free_text() {
        assert_eq!(display_price("5 KWD").as_deref(), Some("5.000 KWD"));
        assert!(display_price("free").is_none());
    }
}
