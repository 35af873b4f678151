//! Number and currency formatting for display.

use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locale {
    pub language_tag: String,
    pub grouping_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language_tag: "vi-VN".into(),
            grouping_separator: '.',
        }
    }
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        // English locales group with commas; everything else keeps the
        // vi-VN style dot separator.
        let grouping_separator = if tag.starts_with("en") { ',' } else { '.' };
        Self {
            language_tag: tag.into(),
            grouping_separator,
        }
    }
}

/// Keeps only ASCII digits from free-form user input.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Formats arbitrary user input as a grouped whole-unit amount.
///
/// Every non-digit character is discarded first; an input with no digits
/// renders as the empty string. Re-formatting an already formatted value
/// yields the same string.
pub fn format_currency(raw: &str, locale: &Locale) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }
    match digits.parse::<i64>() {
        Ok(value) => format_amount(value, locale),
        // Longer than i64: trim leading zeros and group the digit string
        // as-is.
        Err(_) => {
            let trimmed = digits.trim_start_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                group_digits(trimmed, locale.grouping_separator)
            }
        }
    }
}

/// Renders a whole-unit amount with grouping separators, no decimals.
pub fn format_amount(value: i64, locale: &Locale) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits, locale.grouping_separator);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_grouped_thousands() {
        let locale = Locale::default();
        assert_eq!(format_currency("1000000", &locale), "1.000.000");
        assert_eq!(format_currency("8000000", &locale), "8.000.000");
        assert_eq!(format_currency("999", &locale), "999");
    }

    #[test]
    fn strips_non_digits_before_parsing() {
        let locale = Locale::default();
        assert_eq!(format_currency("", &locale), "");
        assert_eq!(format_currency("abc", &locale), "");
        assert_eq!(format_currency("12a34", &locale), "1.234");
        assert_eq!(format_currency("$ 2,500", &locale), "2.500");
    }

    #[test]
    fn reformatting_is_idempotent() {
        let locale = Locale::default();
        let once = format_currency("1234567", &locale);
        assert_eq!(format_currency(&once, &locale), once);
    }

    #[test]
    fn english_locales_group_with_commas() {
        let locale = Locale::from_tag("en-US");
        assert_eq!(format_currency("1000000", &locale), "1,000,000");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        let locale = Locale::default();
        assert_eq!(format_amount(-1_500_000, &locale), "-1.500.000");
        assert_eq!(format_amount(0, &locale), "0");
    }

    #[test]
    fn oversized_digit_strings_still_render() {
        let locale = Locale::default();
        assert_eq!(
            format_currency("00099999999999999999999", &locale),
            "99.999.999.999.999.999.999"
        );
    }
}
