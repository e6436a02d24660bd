//! Advisory validation of cash-count strings.
//!
//! Validation mirrors the parser's tokenization but mutates nothing and
//! never fails: every oddity the parser would silently skip (and the
//! negative counts it would accept) becomes a warning the caller can show.

use rust_decimal::Decimal;
use thiserror::Error;
use tillkit_core::{CashKind, Catalog};

use crate::parse::{entries, sections, split_entry};

/// A non-fatal finding about one entry of a cash-count string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// The entry did not split into exactly `value:count`.
    #[error("malformed entry `{entry}`: expected `value:count`")]
    MalformedEntry {
        /// The offending entry text.
        entry: String,
    },
    /// The value part is not a numeric literal.
    #[error("unparsable face value `{value}` in entry `{entry}`")]
    InvalidValue {
        /// The offending entry text.
        entry: String,
        /// The value part as written.
        value: String,
    },
    /// The count part is not an integer literal.
    #[error("unparsable count `{count}` in entry `{entry}`")]
    InvalidCount {
        /// The offending entry text.
        entry: String,
        /// The count part as written.
        count: String,
    },
    /// No face with this value exists under the section's kind.
    #[error("{value} is not a known {kind} face value")]
    UnknownFace {
        /// The parsed value with no matching face.
        value: Decimal,
        /// The kind implied by the section the entry appeared in.
        kind: CashKind,
    },
    /// The count is negative.
    #[error("negative count {count} for face value {value}")]
    NegativeCount {
        /// The face value the count applies to.
        value: Decimal,
        /// The negative count.
        count: i64,
    },
}

/// Collect warnings for a cash-count string without parsing it into an
/// inventory.
///
/// Warnings are advisory: the parser accepts the same input regardless (it
/// skips what it cannot read), so an empty result means a clean string, not
/// that parsing would otherwise fail.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tillkit_codec::{validate_cash_counts, ParseWarning};
/// use tillkit_core::{Catalog, Face};
///
/// let catalog = Catalog::new(
///     "JPY",
///     dec!(1),
///     vec![Face::coin(dec!(100), "100 yen coin")],
///     vec![Face::bill(dec!(1000), "1000 yen bill")],
/// );
///
/// let warnings = validate_cash_counts(&catalog, "100:2,abc:1");
/// assert_eq!(warnings.len(), 1);
/// assert!(matches!(warnings[0], ParseWarning::InvalidValue { .. }));
/// ```
#[must_use]
pub fn validate_cash_counts(catalog: &Catalog, text: &str) -> Vec<ParseWarning> {
    let mut warnings = Vec::new();
    for (kind, section) in sections(text) {
        for entry in entries(section) {
            let Some((value_text, count_text)) = split_entry(entry) else {
                warnings.push(ParseWarning::MalformedEntry {
                    entry: entry.to_string(),
                });
                continue;
            };
            let Ok(value) = value_text.parse::<Decimal>() else {
                warnings.push(ParseWarning::InvalidValue {
                    entry: entry.to_string(),
                    value: value_text.to_string(),
                });
                continue;
            };
            let Ok(count) = count_text.parse::<i64>() else {
                warnings.push(ParseWarning::InvalidCount {
                    entry: entry.to_string(),
                    count: count_text.to_string(),
                });
                continue;
            };
            if catalog.face_of(value, kind).is_none() {
                warnings.push(ParseWarning::UnknownFace { value, kind });
                continue;
            }
            if count < 0 {
                warnings.push(ParseWarning::NegativeCount { value, count });
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tillkit_core::Face;

    fn jpy() -> Catalog {
        Catalog::new(
            "JPY",
            dec!(1),
            vec![
                Face::coin(dec!(100), "100 yen"),
                Face::coin(dec!(500), "500 yen"),
            ],
            vec![Face::bill(dec!(1000), "1000 yen")],
        )
    }

    #[test]
    fn test_clean_string_has_no_warnings() {
        let warnings = validate_cash_counts(&jpy(), "100:2,500:1;1000:3");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_string_has_no_warnings() {
        assert!(validate_cash_counts(&jpy(), "").is_empty());
        assert!(validate_cash_counts(&jpy(), ";").is_empty());
    }

    #[test]
    fn test_each_warning_class() {
        let catalog = jpy();

        assert!(matches!(
            validate_cash_counts(&catalog, "100")[..],
            [ParseWarning::MalformedEntry { .. }]
        ));
        assert!(matches!(
            validate_cash_counts(&catalog, "abc:1")[..],
            [ParseWarning::InvalidValue { .. }]
        ));
        assert!(matches!(
            validate_cash_counts(&catalog, "100:xyz")[..],
            [ParseWarning::InvalidCount { .. }]
        ));
        assert!(matches!(
            validate_cash_counts(&catalog, "9999:1")[..],
            [ParseWarning::UnknownFace { .. }]
        ));
        assert!(matches!(
            validate_cash_counts(&catalog, "100:-2")[..],
            [ParseWarning::NegativeCount { .. }]
        ));
    }

    #[test]
    fn test_section_kind_flows_into_unknown_face() {
        // 1000 is a bill; in the coin section it is unknown.
        let warnings = validate_cash_counts(&jpy(), "1000:1");
        assert_eq!(
            warnings,
            vec![ParseWarning::UnknownFace {
                value: dec!(1000),
                kind: CashKind::Coin,
            }]
        );
    }

    #[test]
    fn test_warnings_accumulate_in_order() {
        let warnings = validate_cash_counts(&jpy(), "100:1,bad,abc:2;1000:-1");
        assert_eq!(warnings.len(), 3);
        assert!(matches!(warnings[0], ParseWarning::MalformedEntry { .. }));
        assert!(matches!(warnings[1], ParseWarning::InvalidValue { .. }));
        assert!(matches!(warnings[2], ParseWarning::NegativeCount { .. }));
    }

    #[test]
    fn test_messages_are_human_readable() {
        let catalog = jpy();
        let warnings = validate_cash_counts(&catalog, "9999:1");
        assert_eq!(warnings[0].to_string(), "9999 is not a known coin face value");
    }
}
