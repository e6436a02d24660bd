//! ISO 4217 currency codes for the built-in catalogs.
//!
//! Static reference data from the ISO Online Browsing Platform (OBP),
//! <https://www.iso.org/>. Only the currencies this crate ships tables for
//! are listed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 4217 code of a shipped currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum CurrencyCode {
    /// Australian dollar
    AUD,
    /// Bahraini dinar
    BHD,
    /// Canadian dollar
    CAD,
    /// Swiss franc
    CHF,
    /// Chinese yuan renminbi
    CNY,
    /// Euro
    EUR,
    /// Pound sterling
    GBP,
    /// Indian rupee
    INR,
    /// Jordanian dinar
    JOD,
    /// Japanese yen
    JPY,
    /// Kuwaiti dinar
    KWD,
    /// Norwegian krone
    NOK,
    /// New Zealand dollar
    NZD,
    /// Omani rial
    OMR,
    /// Singapore dollar
    SGD,
    /// United States dollar
    USD,
    /// CFA franc BEAC
    XAF,
    /// Eastern Caribbean dollar
    XCD,
    /// CFA franc BCEAO
    XOF,
    /// South African rand
    ZAR,
}

impl CurrencyCode {
    /// Every shipped code, alphabetical.
    pub const ALL: [Self; 20] = [
        Self::AUD,
        Self::BHD,
        Self::CAD,
        Self::CHF,
        Self::CNY,
        Self::EUR,
        Self::GBP,
        Self::INR,
        Self::JOD,
        Self::JPY,
        Self::KWD,
        Self::NOK,
        Self::NZD,
        Self::OMR,
        Self::SGD,
        Self::USD,
        Self::XAF,
        Self::XCD,
        Self::XOF,
        Self::ZAR,
    ];

    /// The three-letter alphabetic code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AUD => "AUD",
            Self::BHD => "BHD",
            Self::CAD => "CAD",
            Self::CHF => "CHF",
            Self::CNY => "CNY",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::INR => "INR",
            Self::JOD => "JOD",
            Self::JPY => "JPY",
            Self::KWD => "KWD",
            Self::NOK => "NOK",
            Self::NZD => "NZD",
            Self::OMR => "OMR",
            Self::SGD => "SGD",
            Self::USD => "USD",
            Self::XAF => "XAF",
            Self::XCD => "XCD",
            Self::XOF => "XOF",
            Self::ZAR => "ZAR",
        }
    }

    /// The ISO 4217 numeric code.
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::AUD => 36,
            Self::BHD => 48,
            Self::CAD => 124,
            Self::CHF => 756,
            Self::CNY => 156,
            Self::EUR => 978,
            Self::GBP => 826,
            Self::INR => 356,
            Self::JOD => 400,
            Self::JPY => 392,
            Self::KWD => 414,
            Self::NOK => 578,
            Self::NZD => 554,
            Self::OMR => 512,
            Self::SGD => 702,
            Self::USD => 840,
            Self::XAF => 950,
            Self::XCD => 951,
            Self::XOF => 952,
            Self::ZAR => 710,
        }
    }

    /// The ISO currency name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian dollar",
            Self::BHD => "Bahraini dinar",
            Self::CAD => "Canadian dollar",
            Self::CHF => "Swiss franc",
            Self::CNY => "Yuan renminbi",
            Self::EUR => "Euro",
            Self::GBP => "Pound sterling",
            Self::INR => "Indian rupee",
            Self::JOD => "Jordanian dinar",
            Self::JPY => "Yen",
            Self::KWD => "Kuwaiti dinar",
            Self::NOK => "Norwegian krone",
            Self::NZD => "New Zealand dollar",
            Self::OMR => "Rial Omani",
            Self::SGD => "Singapore dollar",
            Self::USD => "US dollar",
            Self::XAF => "CFA franc BEAC",
            Self::XCD => "East Caribbean dollar",
            Self::XOF => "CFA franc BCEAO",
            Self::ZAR => "Rand",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized currency code string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown or unsupported currency code `{0}`")]
pub struct UnknownCurrencyCode(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| UnknownCurrencyCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_round_trip() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.as_str().parse::<CurrencyCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("jpy".parse::<CurrencyCode>().unwrap(), CurrencyCode::JPY);
        assert_eq!(" chf ".parse::<CurrencyCode>().unwrap(), CurrencyCode::CHF);
        assert!("ZZZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_numeric_codes_are_distinct() {
        let mut numerics: Vec<u16> = CurrencyCode::ALL.iter().map(CurrencyCode::numeric).collect();
        numerics.sort_unstable();
        numerics.dedup();
        assert_eq!(numerics.len(), CurrencyCode::ALL.len());
    }

    #[test]
    fn test_known_numerics() {
        assert_eq!(CurrencyCode::JPY.numeric(), 392);
        assert_eq!(CurrencyCode::USD.numeric(), 840);
        assert_eq!(CurrencyCode::EUR.numeric(), 978);
    }
}
