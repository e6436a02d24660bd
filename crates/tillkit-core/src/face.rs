//! Face type representing a single kind of physical cash.
//!
//! A [`Face`] is one denomination a currency issues: a face value paired with
//! a physical kind (coin or bill), plus optional display names. Identity is
//! the `(value, kind)` pair: a currency may issue both a 1-unit coin and a
//! 1-unit bill, and they are distinct faces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The physical kind of a cash face.
///
/// The derived ordering (`Coin < Bill`) is the tie-break priority used when a
/// bare face value must resolve to a single face: coins win. The greedy
/// change engine uses the opposite priority (see
/// [`Catalog`](crate::Catalog)): a drawer prefers to dispense a bill over a
/// coin of equal value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CashKind {
    /// A coin.
    Coin,
    /// A bill (banknote).
    Bill,
}

impl fmt::Display for CashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coin => write!(f, "coin"),
            Self::Bill => write!(f, "bill"),
        }
    }
}

/// A single denomination of a currency.
///
/// Equality and hashing consider only `(value, kind)`; the display names are
/// descriptive and do not participate in identity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tillkit_core::{CashKind, Face};
///
/// let quarter = Face::coin(dec!(0.25), "Quarter");
/// assert_eq!(quarter.value(), dec!(0.25));
/// assert_eq!(quarter.kind(), CashKind::Coin);
///
/// // Same value, different kind: distinct faces.
/// let coin = Face::coin(dec!(1), "Dollar Coin");
/// let bill = Face::bill(dec!(1), "One Dollar Bill");
/// assert_ne!(coin, bill);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    value: Decimal,
    kind: CashKind,
    name: Option<String>,
    local_name: Option<String>,
}

impl Face {
    /// Create a face without a display name.
    #[must_use]
    pub const fn new(value: Decimal, kind: CashKind) -> Self {
        Self {
            value,
            kind,
            name: None,
            local_name: None,
        }
    }

    /// Create a named coin face.
    #[must_use]
    pub fn coin(value: Decimal, name: impl Into<String>) -> Self {
        Self {
            value,
            kind: CashKind::Coin,
            name: Some(name.into()),
            local_name: None,
        }
    }

    /// Create a named bill face.
    #[must_use]
    pub fn bill(value: Decimal, name: impl Into<String>) -> Self {
        Self {
            value,
            kind: CashKind::Bill,
            name: Some(name.into()),
            local_name: None,
        }
    }

    /// Attach a local (regional) display name.
    #[must_use]
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    /// The face value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The physical kind.
    #[must_use]
    pub const fn kind(&self) -> CashKind {
        self.kind
    }

    /// The global display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The local display name, falling back to the global name.
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref().or(self.name.as_deref())
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}

impl Eq for Face {}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_identity_ignores_names() {
        let a = Face::coin(dec!(100), "100 yen coin");
        let b = Face::coin(dec!(100), "hundred");
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 3);
        assert_eq!(map.get(&b), Some(&3));
    }

    #[test]
    fn test_identity_distinguishes_kind() {
        let coin = Face::coin(dec!(1), "1 yuan coin");
        let bill = Face::bill(dec!(1), "1 yuan bill");
        assert_ne!(coin, bill);
    }

    #[test]
    fn test_equal_value_different_scale() {
        // 1 and 1.00 are the same decimal value, hence the same face.
        let a = Face::new(dec!(1), CashKind::Bill);
        let b = Face::new(dec!(1.00), CashKind::Bill);
        assert_eq!(a, b);
    }

    #[test]
    fn test_local_name_fallback() {
        let named = Face::coin(dec!(0.05), "5 ¢ Coin").with_local_name("5 Cent");
        assert_eq!(named.local_name(), Some("5 Cent"));

        let fallback = Face::coin(dec!(0.10), "10 ¢ Coin");
        assert_eq!(fallback.local_name(), Some("10 ¢ Coin"));

        let bare = Face::new(dec!(1), CashKind::Coin);
        assert_eq!(bare.local_name(), None);
    }

    #[test]
    fn test_kind_ordering_prefers_coin() {
        assert!(CashKind::Coin < CashKind::Bill);
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::coin(dec!(500), "500 yen").to_string(), "500 coin");
        assert_eq!(Face::bill(dec!(1000), "1000 yen").to_string(), "1000 bill");
    }
}
