//! Denomination catalog and its derived lookup index.
//!
//! A [`Catalog`] is the per-currency configuration the engine consumes: the
//! ordered coin and bill face lists plus the currency's minimum unit. The
//! lookup index is derived once at construction and is thereafter read-only,
//! so a catalog can be shared behind an [`Arc`](std::sync::Arc) across every
//! inventory of the same currency.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

use crate::{CashKind, Face};

/// Derived lookup structures over a catalog's face list.
///
/// Three views, built once:
/// - an exact `(value, kind)` map;
/// - an auto-detect `value` map resolving a bare value to one canonical face
///   (Coin before Bill, ties by catalog order);
/// - a descending search list for the greedy engine (value descending, ties
///   by kind descending: Bill before Coin, the opposite priority).
#[derive(Debug, Clone, PartialEq, Eq)]
struct FaceIndex {
    exact: HashMap<(Decimal, CashKind), usize>,
    auto: HashMap<Decimal, usize>,
    descending: Vec<usize>,
}

impl FaceIndex {
    fn build(faces: &[Face]) -> Self {
        let mut exact = HashMap::new();
        let mut auto = HashMap::new();

        for (slot, face) in faces.iter().enumerate() {
            exact.entry((face.value(), face.kind())).or_insert(slot);
        }
        // Coins first so that a value issued as both kinds resolves to the
        // coin; within a kind, catalog order wins.
        for kind in [CashKind::Coin, CashKind::Bill] {
            for (slot, face) in faces.iter().enumerate() {
                if face.kind() == kind {
                    auto.entry(face.value()).or_insert(slot);
                }
            }
        }

        let mut descending: Vec<usize> = (0..faces.len())
            .filter(|&i| faces[i].value() > Decimal::ZERO)
            .collect();
        descending.sort_by(|&a, &b| {
            faces[b]
                .value()
                .cmp(&faces[a].value())
                .then(faces[b].kind().cmp(&faces[a].kind()))
        });

        Self {
            exact,
            auto,
            descending,
        }
    }
}

/// The denomination table of one currency.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tillkit_core::{Catalog, CashKind, Face};
///
/// let jpy = Catalog::new(
///     "JPY",
///     dec!(1),
///     vec![Face::coin(dec!(100), "100 yen coin")],
///     vec![Face::bill(dec!(1000), "1000 yen bill")],
/// );
///
/// assert_eq!(jpy.face(dec!(100)).unwrap().kind(), CashKind::Coin);
/// assert!(jpy.face_of(dec!(100), CashKind::Bill).is_none());
/// assert!(jpy.is_valid_face_value(dec!(1000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    code: String,
    minimum_unit: Decimal,
    faces: Vec<Face>,
    index: FaceIndex,
}

impl Catalog {
    /// Build a catalog from ordered coin and bill face lists.
    ///
    /// The lists keep their order; it is the catalog order used for
    /// serialization and for tie-breaking equal-value lookups.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        minimum_unit: Decimal,
        coins: Vec<Face>,
        bills: Vec<Face>,
    ) -> Self {
        let mut faces = coins;
        faces.extend(bills);
        let index = FaceIndex::build(&faces);
        Self {
            code: code.into(),
            minimum_unit,
            faces,
            index,
        }
    }

    /// The currency code this catalog describes (e.g. "JPY").
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The smallest expressible increment of the currency.
    ///
    /// Used for display and validation; change-making uses the literal face
    /// set instead.
    #[must_use]
    pub const fn minimum_unit(&self) -> Decimal {
        self.minimum_unit
    }

    /// All faces, coins before bills, in catalog order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Coin faces in catalog order.
    pub fn coins(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(|f| f.kind() == CashKind::Coin)
    }

    /// Bill faces in catalog order.
    pub fn bills(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(|f| f.kind() == CashKind::Bill)
    }

    /// Resolve a bare value to its canonical face (auto-detect).
    ///
    /// When a value is issued as both a coin and a bill, the coin wins.
    #[must_use]
    pub fn face(&self, value: Decimal) -> Option<&Face> {
        self.index.auto.get(&value).map(|&slot| &self.faces[slot])
    }

    /// Resolve an exact `(value, kind)` pair.
    #[must_use]
    pub fn face_of(&self, value: Decimal, kind: CashKind) -> Option<&Face> {
        self.index
            .exact
            .get(&(value, kind))
            .map(|&slot| &self.faces[slot])
    }

    /// Whether the value exists in the catalog under either kind.
    #[must_use]
    pub fn is_valid_face_value(&self, value: Decimal) -> bool {
        self.index.auto.contains_key(&value)
    }

    /// Round an amount to the nearest multiple of the minimum unit using
    /// banker's rounding.
    #[must_use]
    pub fn round_to_minimum_unit(&self, amount: Decimal) -> Decimal {
        self.round_to_minimum_unit_with(amount, RoundingStrategy::MidpointNearestEven)
    }

    /// Round an amount to the nearest multiple of the minimum unit with an
    /// explicit strategy.
    #[must_use]
    pub fn round_to_minimum_unit_with(
        &self,
        amount: Decimal,
        strategy: RoundingStrategy,
    ) -> Decimal {
        if self.minimum_unit <= Decimal::ZERO {
            return amount;
        }
        (amount / self.minimum_unit).round_dp_with_strategy(0, strategy) * self.minimum_unit
    }

    /// Whether the amount is an exact multiple of the minimum unit.
    #[must_use]
    pub fn is_rounded_to_minimum_unit(&self, amount: Decimal) -> bool {
        if self.minimum_unit <= Decimal::ZERO {
            return true;
        }
        (amount % self.minimum_unit).is_zero()
    }

    pub(crate) fn slot(&self, value: Decimal) -> Option<usize> {
        self.index.auto.get(&value).copied()
    }

    pub(crate) fn slot_of(&self, value: Decimal, kind: CashKind) -> Option<usize> {
        self.index.exact.get(&(value, kind)).copied()
    }

    pub(crate) fn descending_slots(&self) -> &[usize] {
        &self.index.descending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dual_catalog() -> Catalog {
        // A 1-unit coin and a 1-unit bill, like CNY.
        Catalog::new(
            "TST",
            dec!(0.1),
            vec![
                Face::coin(dec!(0.5), "half"),
                Face::coin(dec!(1), "one coin"),
            ],
            vec![
                Face::bill(dec!(1), "one bill"),
                Face::bill(dec!(5), "five bill"),
            ],
        )
    }

    #[test]
    fn test_auto_detect_prefers_coin() {
        let catalog = dual_catalog();
        let face = catalog.face(dec!(1)).unwrap();
        assert_eq!(face.kind(), CashKind::Coin);
    }

    #[test]
    fn test_auto_detect_prefers_coin_regardless_of_declaration_order() {
        // Even with the lists swapped so the bill face precedes the coin
        // face in catalog order, the coin must still win.
        let catalog = Catalog::new(
            "TST",
            dec!(1),
            vec![Face::bill(dec!(1), "one bill")],
            vec![Face::coin(dec!(1), "one coin")],
        );
        assert_eq!(catalog.face(dec!(1)).unwrap().kind(), CashKind::Coin);
    }

    #[test]
    fn test_exact_lookup() {
        let catalog = dual_catalog();
        assert_eq!(
            catalog.face_of(dec!(1), CashKind::Bill).unwrap().name(),
            Some("one bill")
        );
        assert!(catalog.face_of(dec!(5), CashKind::Coin).is_none());
        assert!(catalog.face_of(dec!(2), CashKind::Bill).is_none());
    }

    #[test]
    fn test_descending_prefers_bill_on_ties() {
        let catalog = dual_catalog();
        let order: Vec<(Decimal, CashKind)> = catalog
            .descending_slots()
            .iter()
            .map(|&slot| {
                let f = &catalog.faces()[slot];
                (f.value(), f.kind())
            })
            .collect();
        assert_eq!(
            order,
            vec![
                (dec!(5), CashKind::Bill),
                (dec!(1), CashKind::Bill),
                (dec!(1), CashKind::Coin),
                (dec!(0.5), CashKind::Coin),
            ]
        );
    }

    #[test]
    fn test_value_scale_does_not_matter() {
        let catalog = dual_catalog();
        assert!(catalog.is_valid_face_value(dec!(1.0)));
        assert!(catalog.face_of(dec!(1.00), CashKind::Bill).is_some());
    }

    #[test]
    fn test_round_to_minimum_unit() {
        let catalog = Catalog::new(
            "AUD",
            dec!(0.05),
            vec![Face::coin(dec!(0.05), "5c")],
            vec![],
        );
        assert_eq!(catalog.round_to_minimum_unit(dec!(99.99)), dec!(100.00));
        assert_eq!(catalog.round_to_minimum_unit(dec!(0.07)), dec!(0.05));
        // Banker's rounding on the midpoint: 0.125 / 0.05 = 2.5 -> 2.
        assert_eq!(catalog.round_to_minimum_unit(dec!(0.125)), dec!(0.10));
        assert_eq!(
            catalog.round_to_minimum_unit_with(
                dec!(0.125),
                RoundingStrategy::MidpointAwayFromZero
            ),
            dec!(0.15)
        );
    }

    #[test]
    fn test_is_rounded_to_minimum_unit() {
        let catalog = Catalog::new(
            "AUD",
            dec!(0.05),
            vec![Face::coin(dec!(0.05), "5c")],
            vec![],
        );
        assert!(catalog.is_rounded_to_minimum_unit(dec!(100.00)));
        assert!(catalog.is_rounded_to_minimum_unit(dec!(0.15)));
        assert!(!catalog.is_rounded_to_minimum_unit(dec!(100.03)));
    }

    #[test]
    fn test_zero_value_faces_excluded_from_greedy_list() {
        let catalog = Catalog::new(
            "TST",
            dec!(1),
            vec![Face::coin(Decimal::ZERO, "token"), Face::coin(dec!(1), "one")],
            vec![],
        );
        assert_eq!(catalog.descending_slots().len(), 1);
    }
}
