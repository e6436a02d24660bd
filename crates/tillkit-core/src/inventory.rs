//! Cash inventory: counted stock of each face held by a till.
//!
//! A [`CashInventory`] maps every face of its catalog to a signed count. It
//! supports indexed access by bare value (auto-detect) or by exact
//! `(value, kind)`, amount totals, and add/subtract reconciliation between
//! inventories.
//!
//! Unknown keys follow a silent-ignore contract: reads return 0 and writes
//! are no-ops. Counts may go negative through direct writes or parsing
//! (refund and adjustment bookkeeping relies on it), while the validating
//! setters reject negatives.

use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::{CashKind, Catalog, Face};

/// Error raised when a subtraction would overdraw a face.
///
/// Carries the face identity and the required-vs-available counts so the
/// caller can abort a dispense transaction with a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "insufficient inventory for {value} ({kind}): required {required}, available {available}"
)]
pub struct InsufficientInventory {
    /// Face value of the overdrawn denomination.
    pub value: Decimal,
    /// Physical kind of the overdrawn denomination.
    pub kind: CashKind,
    /// Count the subtraction required.
    pub required: i64,
    /// Count actually in stock.
    pub available: i64,
}

/// Error returned by the validating count setters.
///
/// These setters are meant for interactive input flows, so the error is a
/// message-carrying value rather than a panic; the non-validating setters
/// keep the silent-ignore contract instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetCountError {
    /// The value is not a denomination of the currency, under either kind.
    #[error("{value} is not a valid {code} denomination")]
    UnknownFace {
        /// The rejected face value.
        value: Decimal,
        /// The currency code of the catalog consulted.
        code: String,
    },
    /// No face with this value exists under the requested kind.
    #[error("no {value} {kind} exists for {code}")]
    UnknownFaceOf {
        /// The rejected face value.
        value: Decimal,
        /// The requested kind.
        kind: CashKind,
        /// The currency code of the catalog consulted.
        code: String,
    },
    /// The count is negative; physical quantities cannot be.
    #[error("count {count} is negative; counts represent physical quantities")]
    NegativeCount {
        /// The rejected count.
        count: i64,
    },
}

/// The counted cash stock of a till, per face of one catalog.
///
/// Created with a zero count for every known face. The catalog is shared
/// read-only; the inventory itself has no internal synchronization and
/// assumes a single owner (one inventory per till, mutations funneled
/// through one dispatch point).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use std::sync::Arc;
/// use tillkit_core::{Catalog, CashInventory, CashKind, Face};
///
/// let catalog = Arc::new(Catalog::new(
///     "JPY",
///     dec!(1),
///     vec![Face::coin(dec!(100), "100 yen coin"), Face::coin(dec!(500), "500 yen coin")],
///     vec![Face::bill(dec!(1000), "1000 yen bill")],
/// ));
///
/// let mut till = CashInventory::new(Arc::clone(&catalog));
/// till.set_count(dec!(500), 5);
/// till.set_count_of(dec!(1000), CashKind::Bill, 2);
///
/// assert_eq!(till.total_amount(), dec!(4500));
/// assert_eq!(till.coin_amount(), dec!(2500));
/// assert_eq!(till.bill_amount(), dec!(2000));
///
/// // Unknown values read as 0 and writes are no-ops.
/// till.set_count(dec!(9999), 7);
/// assert_eq!(till.count(dec!(9999)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashInventory {
    catalog: Arc<Catalog>,
    counts: Vec<i64>,
}

impl CashInventory {
    /// Create an inventory with a zero count for every face of the catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let counts = vec![0; catalog.faces().len()];
        Self { catalog, counts }
    }

    /// The catalog this inventory counts against.
    #[must_use]
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Count for a bare value, resolved via auto-detect (coin wins over a
    /// bill of equal value). Unknown values read as 0.
    #[must_use]
    pub fn count(&self, value: Decimal) -> i64 {
        self.catalog
            .slot(value)
            .map_or(0, |slot| self.counts[slot])
    }

    /// Set the count for a bare value (auto-detect). Unknown values are
    /// silently ignored.
    pub fn set_count(&mut self, value: Decimal, count: i64) {
        if let Some(slot) = self.catalog.slot(value) {
            self.counts[slot] = count;
        }
    }

    /// Count for an exact `(value, kind)` pair. Unknown faces read as 0.
    #[must_use]
    pub fn count_of(&self, value: Decimal, kind: CashKind) -> i64 {
        self.catalog
            .slot_of(value, kind)
            .map_or(0, |slot| self.counts[slot])
    }

    /// Set the count for an exact `(value, kind)` pair. Unknown faces are
    /// silently ignored.
    pub fn set_count_of(&mut self, value: Decimal, kind: CashKind, count: i64) {
        if let Some(slot) = self.catalog.slot_of(value, kind) {
            self.counts[slot] = count;
        }
    }

    /// Iterate `(face, count)` over every face in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&Face, i64)> {
        self.catalog
            .faces()
            .iter()
            .zip(self.counts.iter().copied())
    }

    /// Iterate `(face, count)` over faces with a non-zero count.
    pub fn non_zero_entries(&self) -> impl Iterator<Item = (&Face, i64)> {
        self.entries().filter(|&(_, n)| n != 0)
    }

    /// Whether every count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Sum of `face value x count` over all faces.
    ///
    /// Tolerates negative counts; a till mid-adjustment can report a
    /// negative total.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.amount_of(|_| true)
    }

    /// Sum of `face value x count` over coin faces.
    #[must_use]
    pub fn coin_amount(&self) -> Decimal {
        self.amount_of(|kind| kind == CashKind::Coin)
    }

    /// Sum of `face value x count` over bill faces.
    #[must_use]
    pub fn bill_amount(&self) -> Decimal {
        self.amount_of(|kind| kind == CashKind::Bill)
    }

    fn amount_of(&self, pred: impl Fn(CashKind) -> bool) -> Decimal {
        self.entries()
            .filter(|(face, _)| pred(face.kind()))
            .map(|(face, n)| face.value() * Decimal::from(n))
            .sum()
    }

    /// Add every non-zero entry of `other` into this inventory.
    ///
    /// Entries are matched by `(value, kind)`; faces unknown to this
    /// catalog are silently ignored, like any other unknown-key write.
    pub fn add(&mut self, other: &Self) {
        for (face, n) in other.non_zero_entries() {
            if let Some(slot) = self.catalog.slot_of(face.value(), face.kind()) {
                self.counts[slot] += n;
            }
        }
    }

    /// Subtract every non-zero entry of `other` from this inventory.
    ///
    /// Validates all entries before applying any, so a failed subtraction
    /// leaves the inventory untouched. Fails if any face's stock is below
    /// the required count, checked per face rather than on the aggregate total.
    pub fn subtract(&mut self, other: &Self) -> Result<(), InsufficientInventory> {
        for (face, required) in other.non_zero_entries() {
            if let Some(slot) = self.catalog.slot_of(face.value(), face.kind()) {
                let available = self.counts[slot];
                if available < required {
                    return Err(InsufficientInventory {
                        value: face.value(),
                        kind: face.kind(),
                        required,
                        available,
                    });
                }
            }
        }
        for (face, n) in other.non_zero_entries() {
            if let Some(slot) = self.catalog.slot_of(face.value(), face.kind()) {
                self.counts[slot] -= n;
            }
        }
        Ok(())
    }

    /// Whether the value is a denomination of this currency, under either
    /// kind.
    #[must_use]
    pub fn is_valid_face_value(&self, value: Decimal) -> bool {
        self.catalog.is_valid_face_value(value)
    }

    /// Whether the count is valid as a physical quantity (non-negative).
    ///
    /// Deliberately stricter than the plain setters and the parser, which
    /// accept negative counts for refund and adjustment bookkeeping.
    #[must_use]
    pub fn is_valid_count(&self, count: i64) -> bool {
        count >= 0
    }

    /// Validating variant of [`set_count`](Self::set_count): rejects unknown
    /// values and negative counts instead of ignoring them.
    pub fn try_set_count(&mut self, value: Decimal, count: i64) -> Result<(), SetCountError> {
        if !self.is_valid_count(count) {
            return Err(SetCountError::NegativeCount { count });
        }
        let Some(slot) = self.catalog.slot(value) else {
            return Err(SetCountError::UnknownFace {
                value,
                code: self.catalog.code().to_string(),
            });
        };
        self.counts[slot] = count;
        Ok(())
    }

    /// Validating variant of [`set_count_of`](Self::set_count_of).
    pub fn try_set_count_of(
        &mut self,
        value: Decimal,
        kind: CashKind,
        count: i64,
    ) -> Result<(), SetCountError> {
        if !self.is_valid_count(count) {
            return Err(SetCountError::NegativeCount { count });
        }
        let Some(slot) = self.catalog.slot_of(value, kind) else {
            return Err(SetCountError::UnknownFaceOf {
                value,
                kind,
                code: self.catalog.code().to_string(),
            });
        };
        self.counts[slot] = count;
        Ok(())
    }

    pub(crate) fn count_at(&self, slot: usize) -> i64 {
        self.counts[slot]
    }

    pub(crate) fn set_count_at(&mut self, slot: usize, count: i64) {
        self.counts[slot] = count;
    }
}

impl fmt::Display for CashInventory {
    /// Renders non-zero entries as `value x count` pairs, catalog order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (face, n) in self.non_zero_entries() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{} x{n}", face.value())?;
            first = false;
        }
        if first {
            write!(f, "(empty)")?;
        }
        Ok(())
    }
}
