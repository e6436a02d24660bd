//! Greedy change breakdown and the two-pass change report.
//!
//! The engine expresses an amount as denomination counts, largest face
//! first. It runs in two modes: constrained by the till's current stock, or
//! against unlimited stock of every face (the "ideal" breakdown). The
//! two-pass report combines both: what the till can pay now, and what it
//! would take to cover the rest.
//!
//! The breakdown is purely greedy and does not backtrack: it is not
//! guaranteed to find a feasible exact combination even when one exists via
//! a different mix of faces. That is an accepted property of the algorithm,
//! not a defect.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::CashInventory;

/// Stock assumption for a breakdown pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPolicy {
    /// Limit each face to the inventory's current count.
    Constrained,
    /// Assume unlimited stock of every face.
    Unlimited,
}

/// Immutable result of a two-pass change calculation.
///
/// Conservation holds by construction:
/// `payable_change.total_amount() + remaining_amount == amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCalculation {
    /// The portion of the amount the till can dispense right now.
    pub payable_change: CashInventory,
    /// The portion no combination of stocked faces could cover.
    pub remaining_amount: Decimal,
    /// Ideal breakdown of the remaining amount with unlimited stock: the
    /// denominations the till is missing to complete the payment.
    pub missing_change: CashInventory,
}

impl ChangeCalculation {
    /// Whether the full amount is payable (`remaining_amount == 0`).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}

impl CashInventory {
    /// Greedy breakdown of `amount` over the catalog's descending face list.
    ///
    /// Walks faces largest-first (bills before coins on equal value); for
    /// each face takes `min(floor(remaining / value), available)` where
    /// `available` is the live count under [`StockPolicy::Constrained`] and
    /// unbounded under [`StockPolicy::Unlimited`]. A non-positive amount
    /// yields an empty result. The live inventory is never mutated; the
    /// result is a fresh inventory over the same catalog.
    #[must_use]
    pub fn breakdown(&self, amount: Decimal, policy: StockPolicy) -> Self {
        let mut result = Self::new(Arc::clone(self.catalog()));
        let mut remaining = amount;
        if remaining <= Decimal::ZERO {
            return result;
        }

        for &slot in self.catalog().descending_slots() {
            let value = self.catalog().faces()[slot].value();
            let needed = (remaining / value).trunc().to_i64().unwrap_or(i64::MAX);
            if needed <= 0 {
                continue;
            }
            let available = match policy {
                StockPolicy::Constrained => self.count_at(slot),
                StockPolicy::Unlimited => needed,
            };
            let takable = needed.min(available);
            if takable > 0 {
                result.set_count_at(slot, takable);
                remaining -= value * Decimal::from(takable);
            }
        }
        result
    }

    /// Two-pass change report for `amount`.
    ///
    /// Pass 1 breaks the amount down against live stock; pass 2 breaks the
    /// uncovered remainder down with unlimited stock, naming the missing
    /// denominations. Neither pass mutates the till; committing a dispense
    /// is an explicit [`subtract`](Self::subtract) of the payable change.
    #[must_use]
    pub fn calculate_change_detail(&self, amount: Decimal) -> ChangeCalculation {
        let payable = self.breakdown(amount, StockPolicy::Constrained);
        let remaining = amount - payable.total_amount();
        let missing = self.breakdown(remaining, StockPolicy::Unlimited);
        ChangeCalculation {
            payable_change: payable,
            remaining_amount: remaining,
            missing_change: missing,
        }
    }

    /// The payable portion only; see
    /// [`calculate_change_detail`](Self::calculate_change_detail).
    #[must_use]
    pub fn calculate_change(&self, amount: Decimal) -> Self {
        self.calculate_change_detail(amount).payable_change
    }

    /// Whether the till can pay `amount` exactly from current stock.
    #[must_use]
    pub fn is_payable(&self, amount: Decimal) -> bool {
        self.calculate_change_detail(amount).is_success()
    }
}
