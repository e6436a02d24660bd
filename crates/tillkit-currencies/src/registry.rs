//! Explicit currency-code → catalog registry.
//!
//! Catalogs are registered once at startup and handed out as shared
//! `Arc<Catalog>`s; every inventory of a currency reuses the same catalog
//! (and its derived lookup index). Custom catalogs (a test double, or a
//! till restricted by its hardware) can be registered alongside or instead
//! of the built-ins.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tillkit_codec::parse_device_cash_list;
use tillkit_core::{CashInventory, CashKind, Catalog};

use crate::currency::catalog_for;
use crate::CurrencyCode;

/// Error raised when a currency has no registered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("currency {0} is not registered")]
pub struct UnknownCurrency(pub CurrencyCode);

/// Non-fatal finding while reconciling a device's denomination list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceWarning {
    /// The device advertises a coin the catalog does not define.
    #[error("device coin {value} is not a {code} denomination")]
    UnsupportedCoin {
        /// Advertised coin value.
        value: Decimal,
        /// Currency being reconciled.
        code: CurrencyCode,
    },
    /// The device advertises a bill the catalog does not define.
    #[error("device bill {value} is not a {code} denomination")]
    UnsupportedBill {
        /// Advertised bill value.
        value: Decimal,
        /// Currency being reconciled.
        code: CurrencyCode,
    },
}

/// Registry of catalogs keyed by ISO 4217 code.
///
/// # Examples
///
/// ```
/// use tillkit_currencies::{CurrencyCode, CurrencyRegistry};
///
/// let registry = CurrencyRegistry::with_defaults();
/// let jpy = registry.get(CurrencyCode::JPY).unwrap();
/// assert_eq!(jpy.faces().len(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    catalogs: HashMap<CurrencyCode, Arc<Catalog>>,
}

impl CurrencyRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with every built-in catalog.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for code in CurrencyCode::ALL {
            registry.register(code, catalog_for(code));
        }
        registry
    }

    /// Register (or replace) the catalog for a code.
    pub fn register(&mut self, code: CurrencyCode, catalog: Catalog) {
        self.catalogs.insert(code, Arc::new(catalog));
    }

    /// The registered catalog for a code.
    #[must_use]
    pub fn get(&self, code: CurrencyCode) -> Option<&Arc<Catalog>> {
        self.catalogs.get(&code)
    }

    /// Registered codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.catalogs.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// A fresh zero-count inventory for a currency.
    pub fn inventory(&self, code: CurrencyCode) -> Result<CashInventory, UnknownCurrency> {
        let catalog = self.get(code).ok_or(UnknownCurrency(code))?;
        Ok(CashInventory::new(Arc::clone(catalog)))
    }

    /// A fresh inventory for a cash-handling device, reconciling the
    /// device's advertised denomination list (`"1,5,10;1000,5000"`) against
    /// the catalog.
    ///
    /// Denominations the catalog does not define produce warnings, never
    /// errors: the device simply cannot stock faces the currency lacks.
    pub fn inventory_for_device(
        &self,
        code: CurrencyCode,
        cash_list: &str,
    ) -> Result<(CashInventory, Vec<DeviceWarning>), UnknownCurrency> {
        let catalog = self.get(code).ok_or(UnknownCurrency(code))?;
        let (coins, bills) = parse_device_cash_list(cash_list);

        let mut warnings = Vec::new();
        for value in coins {
            if catalog.face_of(value, CashKind::Coin).is_none() {
                warnings.push(DeviceWarning::UnsupportedCoin { value, code });
            }
        }
        for value in bills {
            if catalog.face_of(value, CashKind::Bill).is_none() {
                warnings.push(DeviceWarning::UnsupportedBill { value, code });
            }
        }

        Ok((CashInventory::new(Arc::clone(catalog)), warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tillkit_core::Face;

    #[test]
    fn test_defaults_cover_all_codes() {
        let registry = CurrencyRegistry::with_defaults();
        assert_eq!(registry.codes(), CurrencyCode::ALL.to_vec());
        for code in CurrencyCode::ALL {
            assert!(registry.get(code).is_some(), "{code} missing");
        }
    }

    #[test]
    fn test_catalogs_are_shared() {
        let registry = CurrencyRegistry::with_defaults();
        let a = registry.inventory(CurrencyCode::JPY).unwrap();
        let b = registry.inventory(CurrencyCode::JPY).unwrap();
        assert!(Arc::ptr_eq(a.catalog(), b.catalog()));
    }

    #[test]
    fn test_empty_registry_reports_unknown() {
        let registry = CurrencyRegistry::new();
        let err = registry.inventory(CurrencyCode::JPY).unwrap_err();
        assert_eq!(err, UnknownCurrency(CurrencyCode::JPY));
    }

    #[test]
    fn test_custom_catalog_replaces_builtin() {
        let mut registry = CurrencyRegistry::with_defaults();
        registry.register(
            CurrencyCode::JPY,
            Catalog::new("JPY", dec!(1), vec![Face::coin(dec!(100), "100 yen")], vec![]),
        );
        let catalog = registry.get(CurrencyCode::JPY).unwrap();
        assert_eq!(catalog.faces().len(), 1);
    }

    #[test]
    fn test_device_reconciliation_clean() {
        let registry = CurrencyRegistry::with_defaults();
        let (inventory, warnings) = registry
            .inventory_for_device(CurrencyCode::JPY, "1,5,10,50,100,500;1000,2000,5000,10000")
            .unwrap();
        assert!(warnings.is_empty());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_device_reconciliation_warns_on_unsupported() {
        let registry = CurrencyRegistry::with_defaults();
        let (_, warnings) = registry
            .inventory_for_device(CurrencyCode::JPY, "1,5,25;1000,3000")
            .unwrap();
        assert_eq!(
            warnings,
            vec![
                DeviceWarning::UnsupportedCoin {
                    value: dec!(25),
                    code: CurrencyCode::JPY,
                },
                DeviceWarning::UnsupportedBill {
                    value: dec!(3000),
                    code: CurrencyCode::JPY,
                },
            ]
        );
    }

    #[test]
    fn test_device_list_kind_mismatch_warns() {
        // 1000 is a bill; advertised as a coin it is unsupported.
        let registry = CurrencyRegistry::with_defaults();
        let (_, warnings) = registry
            .inventory_for_device(CurrencyCode::JPY, "1000;")
            .unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
