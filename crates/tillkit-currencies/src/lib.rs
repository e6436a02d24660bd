//! Built-in currency data for tillkit.
//!
//! This crate supplies the configuration the core engine consumes:
//!
//! - [`currency`] - per-currency denomination tables (twenty currencies,
//!   from JPY's integral yen to BHD's three-decimal fils)
//! - [`CurrencyCode`] - the ISO 4217 codes of the shipped tables
//! - [`CurrencyStyle`] - locale display formatting (symbol, separators,
//!   placement)
//! - [`CurrencyRegistry`] - an explicit code → catalog map built at startup
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tillkit_currencies::{currency, CurrencyCode, CurrencyRegistry};
//!
//! let registry = CurrencyRegistry::with_defaults();
//! let mut till = registry.inventory(CurrencyCode::JPY).unwrap();
//! till.set_count(dec!(500), 5);
//! assert!(till.is_payable(dec!(1000)));
//!
//! let style = currency::local_style_for(CurrencyCode::JPY);
//! assert_eq!(style.format(till.total_amount()), "2,500円");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codes;
pub mod currency;
mod registry;
mod style;

pub use codes::{CurrencyCode, UnknownCurrencyCode};
pub use currency::{catalog_for, local_style_for, style_for};
pub use registry::{CurrencyRegistry, DeviceWarning, UnknownCurrency};
pub use style::{CurrencyStyle, SubsidiaryUnit, SymbolPlacement};
