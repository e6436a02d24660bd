//! Core types for tillkit
//!
//! This crate provides the fundamental types of the tillkit denomination
//! engine:
//!
//! - [`Face`] - One denomination: a value and a physical kind
//! - [`CashKind`] - Coin or bill
//! - [`Catalog`] - A currency's ordered face lists, minimum unit, and derived
//!   lookup index
//! - [`CashInventory`] - Counted stock of each face held by a till
//! - [`StockPolicy`] - Constrained vs. unlimited breakdown mode
//! - [`ChangeCalculation`] - The two-pass payable/remaining/missing report
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//! use tillkit_core::{Catalog, CashInventory, Face};
//!
//! let catalog = Arc::new(Catalog::new(
//!     "JPY",
//!     dec!(1),
//!     vec![Face::coin(dec!(100), "100 yen coin"), Face::coin(dec!(500), "500 yen coin")],
//!     vec![Face::bill(dec!(1000), "1000 yen bill")],
//! ));
//!
//! // Stock the till and ask for change.
//! let mut till = CashInventory::new(catalog);
//! till.set_count(dec!(500), 5);
//!
//! let result = till.calculate_change_detail(dec!(1000));
//! assert!(result.is_success());
//! assert_eq!(result.payable_change.count(dec!(500)), 2);
//!
//! // Committing the dispense is explicit.
//! till.subtract(&result.payable_change).unwrap();
//! assert_eq!(till.count(dec!(500)), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod change;
pub mod face;
pub mod inventory;

pub use catalog::Catalog;
pub use change::{ChangeCalculation, StockPolicy};
pub use face::{CashKind, Face};
pub use inventory::{CashInventory, InsufficientInventory, SetCountError};

// Re-export commonly used external types
pub use rust_decimal::{Decimal, RoundingStrategy};
