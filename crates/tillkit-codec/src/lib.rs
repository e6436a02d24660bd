//! Cash-count string codec for tillkit.
//!
//! The cash-count string is the compact text form a counted-cash inventory
//! is persisted and exchanged in:
//!
//! ```text
//! <coin-entries>;<bill-entries>        e.g.  1:0,5:2,10:0,500:4;1000:3,5000:0
//! ```
//!
//! Each section is a comma-separated list of `value:count` entries. Sections
//! are positional: the first is resolved against the currency's coin faces,
//! the second against its bill faces.
//!
//! - [`write_cash_counts`] emits the fixed-shape form: every face the
//!   currency defines, coins then bills, in catalog order.
//! - [`parse_cash_counts`] is fault-tolerant: malformed or unknown entries
//!   are skipped, never fatal.
//! - [`validate_cash_counts`] reports those skipped entries (and accepted
//!   negative counts) as advisory [`ParseWarning`]s.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//! use tillkit_codec::{parse_cash_counts, write_cash_counts};
//! use tillkit_core::{Catalog, Face};
//!
//! let catalog = Arc::new(Catalog::new(
//!     "JPY",
//!     dec!(1),
//!     vec![Face::coin(dec!(500), "500 yen coin")],
//!     vec![Face::bill(dec!(1000), "1000 yen bill")],
//! ));
//!
//! let till = parse_cash_counts(&catalog, "500:4;1000:3");
//! assert_eq!(till.total_amount(), dec!(5000));
//! assert_eq!(write_cash_counts(&till), "500:4;1000:3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parse;
mod validate;
mod value_format;
mod write;

pub use parse::{parse_cash_counts, parse_device_cash_list};
pub use validate::{validate_cash_counts, ParseWarning};
pub use value_format::ValueFormat;
pub use write::{write_cash_counts, write_cash_counts_with};
