//! Cash drawer CLI tools.
//!
//! This crate provides the `till` command for working with denomination
//! inventories:
//!
//! - `till change`: compute a change breakdown against a till's stock
//! - `till total`: total/coin/bill amounts of a cash-count string
//! - `till check`: advisory validation of a cash-count string
//! - `till currencies`: list the built-in currency catalogs
//!
//! # Example Usage
//!
//! ```bash
//! till change -c JPY --stock "500:5;" 1000
//! till total -c JPY "500:1,100:2;1000:3"
//! till check -c JPY "abc:1,100:2" --strict
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
