//! Built-in denomination tables, one module per currency.
//!
//! Every module exposes `catalog()` plus an international `style()` and a
//! regional `local_style()`; currencies with a named fractional accounting
//! unit also expose `subsidiary_units()`.

pub mod aud;
pub mod bhd;
pub mod cad;
pub mod chf;
pub mod cny;
pub mod eur;
pub mod gbp;
pub mod inr;
pub mod jod;
pub mod jpy;
pub mod kwd;
pub mod nok;
pub mod nzd;
pub mod omr;
pub mod sgd;
pub mod usd;
pub mod xaf;
pub mod xcd;
pub mod xof;
pub mod zar;

use tillkit_core::Catalog;

use crate::{CurrencyCode, CurrencyStyle};

/// The built-in catalog for a code.
#[must_use]
pub fn catalog_for(code: CurrencyCode) -> Catalog {
    match code {
        CurrencyCode::AUD => aud::catalog(),
        CurrencyCode::BHD => bhd::catalog(),
        CurrencyCode::CAD => cad::catalog(),
        CurrencyCode::CHF => chf::catalog(),
        CurrencyCode::CNY => cny::catalog(),
        CurrencyCode::EUR => eur::catalog(),
        CurrencyCode::GBP => gbp::catalog(),
        CurrencyCode::INR => inr::catalog(),
        CurrencyCode::JOD => jod::catalog(),
        CurrencyCode::JPY => jpy::catalog(),
        CurrencyCode::KWD => kwd::catalog(),
        CurrencyCode::NOK => nok::catalog(),
        CurrencyCode::NZD => nzd::catalog(),
        CurrencyCode::OMR => omr::catalog(),
        CurrencyCode::SGD => sgd::catalog(),
        CurrencyCode::USD => usd::catalog(),
        CurrencyCode::XAF => xaf::catalog(),
        CurrencyCode::XCD => xcd::catalog(),
        CurrencyCode::XOF => xof::catalog(),
        CurrencyCode::ZAR => zar::catalog(),
    }
}

/// The international display style for a code.
#[must_use]
pub fn style_for(code: CurrencyCode) -> CurrencyStyle {
    match code {
        CurrencyCode::AUD => aud::style(),
        CurrencyCode::BHD => bhd::style(),
        CurrencyCode::CAD => cad::style(),
        CurrencyCode::CHF => chf::style(),
        CurrencyCode::CNY => cny::style(),
        CurrencyCode::EUR => eur::style(),
        CurrencyCode::GBP => gbp::style(),
        CurrencyCode::INR => inr::style(),
        CurrencyCode::JOD => jod::style(),
        CurrencyCode::JPY => jpy::style(),
        CurrencyCode::KWD => kwd::style(),
        CurrencyCode::NOK => nok::style(),
        CurrencyCode::NZD => nzd::style(),
        CurrencyCode::OMR => omr::style(),
        CurrencyCode::SGD => sgd::style(),
        CurrencyCode::USD => usd::style(),
        CurrencyCode::XAF => xaf::style(),
        CurrencyCode::XCD => xcd::style(),
        CurrencyCode::XOF => xof::style(),
        CurrencyCode::ZAR => zar::style(),
    }
}

/// The regional display style for a code.
#[must_use]
pub fn local_style_for(code: CurrencyCode) -> CurrencyStyle {
    match code {
        CurrencyCode::AUD => aud::local_style(),
        CurrencyCode::BHD => bhd::local_style(),
        CurrencyCode::CAD => cad::local_style(),
        CurrencyCode::CHF => chf::local_style(),
        CurrencyCode::CNY => cny::local_style(),
        CurrencyCode::EUR => eur::local_style(),
        CurrencyCode::GBP => gbp::local_style(),
        CurrencyCode::INR => inr::local_style(),
        CurrencyCode::JOD => jod::local_style(),
        CurrencyCode::JPY => jpy::local_style(),
        CurrencyCode::KWD => kwd::local_style(),
        CurrencyCode::NOK => nok::local_style(),
        CurrencyCode::NZD => nzd::local_style(),
        CurrencyCode::OMR => omr::local_style(),
        CurrencyCode::SGD => sgd::local_style(),
        CurrencyCode::USD => usd::local_style(),
        CurrencyCode::XAF => xaf::local_style(),
        CurrencyCode::XCD => xcd::local_style(),
        CurrencyCode::XOF => xof::local_style(),
        CurrencyCode::ZAR => zar::local_style(),
    }
}
