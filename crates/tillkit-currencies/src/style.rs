//! Locale display styles for currency amounts.
//!
//! A [`CurrencyStyle`] is the opaque presentation hook the engine consumes:
//! pure data (symbol, separators, digit count) plus a string-producing
//! `format`. Each built-in currency exposes an international style and a
//! local one: `¥1,000` versus `1,000円`.

use rust_decimal::Decimal;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Before the number (`$100`).
    Prefix,
    /// After the number (`100 kr`).
    Postfix,
}

/// A named fraction of the base unit (cent, fils, baisa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsidiaryUnit {
    /// Unit name.
    pub name: String,
    /// Unit symbol; `None` means the main symbol is used.
    pub symbol: Option<String>,
    /// Ratio to the base unit (0.01 for a cent).
    pub ratio: Decimal,
}

impl SubsidiaryUnit {
    /// Create a subsidiary unit.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: Option<&str>, ratio: Decimal) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.map(str::to_string),
            ratio,
        }
    }
}

/// Formatting options for one presentation of a currency.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tillkit_currencies::{CurrencyStyle, SymbolPlacement};
///
/// let yen = CurrencyStyle::new("¥", SymbolPlacement::Prefix, 0);
/// assert_eq!(yen.format(dec!(123456)), "¥123,456");
///
/// let krone = CurrencyStyle::new("kr", SymbolPlacement::Postfix, 2).with_space();
/// assert_eq!(krone.format(dec!(1234.5)), "1,234.50 kr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyStyle {
    symbol: String,
    placement: SymbolPlacement,
    decimal_digits: u32,
    group_separator: String,
    decimal_separator: String,
    space: bool,
    zero_replacement: Option<String>,
}

impl CurrencyStyle {
    /// Create a style with `,`/`.` separators, no space, no zero
    /// replacement.
    #[must_use]
    pub fn new(symbol: impl Into<String>, placement: SymbolPlacement, decimal_digits: u32) -> Self {
        Self {
            symbol: symbol.into(),
            placement,
            decimal_digits,
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            space: false,
            zero_replacement: None,
        }
    }

    /// Override the group and decimal separators.
    #[must_use]
    pub fn with_separators(
        mut self,
        group_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        self.group_separator = group_separator.into();
        self.decimal_separator = decimal_separator.into();
        self
    }

    /// Put a space between the number and the symbol.
    #[must_use]
    pub const fn with_space(mut self) -> Self {
        self.space = true;
        self
    }

    /// Replace an all-zero fraction.
    ///
    /// An empty replacement drops the fraction entirely (`123` instead of
    /// `123.00`); a non-empty one substitutes it (`123.--`, Swiss style).
    #[must_use]
    pub fn with_zero_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.zero_replacement = Some(replacement.into());
        self
    }

    /// The currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The symbol placement.
    #[must_use]
    pub const fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    /// Format an amount with grouping, fraction digits, and symbol.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let negative = amount.is_sign_negative();
        let mut value = amount.abs().round_dp(self.decimal_digits);
        value.rescale(self.decimal_digits);

        let text = value.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut number = group_thousands(int_part, &self.group_separator);
        match (frac_part, &self.zero_replacement) {
            (Some(frac), Some(replacement)) if frac.bytes().all(|b| b == b'0') => {
                if !replacement.is_empty() {
                    number.push_str(&self.decimal_separator);
                    number.push_str(replacement);
                }
            }
            (Some(frac), _) => {
                number.push_str(&self.decimal_separator);
                number.push_str(frac);
            }
            (None, _) => {}
        }

        let space = if self.space { " " } else { "" };
        let sign = if negative { "-" } else { "" };
        match self.placement {
            SymbolPlacement::Prefix => format!("{sign}{}{space}{number}", self.symbol),
            SymbolPlacement::Postfix => format!("{sign}{number}{space}{}", self.symbol),
        }
    }
}

/// Insert a separator every three digits from the right.
fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
