//! Numeric rendering of face values in cash-count strings.

use rust_decimal::Decimal;

/// How face values are rendered when serializing an inventory.
///
/// The scale is taken from a currency's minimum unit: a 0.05-unit currency
/// renders two fraction digits, a 1-unit currency none. With `zero_padding`
/// the fraction is always written out (`0.50`); without it trailing zeros
/// are trimmed (`0.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormat {
    scale: u32,
    zero_padding: bool,
}

impl ValueFormat {
    /// Create a format with an explicit fraction-digit count.
    #[must_use]
    pub const fn new(scale: u32, zero_padding: bool) -> Self {
        Self {
            scale,
            zero_padding,
        }
    }

    /// Derive the format from a currency's minimum unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tillkit_codec::ValueFormat;
    ///
    /// let jpy = ValueFormat::for_minimum_unit(dec!(1), false);
    /// assert_eq!(jpy.format(dec!(500)), "500");
    ///
    /// let aud = ValueFormat::for_minimum_unit(dec!(0.05), false);
    /// assert_eq!(aud.format(dec!(0.50)), "0.5");
    ///
    /// let padded = ValueFormat::for_minimum_unit(dec!(0.05), true);
    /// assert_eq!(padded.format(dec!(0.5)), "0.50");
    /// ```
    #[must_use]
    pub fn for_minimum_unit(minimum_unit: Decimal, zero_padding: bool) -> Self {
        Self::new(minimum_unit.scale(), zero_padding)
    }

    /// Render a value.
    #[must_use]
    pub fn format(&self, value: Decimal) -> String {
        if self.zero_padding {
            let mut v = value;
            v.rescale(self.scale);
            v.to_string()
        } else {
            value.round_dp(self.scale).normalize().to_string()
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::new(0, false)
    }
}
