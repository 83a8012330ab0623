//! Conversion between decimal amounts and integer minor units.

use crate::{error::AmountConversionError, model::Money};
use rust_decimal::{Decimal, prelude::ToPrimitive};

const MAX_CURRENCY_SCALE: u32 = 18;

/// Describes the minor unit of the currency a group settles in.
///
/// # Example
/// ```
/// use fairshare_domain::{CurrencyContext, Money};
/// use rust_decimal::Decimal;
///
/// let usd = CurrencyContext::default();
/// let amount = usd.to_minor_units(Decimal::new(13245, 2)).unwrap();
/// assert_eq!(amount, Money::from_i64(13245));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyContext {
    /// Decimal places of the minor unit (2 for cents, 0 for yen).
    pub scale: u32,
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

impl CurrencyContext {
    pub fn new(scale: u32) -> Result<Self, AmountConversionError> {
        validate_scale(scale)?;
        Ok(Self { scale })
    }

    pub fn to_minor_units(self, amount: Decimal) -> Result<Money, AmountConversionError> {
        let factor = scale_factor(self.scale)?;
        let units = amount
            .checked_mul(factor)
            .ok_or(AmountConversionError::OutOfRange)?;
        if !units.fract().is_zero() {
            return Err(AmountConversionError::NonIntegral);
        }
        units
            .to_i64()
            .map(Money::from_i64)
            .ok_or(AmountConversionError::OutOfRange)
    }

    pub fn to_decimal(self, amount: Money) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(amount.amount()), self.scale)
    }
}

fn validate_scale(scale: u32) -> Result<(), AmountConversionError> {
    if scale > MAX_CURRENCY_SCALE {
        return Err(AmountConversionError::UnsupportedScale {
            scale,
            max_supported: MAX_CURRENCY_SCALE,
        });
    }
    Ok(())
}

fn scale_factor(scale: u32) -> Result<Decimal, AmountConversionError> {
    validate_scale(scale)?;
    let factor = 10_i64
        .checked_pow(scale)
        .ok_or(AmountConversionError::OutOfRange)?;
    Ok(Decimal::from(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::cents(2, Decimal::new(13245, 2), 13245)]
    #[case::whole_units_with_cents(2, Decimal::from(450), 45000)]
    #[case::yen(0, Decimal::from(1200), 1200)]
    #[case::trailing_zero_fraction(0, Decimal::new(1200, 2), 12)]
    #[case::negative(2, Decimal::new(-599, 2), -599)]
    fn converts_to_minor_units(#[case] scale: u32, #[case] amount: Decimal, #[case] expected: i64) {
        let context = CurrencyContext::new(scale).expect("valid scale");
        assert_eq!(
            context.to_minor_units(amount),
            Ok(Money::from_i64(expected))
        );
    }

    #[rstest]
    #[case::too_precise_for_cents(2, Decimal::new(12345, 3))]
    #[case::fraction_for_yen(0, Decimal::new(15, 1))]
    fn rejects_non_integral_amounts(#[case] scale: u32, #[case] amount: Decimal) {
        let context = CurrencyContext::new(scale).expect("valid scale");
        assert_eq!(
            context.to_minor_units(amount),
            Err(AmountConversionError::NonIntegral)
        );
    }

    #[test]
    fn rejects_out_of_range_amounts() {
        let context = CurrencyContext::new(2).expect("valid scale");
        assert_eq!(
            context.to_minor_units(Decimal::from(i64::MAX)),
            Err(AmountConversionError::OutOfRange)
        );
    }

    #[test]
    fn rejects_unsupported_scale() {
        assert_eq!(
            CurrencyContext::new(19),
            Err(AmountConversionError::UnsupportedScale {
                scale: 19,
                max_supported: 18,
            })
        );
    }

    #[test]
    fn formats_minor_units_back_to_decimal() {
        let context = CurrencyContext::default();
        assert_eq!(
            context.to_decimal(Money::from_i64(-1500)).to_string(),
            "-15.00"
        );
    }
}
