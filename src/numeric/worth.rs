// ============================================================================
// Worth
// Wide fixed-point amount for price × shares
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::{divide_rounded, Price, Shares};
use super::rounding::RoundingMode;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Valuation amount with 9 decimal places, stored as `value × 10^9` in an i128.
///
/// Any product of two i64-backed `FixedDecimal<9>` values fits, so computing
/// worth from a price and a share count cannot fail.
///
/// # Example
/// ```
/// use stock_valuation::numeric::{Price, Shares, Worth};
///
/// let worth = Worth::product(
///     Price::from_integer(1_000).unwrap(),
///     Shares::from_integer(10_000_000).unwrap(),
/// );
/// assert_eq!(worth, Worth::from_integer(10_000_000_000));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Worth(i128);

impl Worth {
    pub const DECIMALS: u8 = 9;

    /// The scale factor (10^9)
    pub const SCALE: i128 = 1_000_000_000;

    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self(value as i128 * Self::SCALE)
    }

    /// `price * shares`, rounded half away from zero to 9 places.
    #[inline]
    pub fn product(price: Price, shares: Shares) -> Self {
        let product = price.raw_value() as i128 * shares.raw_value() as i128;
        let quotient = product / Self::SCALE;
        let remainder = (product % Self::SCALE).abs();

        if remainder * 2 >= Self::SCALE {
            Self(quotient + product.signum())
        } else {
            Self(quotient)
        }
    }

    /// Solve `self = price * shares` for shares, rounded half away from zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `price` is zero
    /// - `Overflow`/`Underflow` if the share count does not fit `Shares`
    pub fn checked_div(self, price: Price) -> NumericResult<Shares> {
        let numerator = self
            .0
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;
        let shares = divide_rounded(
            numerator,
            price.raw_value() as i128,
            RoundingMode::MidpointAwayFromZero,
        )?;

        i64::try_from(shares)
            .map(Shares::from_raw)
            .map_err(|_| {
                if shares > 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }
            })
    }

    #[inline]
    pub const fn raw_value(self) -> i128 {
        self.0
    }

    /// Integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i128 {
        self.0 / Self::SCALE
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` beyond the 96-bit `Decimal` mantissa.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        Decimal::try_from_i128_with_scale(self.0, Self::DECIMALS as u32)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if more than 9 significant places are present.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let d = d.normalize();
        let scale = d.scale();
        if scale > Self::DECIMALS as u32 {
            return Err(NumericError::PrecisionLoss);
        }

        // mantissa < 2^96, so scaling by at most 10^9 stays inside i128
        let factor = 10i128.pow(Self::DECIMALS as u32 - scale);
        Ok(Self(d.mantissa() * factor))
    }
}

impl From<Price> for Worth {
    /// Widen a 9-place fixed-point value without loss.
    fn from(value: Price) -> Self {
        Self(value.raw_value() as i128)
    }
}

impl fmt::Debug for Worth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worth({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Worth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = (self.0 % Self::SCALE).unsigned_abs();

        if self.0 < 0 && int_part == 0 {
            write!(f, "-0.{:09}", frac_part)
        } else {
            write!(f, "{}.{:09}", int_part, frac_part)
        }
    }
}

impl FromStr for Worth {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(parsed)
    }
}

// Serialized as a string: the full range exceeds what JSON numbers carry.
#[cfg(feature = "serde")]
impl serde::Serialize for Worth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Worth {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let text: String = serde::Deserialize::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
