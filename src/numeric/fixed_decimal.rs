// ============================================================================
// Fixed-Point Decimal
// Valuation arithmetic with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 9.
///
/// # Value Range
/// With DECIMALS=9 (default):
/// - Minimum: -9,223,372,036.854775808
/// - Maximum: +9,223,372,036.854775807
/// - Precision: 0.000000001
///
/// # Example
/// ```
/// use stock_valuation::numeric::{FixedDecimal, RoundingMode};
///
/// let price: FixedDecimal<9> = "10.126".parse().unwrap();
/// let shares = FixedDecimal::<9>::from_integer(5).unwrap();
///
/// assert_eq!(price.checked_mul(shares).unwrap().to_string(), "50.630000000");
/// assert_eq!(
///     price.round_dp(2, RoundingMode::MidpointNearestEven).unwrap().to_string(),
///     "10.130000000"
/// );
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 9>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Divide with the given midpoint policy, rounding toward the sign of the
/// true quotient when the policy asks for it.
pub(super) fn divide_rounded(
    numerator: i128,
    divisor: i128,
    mode: RoundingMode,
) -> NumericResult<i128> {
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }

    let quotient = numerator / divisor;
    let remainder = (numerator % divisor).abs();

    if mode.rounds_up(remainder, divisor.abs(), quotient % 2 != 0) {
        let negative = (numerator < 0) != (divisor < 0);
        Ok(if negative { quotient - 1 } else { quotient + 1 })
    } else {
        Ok(quotient)
    }
}

impl<const D: u8> FixedDecimal<D> {
    /// Number of decimal places carried by this type
    pub const DECIMALS: u8 = D;

    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(pow10(D));

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// `fraction` is expressed in units of 10^-DECIMALS and must be below
    /// `SCALE`; it takes the sign of `integer`.
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        let fraction = i64::try_from(fraction).map_err(|_| NumericError::InvalidInput)?;
        if fraction >= Self::SCALE {
            return Err(NumericError::InvalidInput);
        }

        let whole = Self::from_integer(integer)?;
        let signed = if integer < 0 { -fraction } else { fraction };

        whole.checked_add(Self(signed))
    }

    /// Convert from `rust_decimal::Decimal` (API boundary).
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value carries more than DECIMALS significant places
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let target_scale = D as u32;
        if d.scale() > target_scale && d.round_dp(target_scale) != d {
            return Err(NumericError::PrecisionLoss);
        }

        let out_of_range = if d.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };

        d.checked_mul(Decimal::from(Self::SCALE))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(Self)
            .ok_or(out_of_range)
    }

    /// Convert to `rust_decimal::Decimal`, keeping all DECIMALS places.
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, D as u32)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (value × 10^DECIMALS).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(if rhs.0 > 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or(if rhs.0 < 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }

    /// Checked multiplication with round half away from zero.
    ///
    /// Uses an i128 intermediate, so only the final result can overflow.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = (self.0 as i128) * (rhs.0 as i128);
        let scaled = divide_rounded(
            product,
            Self::SCALE as i128,
            RoundingMode::MidpointAwayFromZero,
        )?;
        Self::narrow(scaled)
    }

    /// Checked division with round half away from zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, `Overflow`/`Underflow` if the
    /// quotient is out of range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        let numerator = (self.0 as i128) * (Self::SCALE as i128);
        let scaled = divide_rounded(
            numerator,
            rhs.0 as i128,
            RoundingMode::MidpointAwayFromZero,
        )?;
        Self::narrow(scaled)
    }

    /// Round to `decimals` places using `mode`.
    ///
    /// Values with `decimals >= DECIMALS` are returned unchanged.
    pub fn round_dp(self, decimals: u8, mode: RoundingMode) -> NumericResult<Self> {
        if decimals >= D {
            return Ok(self);
        }

        let unit = pow10(D - decimals) as i128;
        let units = divide_rounded(self.0 as i128, unit, mode)?;
        Self::narrow(units * unit)
    }

    fn narrow(value: i128) -> NumericResult<Self> {
        if value > i64::MAX as i128 {
            Err(NumericError::Overflow)
        } else if value < i64::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(value as i64))
        }
    }
}

// ============================================================================
// Display, Debug and Parsing
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_decimal(), f)
    }
}

impl<const D: u8> FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a plain decimal string such as `"10.126"` or `"-0.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(parsed)
    }
}

#[cfg(feature = "serde")]
impl<const D: u8> serde::Serialize for FixedDecimal<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_decimal(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8> serde::Deserialize<'de> for FixedDecimal<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let value: Decimal = serde::Deserialize::deserialize(deserializer)?;
        Self::from_decimal(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Unit price with 9 decimal places
pub type Price = FixedDecimal<9>;

/// Quantity held with 9 decimal places
pub type Shares = FixedDecimal<9>;

// ============================================================================
// Tests
// ============================================================================
