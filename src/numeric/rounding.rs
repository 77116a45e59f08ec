// ============================================================================
// Rounding Modes
// Midpoint handling for fixed-point rounding
// ============================================================================

use rust_decimal::RoundingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a value is rounded when digits are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Banker's rounding: ties go to the even neighbour (10.125 -> 10.12)
    #[default]
    MidpointNearestEven,
    /// Ties go away from zero (10.125 -> 10.13)
    MidpointAwayFromZero,
    /// Drop the extra digits (10.129 -> 10.12)
    TowardZero,
}

impl RoundingMode {
    /// Decide whether a truncated quotient must move one step away from zero.
    ///
    /// `remainder` is the absolute value of the dropped part, `divisor` the
    /// unit of the last kept digit, and `quotient_is_odd` the parity of the
    /// truncated result.
    #[inline]
    pub(crate) fn rounds_up(self, remainder: i128, divisor: i128, quotient_is_odd: bool) -> bool {
        let twice = remainder * 2;
        match self {
            RoundingMode::MidpointNearestEven => {
                twice > divisor || (twice == divisor && quotient_is_odd)
            }
            RoundingMode::MidpointAwayFromZero => twice >= divisor,
            RoundingMode::TowardZero => false,
        }
    }
}

impl From<RoundingMode> for RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::MidpointNearestEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::MidpointAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::TowardZero => RoundingStrategy::ToZero,
        }
    }
}
