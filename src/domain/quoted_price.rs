// ============================================================================
// Quoted Price
// Publicly readable price whose mutator is restricted to this crate
// ============================================================================

use super::config::PriceRounding;
use crate::numeric::{NumericResult, Price};

/// Backing field for a calculator's price.
///
/// Anyone can read the value, but only code inside this crate can write it,
/// and every write goes through the rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuotedPrice {
    value: Price,
    rounding: Option<PriceRounding>,
}

impl QuotedPrice {
    pub fn new(rounding: Option<PriceRounding>) -> Self {
        Self {
            value: Price::ZERO,
            rounding,
        }
    }

    #[inline]
    pub fn value(&self) -> Price {
        self.value
    }

    #[inline]
    pub fn rounding(&self) -> Option<PriceRounding> {
        self.rounding
    }

    /// Round `value` per policy and store it. Returns what was stored.
    pub(crate) fn set(&mut self, value: Price) -> NumericResult<Price> {
        let stored = match self.rounding {
            Some(policy) => policy.apply(value)?,
            None => value,
        };

        if stored != value {
            tracing::debug!(requested = %value, stored = %stored, "price rounded on write");
        }

        self.value = stored;
        Ok(stored)
    }
}
