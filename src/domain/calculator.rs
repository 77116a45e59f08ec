// ============================================================================
// Valuation Calculator
// Price and shares held, with worth derived on every read
// ============================================================================

use super::config::{PriceRounding, ValuationConfig};
use super::quoted_price::QuotedPrice;
use super::snapshot::ValuationSnapshot;
use crate::numeric::{FixedDecimal, NumericError, NumericResult, Price, Shares, Worth};

/// Holds a unit price and a share count; `worth = price * shares`.
///
/// Worth is never stored, so it always reflects the current fields. Every
/// mutator validates before writing: a failed call leaves the calculator
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValuationCalculator {
    price: QuotedPrice,
    shares: Shares,
}

fn ensure_non_negative<const D: u8>(value: FixedDecimal<D>) -> NumericResult<()> {
    if value.is_negative() {
        Err(NumericError::NegativeValue)
    } else {
        Ok(())
    }
}

impl ValuationCalculator {
    /// Create a calculator that stores prices with full precision.
    ///
    /// # Errors
    /// Returns `NegativeValue` if either argument is negative.
    pub fn new(price: Price, shares: Shares) -> NumericResult<Self> {
        Self::with_config(price, shares, &ValuationConfig::unrounded())
    }

    /// Create a calculator from the config's initial values and rounding policy.
    pub fn from_config(config: &ValuationConfig) -> NumericResult<Self> {
        Self::with_config(config.initial_price, config.initial_shares, config)
    }

    /// Create a calculator with explicit values under the config's rounding policy.
    ///
    /// # Errors
    /// - `InvalidInput` if the config fails validation
    /// - `NegativeValue` if either value is negative
    pub fn with_config(
        price: Price,
        shares: Shares,
        config: &ValuationConfig,
    ) -> NumericResult<Self> {
        if let Err(reason) = config.validate() {
            tracing::warn!(%reason, "rejected valuation config");
            return Err(NumericError::InvalidInput);
        }

        let mut calculator = Self {
            price: QuotedPrice::new(config.price_rounding),
            shares: Shares::ZERO,
        };
        calculator.set_price(price)?;
        calculator.set_shares(shares)?;
        Ok(calculator)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn price(&self) -> Price {
        self.price.value()
    }

    #[inline]
    pub fn shares(&self) -> Shares {
        self.shares
    }

    /// The rounding policy applied by [`set_price`](Self::set_price), if any.
    #[inline]
    pub fn price_rounding(&self) -> Option<PriceRounding> {
        self.price.rounding()
    }

    /// Derived worth, `price * shares`. Never fails: `Worth` is wide enough
    /// for any product of a price and a share count.
    #[inline]
    pub fn worth(&self) -> Worth {
        Worth::product(self.price(), self.shares)
    }

    /// Capture price, shares and worth as an immutable snapshot.
    pub fn snapshot(&self) -> ValuationSnapshot {
        ValuationSnapshot::new(self.price(), self.shares)
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Store a new price, rounded per the configured policy.
    pub fn set_price(&mut self, price: Price) -> NumericResult<()> {
        ensure_non_negative(price)?;
        self.price.set(price)?;
        Ok(())
    }

    pub fn set_shares(&mut self, shares: Shares) -> NumericResult<()> {
        ensure_non_negative(shares)?;
        self.shares = shares;
        Ok(())
    }

    /// Solve for shares so that `worth() == target` (up to rounding).
    ///
    /// # Errors
    /// - `DivisionByZero` if the current price is zero, whatever the target
    /// - `NegativeValue` if `target` is negative
    /// - `Overflow` if the resulting share count is out of range
    pub fn set_worth(&mut self, target: Worth) -> NumericResult<()> {
        let price = self.price();
        if price.is_zero() {
            tracing::debug!(%target, "cannot solve for shares at zero price");
            return Err(NumericError::DivisionByZero);
        }

        if target.is_negative() {
            return Err(NumericError::NegativeValue);
        }

        let shares = target.checked_div(price)?;
        tracing::debug!(%target, %price, %shares, "shares solved from worth");
        self.shares = shares;
        Ok(())
    }
}
