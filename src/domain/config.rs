// ============================================================================
// Valuation Configuration
// Price rounding policy and initial values for new calculators
// ============================================================================

use crate::numeric::{NumericResult, Price, RoundingMode, Shares};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Price Rounding Policy
// ============================================================================

/// Rounding applied to a price before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceRounding {
    /// Number of decimal places kept (at most `Price::DECIMALS`)
    pub decimals: u8,

    /// Midpoint handling
    pub mode: RoundingMode,
}

impl PriceRounding {
    pub fn new(decimals: u8, mode: RoundingMode) -> Self {
        Self { decimals, mode }
    }

    /// Two decimal places with banker's rounding
    pub fn cents() -> Self {
        Self::new(2, RoundingMode::MidpointNearestEven)
    }

    /// Round `price` according to this policy
    pub fn apply(&self, price: Price) -> NumericResult<Price> {
        price.round_dp(self.decimals, self.mode)
    }
}

// ============================================================================
// Complete Valuation Configuration
// ============================================================================

/// Configuration for creating a [`ValuationCalculator`](super::ValuationCalculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValuationConfig {
    /// Optional: rounding applied on every price write.
    /// None means prices are stored with full precision
    pub price_rounding: Option<PriceRounding>,

    /// Price a calculator starts with when built from this config
    pub initial_price: Price,

    /// Shares a calculator starts with when built from this config
    pub initial_shares: Shares,
}

impl ValuationConfig {
    /// Create a configuration with no rounding and zero initial values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set price rounding policy
    pub fn with_price_rounding(mut self, rounding: PriceRounding) -> Self {
        self.price_rounding = Some(rounding);
        self
    }

    /// Builder method: Set initial price
    pub fn with_initial_price(mut self, price: Price) -> Self {
        self.initial_price = price;
        self
    }

    /// Builder method: Set initial shares
    pub fn with_initial_shares(mut self, shares: Shares) -> Self {
        self.initial_shares = shares;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rounding) = self.price_rounding {
            if rounding.decimals > Price::DECIMALS {
                return Err(format!(
                    "Price rounding cannot keep more than {} decimal places",
                    Price::DECIMALS
                ));
            }
        }

        if self.initial_price.is_negative() {
            return Err("Initial price cannot be negative".to_string());
        }

        if self.initial_shares.is_negative() {
            return Err("Initial shares cannot be negative".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ValuationConfig {
    /// Full-precision prices, no rounding on write
    pub fn unrounded() -> Self {
        Self::new()
    }

    /// Prices rounded to cents with banker's rounding
    pub fn cents() -> Self {
        Self::new().with_price_rounding(PriceRounding::cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValuationConfig::default();
        assert_eq!(config.price_rounding, None);
        assert!(config.initial_price.is_zero());
        assert!(config.initial_shares.is_zero());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ValuationConfig::new()
            .with_price_rounding(PriceRounding::new(4, RoundingMode::TowardZero))
            .with_initial_price(Price::from_integer(123).unwrap())
            .with_initial_shares(Shares::from_integer(7).unwrap());

        assert_eq!(
            config.price_rounding,
            Some(PriceRounding::new(4, RoundingMode::TowardZero))
        );
        assert_eq!(config.initial_price, Price::from_integer(123).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let too_precise = ValuationConfig::new()
            .with_price_rounding(PriceRounding::new(10, RoundingMode::default()));
        assert!(too_precise.validate().is_err());

        let negative = ValuationConfig::new().with_initial_price(Price::from_integer(-1).unwrap());
        assert_eq!(
            negative.validate(),
            Err("Initial price cannot be negative".to_string())
        );

        let negative_shares =
            ValuationConfig::new().with_initial_shares(Shares::from_integer(-3).unwrap());
        assert!(negative_shares.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(ValuationConfig::unrounded().price_rounding, None);
        assert_eq!(
            ValuationConfig::cents().price_rounding,
            Some(PriceRounding::cents())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_round_trip() {
        let config = ValuationConfig::cents()
            .with_initial_price("123.456789".parse().unwrap())
            .with_initial_shares(Shares::from_integer(40).unwrap());

        let json = serde_json::to_string(&config).unwrap();
        let back: ValuationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.initial_price, "123.456789".parse().unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_rejects_excess_precision() {
        let json = r#"{"price_rounding":null,"initial_price":"1.0000000001","initial_shares":"0"}"#;
        let err = serde_json::from_str::<ValuationConfig>(json).unwrap_err();
        assert!(err.to_string().contains("precision loss"));
    }

    #[test]
    fn test_price_rounding_apply() {
        let price: Price = "10.126".parse().unwrap();
        assert_eq!(
            PriceRounding::cents().apply(price).unwrap(),
            "10.13".parse().unwrap()
        );
    }
}
