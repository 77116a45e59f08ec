// ============================================================================
// Stock Valuation Library
// Fixed-point price/shares valuation with derived worth
// ============================================================================

//! # Stock Valuation
//!
//! Values a holding as `worth = price * shares` using fixed-point decimals.
//!
//! ## Features
//!
//! - **Derived worth**: never stored, recomputed from price and shares on read
//! - **Inverse assignment**: set a target worth and solve for shares
//! - **Rounding on write**: optional per-calculator price rounding policy
//! - **Total worth**: `worth()` is computed in an i128 and cannot fail
//! - **No panics**: every fallible operation returns [`numeric::NumericResult`]
//!
//! ## Example
//!
//! ```rust
//! use stock_valuation::prelude::*;
//! use stock_valuation::numeric::{NumericError, Price, Shares, Worth};
//!
//! let mut holding = ValuationCalculator::new(
//!     Price::from_integer(10).unwrap(),
//!     Shares::from_integer(5).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(holding.worth(), Worth::from_integer(50));
//!
//! // Solve for shares
//! holding.set_worth(Worth::from_integer(120)).unwrap();
//! assert_eq!(holding.shares(), Shares::from_integer(12).unwrap());
//!
//! // Round prices to cents on write
//! let mut rounded = ValuationCalculator::from_config(&ValuationConfig::cents()).unwrap();
//! rounded.set_price("10.126".parse().unwrap()).unwrap();
//! assert_eq!(rounded.price().to_string(), "10.130000000");
//!
//! // Zero price cannot be inverted
//! rounded.set_price(Price::ZERO).unwrap();
//! assert_eq!(
//!     rounded.set_worth(Worth::from_integer(100)),
//!     Err(NumericError::DivisionByZero)
//! );
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        PriceRounding, QuotedPrice, ValuationCalculator, ValuationConfig, ValuationSnapshot,
    };
    pub use crate::numeric::RoundingMode;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{NumericError, Price, Shares, Worth};

    #[test]
    fn test_end_to_end_valuation() {
        let config = ValuationConfig::cents().with_initial_price(Price::from_integer(10).unwrap());
        let mut holding = ValuationCalculator::from_config(&config).unwrap();
        assert_eq!(holding.worth(), Worth::ZERO);

        holding.set_shares(Shares::from_integer(5).unwrap()).unwrap();
        assert_eq!(holding.worth(), Worth::from_integer(50));

        holding.set_price("10.126".parse().unwrap()).unwrap();
        assert_eq!(holding.price(), "10.13".parse().unwrap());
        assert_eq!(holding.worth(), "50.65".parse().unwrap());

        holding.set_worth(Worth::from_integer(1013)).unwrap();
        assert_eq!(holding.shares(), Shares::from_integer(100).unwrap());

        let snapshot = holding.snapshot();
        assert_eq!(snapshot.worth(), Worth::from_integer(1013));

        holding.set_price(Price::ZERO).unwrap();
        assert_eq!(
            holding.set_worth(Worth::from_integer(1)),
            Err(NumericError::DivisionByZero)
        );
    }
}
