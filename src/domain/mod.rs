// ============================================================================
// Domain Models Module
// Valuation entities and their configuration
// ============================================================================

pub mod calculator;
pub mod config;
pub mod quoted_price;
pub mod snapshot;

pub use calculator::ValuationCalculator;
pub use config::{PriceRounding, ValuationConfig};
pub use quoted_price::QuotedPrice;
pub use snapshot::ValuationSnapshot;
