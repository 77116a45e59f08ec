// ============================================================================
// Numeric Module
// Fixed-point arithmetic for valuation figures
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - RoundingMode: midpoint policy used by round_dp and price rounding
// - NumericError: Error types for arithmetic operations
// - Worth: i128-backed valuation amount, wide enough for any price × shares
// - Price/Shares type aliases
//
// Arithmetic never panics: every fallible operation returns NumericResult.

mod errors;
mod fixed_decimal;
mod rounding;
mod worth;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Price, Shares};
pub use rounding::RoundingMode;
pub use worth::Worth;
