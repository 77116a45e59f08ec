// ============================================================================
// Valuation Snapshot
// Immutable point-in-time view of a calculator
// ============================================================================

use crate::numeric::{Price, Shares, Worth};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only copy of price, shares and worth at the moment it was taken.
///
/// Only the crate can build one, and worth is always derived from the
/// captured price and shares.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValuationSnapshot {
    price: Price,
    shares: Shares,
    worth: Worth,
    taken_at: DateTime<Utc>,
}

impl ValuationSnapshot {
    pub(crate) fn new(price: Price, shares: Shares) -> Self {
        Self {
            price,
            shares,
            worth: Worth::product(price, shares),
            taken_at: Utc::now(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn shares(&self) -> Shares {
        self.shares
    }

    pub fn worth(&self) -> Worth {
        self.worth
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}
