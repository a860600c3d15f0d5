//! Engine configuration
//!
//! The matching core has a much narrower configuration surface than a full
//! exchange: the price range the book indexes, how many orders may rest at
//! once, and how many identifiers one lifetime may hand out. There is no
//! file loading here — the engine has no persistence across lifecycle
//! boundaries, so configuration is constructed directly by the host.

use crate::core_types::Price;
use thiserror::Error;

/// Default string length for the opaque `trader`/`symbol` payloads.
pub const STRINGLEN: usize = 16;

/// Bounds and capacity for one engine lifetime.
///
/// # Sizing
///
/// `min_price..=max_price` is the range indexed directly by each book side's
/// price-level array — it must be small enough that `max_price - min_price`
/// slots per side is a reasonable allocation (tens of thousands, not
/// millions). `max_live_orders` bounds the node pool; `max_total_orders`
/// bounds the identifier counter for one `init`-to-`destroy` lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub min_price: Price,
    pub max_price: Price,
    pub max_live_orders: usize,
    pub max_total_orders: u64,
}

impl Default for EngineConfig {
    /// Matches the reference sizing notes: a ~65,537-slot price array per
    /// side, 65,536 live orders, 1,000,000 identifiers per lifetime.
    fn default() -> Self {
        EngineConfig {
            min_price: 0,
            max_price: 65_536,
            max_live_orders: 65_536,
            max_total_orders: 1_000_000,
        }
    }
}

impl EngineConfig {
    /// Validate the bounds. Called once at construction, not on the hot
    /// path — `limit` and `cancel` trust these bounds afterward.
    pub fn validate(&self) -> Result<(), BookConfigError> {
        if self.min_price > self.max_price {
            return Err(BookConfigError::InvertedPriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }
        if self.max_live_orders == 0 {
            return Err(BookConfigError::ZeroCapacity);
        }
        if self.max_total_orders == 0 {
            return Err(BookConfigError::ZeroCapacity);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn price_levels(&self) -> usize {
        (self.max_price - self.min_price) as usize + 1
    }
}

/// Construction-time configuration errors.
///
/// Unlike `limit`/`cancel`, which operate under the trusted-host contract
/// and never signal failure, building an `Engine` happens off the hot path
/// and is worth validating once.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookConfigError {
    #[error("min_price ({min}) is greater than max_price ({max})")]
    InvertedPriceRange { min: Price, max: Price },
    #[error("capacity must be non-zero")]
    ZeroCapacity,
}
