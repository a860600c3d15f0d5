//! Core types used throughout the engine
//!
//! These are fundamental type aliases and small value types. They provide
//! semantic meaning and keep the price/size/identifier representations
//! consistent across `book`, `engine`, and the host-facing API.

/// Order identifier. Monotonically increasing from 1, assigned by `limit`.
///
/// # Constraints
/// - **Unique**: never reused within one engine lifetime.
/// - **Bounded**: at most [`crate::config::EngineConfig::max_total_orders`]
///   are handed out before the engine must be re-initialized.
pub type OrderId = u64;

/// Fixed-point price. Encodes a monetary amount with two implied decimals;
/// the engine never interprets the value beyond ordering and array indexing.
pub type Price = u32;

/// Resting/traded share count. Always strictly positive for a live order.
pub type Quantity = u32;

/// Which side of the book an order or execution belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Resting buy order / buyer counterparty of a trade.
    Bid,
    /// Resting sell order / seller counterparty of a trade.
    Ask,
}

impl Side {
    /// The opposing side an incoming order of this side matches against.
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}
