//! Order and execution report payloads
//!
//! These are the two shapes that cross the engine boundary: `OrderRequest`
//! in via `limit`, `ExecutionReport` out via the host callback. Both carry
//! opaque, fixed-length `trader`/`symbol` byte arrays — the engine copies
//! them verbatim and never interprets their contents.

use crate::config::STRINGLEN;
use crate::core_types::{OrderId, Price, Quantity, Side};

/// Opaque fixed-length payload (trader name or symbol).
pub type FixedString = [u8; STRINGLEN];

/// A new limit order submitted by the host.
#[derive(Debug, Clone, Copy)]
pub struct OrderRequest {
    pub symbol: FixedString,
    pub trader: FixedString,
    pub side: Side,
    pub price: Price,
    pub size: Quantity,
}

/// One side of a trade, delivered to the engine's execution callback.
///
/// The engine calls the callback twice per trade: once for the buyer, once
/// for the seller. `price` is always the resting (maker) order's price;
/// `size` is the traded quantity at this level.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionReport {
    pub symbol: FixedString,
    pub trader: FixedString,
    pub side: Side,
    pub price: Price,
    pub size: Quantity,
}

/// A resting order as stored in the book's node pool.
///
/// Belongs to exactly one price-level queue for as long as it rests; once
/// fully filled or cancelled its pool slot is freed and this record no
/// longer exists anywhere in the engine.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RestingOrder {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub size: Quantity,
    pub trader: FixedString,
    pub symbol: FixedString,
}
