//! Matching core: the `init` / `limit` / `cancel` / `destroy` contract
//!
//! `Engine` owns both book sides, the node pool, and the order index. All
//! four operations run to completion synchronously — there is no internal
//! threading, no suspension, and the execution callback is invoked inline
//! from within `limit`. The host must not call back into `limit`, `cancel`,
//! `init`, or `destroy` from inside the callback; the engine is not
//! re-entrant.

use crate::book_side::BookSide;
use crate::config::{BookConfigError, EngineConfig};
use crate::core_types::{OrderId, Price, Quantity, Side};
use crate::order::{ExecutionReport, OrderRequest, RestingOrder};
use crate::order_index::{Locator, OrderIndex};
use crate::pool::Pool;

pub struct Engine {
    config: EngineConfig,
    pool: Pool,
    bids: BookSide,
    asks: BookSide,
    index: OrderIndex,
    next_id: OrderId,
}

impl Engine {
    /// `init`: allocate all fixed-size structures and reset the identifier
    /// counter to 1. After this call the book is empty with no live orders.
    pub fn init(config: EngineConfig) -> Result<Self, BookConfigError> {
        config.validate()?;
        tracing::debug!(
            min_price = config.min_price,
            max_price = config.max_price,
            max_live_orders = config.max_live_orders,
            "matching core initialized"
        );
        Ok(Engine {
            pool: Pool::with_capacity(config.max_live_orders),
            bids: BookSide::new(Side::Bid, &config),
            asks: BookSide::new(Side::Ask, &config),
            index: OrderIndex::with_capacity(config.max_total_orders),
            next_id: 1,
            config,
        })
    }

    /// `destroy`: release all resources. Consuming `self` here means a
    /// subsequent `Engine::init` is indistinguishable from first start —
    /// there is no way to keep using an engine past `destroy`.
    pub fn destroy(self) {
        tracing::debug!("matching core destroyed");
    }

    /// Submit a new limit order. Returns the freshly allocated identifier
    /// regardless of whether the order rests or is fully filled on
    /// arrival. Emits zero or more execution report pairs to
    /// `on_execution`, in sweep order (best-priced level first, FIFO
    /// within a level).
    pub fn limit<F>(&mut self, order: OrderRequest, on_execution: &mut F) -> OrderId
    where
        F: FnMut(ExecutionReport),
    {
        let id = self.next_id;
        self.next_id += 1;
        tracing::trace!(id, side = ?order.side, price = order.price, size = order.size, "limit");

        let mut remaining = order.size;
        let opposing_side = order.side.opposite();

        loop {
            if remaining == 0 {
                break;
            }
            // Disjoint field borrows: selecting `self.bids`/`self.asks`
            // directly (not through a method) lets `opposing`, `pool`, and
            // `index` stay independently borrowed for the rest of this
            // iteration.
            let (opposing, pool, index) = match opposing_side {
                Side::Bid => (&mut self.bids, &mut self.pool, &mut self.index),
                Side::Ask => (&mut self.asks, &mut self.pool, &mut self.index),
            };

            let Some(bp) = opposing.best_price() else {
                break;
            };
            let crosses = match order.side {
                Side::Bid => order.price >= bp,
                Side::Ask => order.price <= bp,
            };
            if !crosses {
                break;
            }

            let head = opposing
                .queue_at(bp)
                .peek_head()
                .expect("best price cursor points at an empty level");
            let resting = pool.get(head).order;
            let traded = remaining.min(resting.size);

            let (buyer, seller) = pair_reports(order, resting, bp, traded);
            on_execution(buyer);
            on_execution(seller);

            remaining -= traded;
            let resting_remaining = resting.size - traded;

            if resting_remaining == 0 {
                opposing.queue_at(bp).pop_head(pool);
                pool.free(head);
                index.remove(resting.id);
                if opposing.queue_at(bp).is_empty() {
                    opposing.advance_best();
                }
            } else {
                pool.get_mut(head).order.size = resting_remaining;
            }
        }

        if remaining > 0 {
            let residual = RestingOrder {
                id,
                side: order.side,
                price: order.price,
                size: remaining,
                trader: order.trader,
                symbol: order.symbol,
            };
            let (book, pool, index) = match order.side {
                Side::Bid => (&mut self.bids, &mut self.pool, &mut self.index),
                Side::Ask => (&mut self.asks, &mut self.pool, &mut self.index),
            };
            let handle = pool.alloc(residual);
            book.rest(pool, order.price, handle);
            index.insert(
                id,
                Locator {
                    side: order.side,
                    price: order.price,
                    node: handle,
                },
            );
        }

        id
    }

    /// Cancel a resting order by identifier. A silent no-op if `id` is
    /// unknown or already consumed — no report is emitted, no state
    /// changes.
    pub fn cancel(&mut self, id: OrderId) {
        let Some(locator) = self.index.remove(id) else {
            return;
        };
        let book = match locator.side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        };
        book.queue_at(locator.price).unlink(&mut self.pool, locator.node);
        self.pool.free(locator.node);
        if book.queue_at(locator.price).is_empty() && book.best_price() == Some(locator.price) {
            book.advance_best();
        }
    }

    /// Current best bid, or `None` if the bid side is empty.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Current best ask, or `None` if the ask side is empty.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Build the buyer/seller execution report pair for one traded quantity at
/// one level. The resting order's price always wins — standard
/// maker-sets-price convention, regardless of the incoming order's limit.
fn pair_reports(
    incoming: OrderRequest,
    resting: RestingOrder,
    price: Price,
    size: Quantity,
) -> (ExecutionReport, ExecutionReport) {
    let incoming_report = ExecutionReport {
        symbol: incoming.symbol,
        trader: incoming.trader,
        side: incoming.side,
        price,
        size,
    };
    let resting_report = ExecutionReport {
        symbol: resting.symbol,
        trader: resting.trader,
        side: resting.side,
        price,
        size,
    };
    match incoming.side {
        Side::Bid => (incoming_report, resting_report),
        Side::Ask => (resting_report, incoming_report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STRINGLEN;

    fn name(tag: &str) -> [u8; STRINGLEN] {
        let mut buf = [0u8; STRINGLEN];
        let bytes = tag.as_bytes();
        buf[..bytes.len()].copy_from_slice(bytes);
        buf
    }

    fn order(side: Side, price: u32, size: u32, trader: &str) -> OrderRequest {
        OrderRequest {
            symbol: name("SYM"),
            trader: name(trader),
            side,
            price,
            size,
        }
    }

    fn engine() -> Engine {
        Engine::init(EngineConfig::default()).unwrap()
    }

    #[test]
    fn resting_order_with_no_cross_emits_nothing() {
        let mut engine = engine();
        let mut fills = Vec::new();
        let id1 = engine.limit(order(Side::Bid, 100, 10, "A"), &mut |r| fills.push(r));
        let id2 = engine.limit(order(Side::Ask, 101, 10, "B"), &mut |r| fills.push(r));

        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
        assert!(fills.is_empty());
        assert_eq!(engine.best_bid(), Some(100));
        assert_eq!(engine.best_ask(), Some(101));
    }

    #[test]
    fn exact_cross_empties_both_sides() {
        let mut engine = engine();
        engine.limit(order(Side::Bid, 100, 10, "A"), &mut |_| {});

        let mut fills = Vec::new();
        engine.limit(order(Side::Ask, 100, 10, "B"), &mut |r| fills.push(r));

        assert_eq!(fills.len(), 2);
        assert!(fills
            .iter()
            .any(|r| r.side == Side::Bid && r.size == 10 && r.price == 100));
        assert!(fills
            .iter()
            .any(|r| r.side == Side::Ask && r.size == 10 && r.price == 100));
        assert_eq!(engine.best_bid(), None);
        assert_eq!(engine.best_ask(), None);
    }

    #[test]
    fn partial_fill_leaves_residual_resting() {
        let mut engine = engine();
        engine.limit(order(Side::Bid, 100, 10, "A"), &mut |_| {});

        let mut fills = Vec::new();
        engine.limit(order(Side::Ask, 100, 4, "B"), &mut |r| fills.push(r));

        assert_eq!(fills.len(), 2);
        assert!(fills.iter().all(|r| r.size == 4));
        assert_eq!(engine.best_bid(), Some(100));
        assert_eq!(engine.best_ask(), None);
    }

    #[test]
    fn sweep_crosses_multiple_levels() {
        let mut engine = engine();
        engine.limit(order(Side::Ask, 101, 5, "S1"), &mut |_| {});
        engine.limit(order(Side::Ask, 102, 5, "S2"), &mut |_| {});

        let mut fills = Vec::new();
        engine.limit(order(Side::Bid, 103, 8, "B"), &mut |r| fills.push(r));

        assert_eq!(fills.len(), 4);
        let at_101: u32 = fills.iter().filter(|r| r.price == 101).map(|r| r.size).sum();
        let at_102: u32 = fills.iter().filter(|r| r.price == 102).map(|r| r.size).sum();
        assert_eq!(at_101, 10); // 5 buyer + 5 seller
        assert_eq!(at_102, 6); // 3 buyer + 3 seller
        assert_eq!(engine.best_bid(), None);
        assert_eq!(engine.best_ask(), Some(102));
    }

    #[test]
    fn time_priority_within_a_level() {
        let mut engine = engine();
        let id_a = engine.limit(order(Side::Bid, 100, 10, "A"), &mut |_| {});
        let _id_b = engine.limit(order(Side::Bid, 100, 10, "B"), &mut |_| {});

        let mut fills = Vec::new();
        engine.limit(order(Side::Ask, 100, 10, "S"), &mut |r| fills.push(r));

        assert!(fills
            .iter()
            .any(|r| r.side == Side::Bid && r.trader == name("A")));
        assert!(!fills.iter().any(|r| r.trader == name("B")));

        // B is still resting; A's id is already consumed so this is a no-op.
        engine.cancel(id_a);
        assert_eq!(engine.best_bid(), Some(100));
    }

    #[test]
    fn cancel_then_no_match() {
        let mut engine = engine();
        let id = engine.limit(order(Side::Bid, 100, 10, "A"), &mut |_| {});
        engine.cancel(id);
        assert_eq!(engine.best_bid(), None);

        let mut fills = Vec::new();
        let id2 = engine.limit(order(Side::Ask, 100, 10, "B"), &mut |r| fills.push(r));
        assert!(fills.is_empty());
        assert_eq!(engine.best_ask(), Some(100));
        assert_eq!(id2, 2);
    }

    #[test]
    fn cancel_of_unknown_id_is_a_silent_noop() {
        let mut engine = engine();
        engine.cancel(999);
        engine.limit(order(Side::Bid, 100, 1, "A"), &mut |_| {});
        engine.cancel(999);
        assert_eq!(engine.best_bid(), Some(100));
    }

    #[test]
    fn submit_then_cancel_restores_prior_book_state() {
        let mut engine = engine();
        engine.limit(order(Side::Bid, 100, 10, "A"), &mut |_| {});
        assert_eq!(engine.best_bid(), Some(100));

        let id = engine.limit(order(Side::Ask, 200, 5, "B"), &mut |_| {});
        assert_eq!(engine.best_ask(), Some(200));

        engine.cancel(id);
        assert_eq!(engine.best_ask(), None);
        assert_eq!(engine.best_bid(), Some(100));
    }

    #[test]
    fn init_after_destroy_resets_identifier_counter() {
        let engine = engine();
        engine.destroy();

        let mut engine = Engine::init(EngineConfig::default()).unwrap();
        let id = engine.limit(order(Side::Bid, 100, 1, "A"), &mut |_| {});
        assert_eq!(id, 1);
        assert_eq!(engine.best_bid(), Some(100));
    }

    #[test]
    fn boundary_prices_behave_like_any_other_price() {
        let config = EngineConfig::default();
        let mut engine = Engine::init(config).unwrap();
        engine.limit(order(Side::Bid, config.min_price, 1, "A"), &mut |_| {});
        engine.limit(order(Side::Ask, config.max_price, 1, "B"), &mut |_| {});
        assert_eq!(engine.best_bid(), Some(config.min_price));
        assert_eq!(engine.best_ask(), Some(config.max_price));
    }

    #[test]
    fn rejects_inverted_price_range() {
        let config = EngineConfig {
            min_price: 100,
            max_price: 1,
            ..EngineConfig::default()
        };
        assert!(Engine::init(config).is_err());
    }
}
