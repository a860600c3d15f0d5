//! Book side: one array of price-level queues plus a best-price cursor
//!
//! The small, bounded price range lets both sides index their price levels
//! directly by raw price value — "one tick worse" is an integer step, not a
//! tree descent. Scanning for the best price on every operation would be
//! unacceptable; the `best` cursor makes the common case O(1) and only
//! costs O(k) when `k` empty levels must be skipped after a level empties.

use crate::config::EngineConfig;
use crate::core_types::{Price, Side};
use crate::pool::{NodeHandle, Pool};
use crate::price_level::PriceLevel;

pub(crate) struct BookSide {
    side: Side,
    min_price: Price,
    max_price: Price,
    levels: Vec<PriceLevel>,
    best: Option<Price>,
}

impl BookSide {
    pub fn new(side: Side, config: &EngineConfig) -> Self {
        BookSide {
            side,
            min_price: config.min_price,
            max_price: config.max_price,
            levels: vec![PriceLevel::default(); config.price_levels()],
            best: None,
        }
    }

    #[inline]
    fn index(&self, price: Price) -> usize {
        (price - self.min_price) as usize
    }

    #[inline]
    pub fn best_price(&self) -> Option<Price> {
        self.best
    }

    #[inline]
    pub fn queue_at(&mut self, price: Price) -> &mut PriceLevel {
        let idx = self.index(price);
        &mut self.levels[idx]
    }

    #[inline]
    pub fn queue_at_ref(&self, price: Price) -> &PriceLevel {
        &self.levels[self.index(price)]
    }

    /// Append `handle` at `price`, improving the `best` cursor if `price`
    /// is strictly better than the current best (higher for bids, lower
    /// for asks) or the side was empty.
    pub fn rest(&mut self, pool: &mut Pool, price: Price, handle: NodeHandle) {
        let idx = self.index(price);
        self.levels[idx].append(pool, handle);
        let improves = match self.best {
            None => true,
            Some(best) => match self.side {
                Side::Bid => price > best,
                Side::Ask => price < best,
            },
        };
        if improves {
            self.best = Some(price);
        }
    }

    /// Advance the `best` cursor toward worse prices until it lands on a
    /// non-empty level or the side is exhausted. Called after a removal at
    /// the current best price empties that level; a no-op otherwise.
    pub fn advance_best(&mut self) {
        let Some(mut price) = self.best else {
            return;
        };
        loop {
            if !self.levels[self.index(price)].is_empty() {
                self.best = Some(price);
                return;
            }
            let next = match self.side {
                Side::Bid => price.checked_sub(1).filter(|&p| p >= self.min_price),
                Side::Ask => {
                    let candidate = price + 1;
                    (candidate <= self.max_price).then_some(candidate)
                }
            };
            match next {
                Some(p) => price = p,
                None => {
                    self.best = None;
                    return;
                }
            }
        }
    }
}
