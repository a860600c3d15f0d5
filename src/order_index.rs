//! Order index: identifier -> locator, O(1) both ways
//!
//! Total identifiers are bounded at `max_total_orders` (≤ 1,000,000) and
//! live orders at `max_live_orders` (≈ 65,536), so a flat array keyed
//! directly by identifier is simpler than a hash table and just as fast —
//! no hashing, no probing, a single bounds-checked array access.

use crate::core_types::{OrderId, Price, Side};
use crate::pool::NodeHandle;

/// Resolves an identifier to its resting location: which side, which
/// price level, and the direct pool handle for O(1) unlink.
#[derive(Clone, Copy)]
pub(crate) struct Locator {
    pub side: Side,
    pub price: Price,
    pub node: NodeHandle,
}

pub(crate) struct OrderIndex {
    table: Vec<Option<Locator>>,
}

impl OrderIndex {
    pub fn with_capacity(max_total_orders: u64) -> Self {
        OrderIndex {
            table: vec![None; max_total_orders as usize + 1],
        }
    }

    #[inline]
    pub fn insert(&mut self, id: OrderId, locator: Locator) {
        self.table[id as usize] = Some(locator);
    }

    #[inline]
    pub fn remove(&mut self, id: OrderId) -> Option<Locator> {
        self.table.get_mut(id as usize).and_then(Option::take)
    }

    #[inline]
    pub fn get(&self, id: OrderId) -> Option<Locator> {
        self.table.get(id as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(price: Price) -> Locator {
        Locator {
            side: Side::Bid,
            price,
            node: 0,
        }
    }

    #[test]
    fn unknown_id_is_absent() {
        let index = OrderIndex::with_capacity(16);
        assert!(index.get(5).is_none());
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut index = OrderIndex::with_capacity(16);
        index.insert(3, locator(100));
        let found = index.get(3).unwrap();
        assert_eq!(found.price, 100);
        assert_eq!(found.side, Side::Bid);
    }

    #[test]
    fn remove_clears_the_entry() {
        let mut index = OrderIndex::with_capacity(16);
        index.insert(3, locator(100));

        let removed = index.remove(3).unwrap();
        assert_eq!(removed.price, 100);
        assert!(index.get(3).is_none());
        // A second remove of the same, now-consumed id is a no-op.
        assert!(index.remove(3).is_none());
    }
}
