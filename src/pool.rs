//! Fixed-size node pool for the price-level queues
//!
//! No allocation is permitted on the hot path once the engine is warmed up.
//! A doubly-linked list needs a place to put its nodes; here that place is
//! a `Vec<Slot>` sized once at `init` to `max_live_orders`, with a free list
//! threaded through unused slots. `alloc`/`free` are O(1) and never touch
//! the global allocator after construction.

use crate::order::RestingOrder;

/// Index into the pool. `u32` keeps a node at 1/2 the size of a pointer on
/// 64-bit targets and is more than enough for `max_live_orders` (≈ 65,536).
pub(crate) type NodeHandle = u32;

#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub order: RestingOrder,
    pub prev: Option<NodeHandle>,
    pub next: Option<NodeHandle>,
}

pub(crate) struct Pool {
    slots: Vec<Node>,
    free: Vec<NodeHandle>,
}

impl Pool {
    pub fn with_capacity(capacity: usize) -> Self {
        let dummy = RestingOrder {
            id: 0,
            side: crate::core_types::Side::Bid,
            price: 0,
            size: 0,
            trader: [0; crate::config::STRINGLEN],
            symbol: [0; crate::config::STRINGLEN],
        };
        let slots = vec![
            Node {
                order: dummy,
                prev: None,
                next: None,
            };
            capacity
        ];
        // Free list order doesn't matter for correctness; filling it in
        // reverse so the first allocation returns slot 0 keeps early traces
        // readable.
        let free = (0..capacity as NodeHandle).rev().collect();
        Pool { slots, free }
    }

    /// Take a free slot and initialize it with `order`. Panics if the pool
    /// is exhausted — exceeding `max_live_orders` is undefined behavior per
    /// the engine's trusted-host contract, not a recoverable error.
    #[inline]
    pub fn alloc(&mut self, order: RestingOrder) -> NodeHandle {
        let handle = self
            .free
            .pop()
            .expect("max_live_orders exceeded: pool has no free node");
        let slot = &mut self.slots[handle as usize];
        slot.order = order;
        slot.prev = None;
        slot.next = None;
        handle
    }

    #[inline]
    pub fn free(&mut self, handle: NodeHandle) {
        self.free.push(handle);
    }

    #[inline]
    pub fn get(&self, handle: NodeHandle) -> &Node {
        &self.slots[handle as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> &mut Node {
        &mut self.slots[handle as usize]
    }
}
