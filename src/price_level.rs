//! Price-level queue: a FIFO of resting orders at one price on one side
//!
//! A doubly-linked list threaded through the [`Pool`](crate::pool::Pool) is
//! the minimum structure that supports all three required operations at
//! O(1): append at tail on insertion, pop from head when a sweep consumes
//! the level, and unlink an interior node by direct handle on cancel. The
//! queue itself stores only head/tail handles; the link pointers live on
//! the pool node so cancel can unlink without walking the list.

use crate::pool::{NodeHandle, Pool};

#[derive(Clone, Copy, Default)]
pub(crate) struct PriceLevel {
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

impl PriceLevel {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Place `handle` at the tail. Preserves arrival-time priority.
    #[inline]
    pub fn append(&mut self, pool: &mut Pool, handle: NodeHandle) {
        pool.get_mut(handle).prev = self.tail;
        pool.get_mut(handle).next = None;
        match self.tail {
            Some(tail) => pool.get_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }

    /// The oldest resting order's handle, or `None` if the level is empty.
    #[inline]
    pub fn peek_head(&self) -> Option<NodeHandle> {
        self.head
    }

    /// Remove and return the oldest resting order's handle.
    #[inline]
    pub fn pop_head(&mut self, pool: &mut Pool) -> Option<NodeHandle> {
        let head = self.head?;
        self.unlink(pool, head);
        Some(head)
    }

    /// Remove a specific node in O(1) given its direct handle, as obtained
    /// from the order index.
    #[inline]
    pub fn unlink(&mut self, pool: &mut Pool, handle: NodeHandle) {
        let (prev, next) = {
            let node = pool.get(handle);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => pool.get_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => pool.get_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }
}
