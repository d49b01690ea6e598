//! Price level: the FIFO queue of resting orders at one exact price.

use super::order::{Order, OrderHandle, Quantity};
use slab::Slab;

/// All resting orders at a single price on one side of the book.
///
/// The queue is a doubly-linked chain threaded through the order arena:
/// orders are appended at the tail and drained from the head, so queue
/// position equals arrival order. The level never owns order records; it
/// only holds handles into the arena the caller passes in.
#[derive(Debug, Default)]
pub(super) struct PriceLevel {
    head: Option<OrderHandle>,
    tail: Option<OrderHandle>,
    total_volume: Quantity,
    order_count: usize,
}

impl PriceLevel {
    /// Append an order at the tail of the queue.
    pub(super) fn push_back(&mut self, orders: &mut Slab<Order>, handle: OrderHandle) {
        let prev_tail = self.tail;
        {
            let order = &mut orders[handle];
            order.prev = prev_tail;
            order.next = None;
        }

        match prev_tail {
            Some(tail) => orders[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);

        self.total_volume += orders[handle].remaining_quantity();
        self.order_count += 1;
    }

    /// Unlink an order from the queue by splicing its neighbours together.
    /// The removed order's links are cleared.
    pub(super) fn remove(&mut self, orders: &mut Slab<Order>, handle: OrderHandle) {
        let (prev, next, remaining) = {
            let order = &mut orders[handle];
            (
                order.prev.take(),
                order.next.take(),
                order.remaining_quantity(),
            )
        };

        match prev {
            Some(prev) => orders[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => orders[next].prev = prev,
            None => self.tail = prev,
        }

        self.total_volume -= remaining;
        self.order_count -= 1;
    }

    /// Oldest resting order in the queue.
    pub(super) fn front(&self) -> Option<OrderHandle> {
        self.head
    }

    /// True when the queue holds no orders. An empty level must not remain
    /// in a ladder.
    pub(super) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Sum of remaining quantity over the queue.
    pub(super) fn total_volume(&self) -> Quantity {
        self.total_volume
    }

    /// Number of orders in the queue.
    pub(super) fn order_count(&self) -> usize {
        self.order_count
    }

    /// Keep the aggregate volume in step with a partial fill of a resting
    /// order in this queue.
    pub(super) fn reduce_volume(&mut self, quantity: Quantity) {
        debug_assert!(quantity <= self.total_volume);
        self.total_volume -= quantity;
    }

    /// Iterate order handles in FIFO order, head first.
    pub(super) fn iter<'a>(&self, orders: &'a Slab<Order>) -> LevelIter<'a> {
        LevelIter {
            orders,
            cursor: self.head,
        }
    }
}

/// FIFO iterator over the handles of a level's queue.
pub(super) struct LevelIter<'a> {
    orders: &'a Slab<Order>,
    cursor: Option<OrderHandle>,
}

impl Iterator for LevelIter<'_> {
    type Item = OrderHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.orders[handle].next;
        Some(handle)
    }
}
