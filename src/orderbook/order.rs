//! Order record and the scalar domain types it is built from.

use crate::utils::current_time_nanos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied order identifier. Must be unique across all orders
/// currently live in the book.
pub type OrderId = u64;

/// Price in fixed-point minor units (e.g. cents). Never floating point.
pub type Price = i64;

/// Order quantity.
pub type Quantity = u64;

/// Arena key of an order record. Handles are internal to the book: the
/// id index and the level queues both store handles, never references.
pub(super) type OrderHandle = usize;

/// Side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// The side this order matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Kind of order submitted to the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Rests at its limit price after matching
    Limit,
    /// Executes at the best available prices and never rests
    Market,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => write!(f, "LIMIT"),
            OrderKind::Market => write!(f, "MARKET"),
        }
    }
}

/// A single order in the book: immutable identity plus the mutable remaining
/// quantity and the queue links of its price level.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    side: Side,
    kind: OrderKind,
    price: Price,
    quantity: Quantity,
    remaining_quantity: Quantity,
    timestamp: u64,

    /// Queue links within the owning price level. Mutated exclusively by
    /// `PriceLevel`; arrival order within a level is the sole time-priority
    /// signal.
    pub(super) prev: Option<OrderHandle>,
    pub(super) next: Option<OrderHandle>,
}

impl Order {
    /// Create a limit order.
    pub(super) fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id,
            side,
            kind: OrderKind::Limit,
            price,
            quantity,
            remaining_quantity: quantity,
            timestamp: current_time_nanos(),
            prev: None,
            next: None,
        }
    }

    /// Create a market order. Market orders carry no price; the slot is zero.
    pub(super) fn market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self {
            id,
            side,
            kind: OrderKind::Market,
            price: 0,
            quantity,
            remaining_quantity: quantity,
            timestamp: current_time_nanos(),
            prev: None,
            next: None,
        }
    }

    /// Order identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Side of the book.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Limit or market.
    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Limit price; zero for market orders.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Quantity at submission.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Quantity still unfilled.
    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    /// Nanosecond instant captured at construction. Audit only: matching
    /// priority is queue position, never timestamp comparison.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// True once the order has no remaining quantity.
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Reduce the remaining quantity after a fill. `quantity` must not
    /// exceed the remaining quantity.
    pub(super) fn reduce_quantity(&mut self, quantity: Quantity) {
        debug_assert!(quantity <= self.remaining_quantity);
        self.remaining_quantity -= quantity;
    }
}
