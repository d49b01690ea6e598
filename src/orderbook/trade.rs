//! Trade record emitted for every fill.

use super::order::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Callback invoked synchronously for each executed trade, in strict
/// matching order: ascending ask price for a buy aggressor, descending bid
/// price for a sell aggressor, FIFO within a price.
///
/// The listener receives the trade as a value and must not call back into
/// the book: the engine is mid-matching when it fires, and re-entrant
/// mutation is unsupported.
pub type TradeListener = Box<dyn FnMut(Trade)>;

/// An execution between a buy order and a sell order.
///
/// `buy_order_id` and `sell_order_id` are assigned by the orders' sides,
/// independent of which of the two was the aggressor. The price is always
/// the resting order's limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Id of the order on the buy side of the execution
    pub buy_order_id: OrderId,
    /// Id of the order on the sell side of the execution
    pub sell_order_id: OrderId,
    /// Execution price (the resting order's price)
    pub price: Price,
    /// Executed quantity
    pub quantity: Quantity,
    /// Nanosecond wall-clock instant captured at emission
    pub timestamp: u64,
}
