//! Core OrderBook state and read-only queries

use super::ladder::Ladder;
use super::metrics::Metrics;
use super::order::{Order, OrderHandle, OrderId, Price, Quantity, Side};
use super::snapshot::{LevelSnapshot, OrderBookSnapshot};
use super::trade::{Trade, TradeListener};
use crate::utils::current_time_nanos;
use slab::Slab;
use std::collections::HashMap;
use tracing::trace;

/// A single-instrument limit order book with price-time priority matching.
///
/// The book is a single-writer state machine: every mutating operation takes
/// `&mut self` and runs to completion before the next begins, which is what
/// keeps the ladders, the level queues, and the id index mutually consistent.
/// Concurrent callers must serialize externally.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels, best (highest) price first
    pub(super) bids: Ladder,

    /// Ask side price levels, best (lowest) price first
    pub(super) asks: Ladder,

    /// Arena owning every live order record. Ladder queues and the id index
    /// refer into it by handle.
    pub(super) orders: Slab<Order>,

    /// Order id to arena handle, for O(1) lookup and cancellation
    pub(super) id_index: HashMap<OrderId, OrderHandle>,

    /// Optional callback receiving every executed trade
    pub(super) trade_listener: Option<TradeListener>,

    /// The price of the most recent execution, if any
    pub(super) last_trade_price: Option<Price>,

    /// Operation counters and latency samples
    pub(super) metrics: Metrics,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: Ladder::new(Side::Buy),
            asks: Ladder::new(Side::Sell),
            orders: Slab::new(),
            id_index: HashMap::new(),
            trade_listener: None,
            last_trade_price: None,
            metrics: Metrics::new(),
        }
    }

    /// Create an order book with a trade listener already registered.
    pub fn with_trade_listener(symbol: &str, listener: impl FnMut(Trade) + 'static) -> Self {
        let mut book = Self::new(symbol);
        book.set_trade_listener(listener);
        book
    }

    /// Register the callback that receives every executed trade.
    ///
    /// The listener is invoked synchronously from inside the matching loop
    /// and must not call back into the book. Replaces any previously
    /// registered listener.
    pub fn set_trade_listener(&mut self, listener: impl FnMut(Trade) + 'static) {
        self.trade_listener = Some(Box::new(listener));
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Best bid price (highest buy), if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Best ask price (lowest sell), if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Spread (best ask minus best bid) when both sides are populated.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Price of the most recent execution, if any trade has occurred.
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Total resting volume at a bid price, zero if no such level.
    pub fn bid_volume(&self, price: Price) -> Quantity {
        self.bids.volume_at(price)
    }

    /// Total resting volume at an ask price, zero if no such level.
    pub fn ask_volume(&self, price: Price) -> Quantity {
        self.asks.volume_at(price)
    }

    /// Number of distinct bid price levels.
    pub fn bid_depth(&self) -> usize {
        self.bids.depth()
    }

    /// Number of distinct ask price levels.
    pub fn ask_depth(&self) -> usize {
        self.asks.depth()
    }

    /// Number of orders currently live in the book.
    pub fn total_orders(&self) -> usize {
        self.id_index.len()
    }

    /// Look up a live order by id.
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.id_index.get(&id).map(|&handle| &self.orders[handle])
    }

    /// All resting orders at a price on one side, oldest first.
    pub fn get_orders_at_price(&self, price: Price, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: getting orders at price {} for side {}",
            self.symbol, price, side
        );
        let ladder = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };

        match ladder.level(price) {
            Some(level) => level
                .iter(&self.orders)
                .map(|handle| &self.orders[handle])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot the top `depth` levels of each side.
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let bids = self
            .bids
            .iter_best_first()
            .take(depth)
            .map(|(price, level)| LevelSnapshot {
                price,
                total_volume: level.total_volume(),
                order_count: level.order_count(),
            })
            .collect();

        let asks = self
            .asks
            .iter_best_first()
            .take(depth)
            .map(|(price, level)| LevelSnapshot {
                price,
                total_volume: level.total_volume(),
                order_count: level.order_count(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_nanos(),
            bids,
            asks,
        }
    }

    /// Metrics recorded by this book.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Mutable metrics access, e.g. for [`Metrics::reset`].
    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }
}
