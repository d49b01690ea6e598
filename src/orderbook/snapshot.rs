//! Order book snapshot for market data

use super::order::{Price, Quantity};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregate view of one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Price of the level
    pub price: Price,

    /// Sum of remaining quantity over the level's orders
    pub total_volume: Quantity,

    /// Number of orders resting at the level
    pub order_count: usize,
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (nanoseconds since epoch)
    pub timestamp: u64,

    /// Bid price levels, best (highest) price first
    pub bids: Vec<LevelSnapshot>,

    /// Ask price levels, best (lowest) price first
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and volume
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        let bid = self
            .bids
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and volume
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        let ask = self
            .asks
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> Quantity {
        self.bids.iter().map(|level| level.total_volume).sum()
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> Quantity {
        self.asks.iter().map(|level| level.total_volume).sum()
    }
}
