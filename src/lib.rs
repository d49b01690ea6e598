//! # Matchbook
//!
//! A single-instrument, in-memory limit order book with a price-time priority
//! matching engine. Orders are matched continuously as they arrive: an
//! aggressive order sweeps the opposite side of the book best price first,
//! oldest order first within a price, and any unfilled limit remainder rests
//! in the book at its limit price.
//!
//! ## Key Features
//!
//! - **Price-time priority matching**: Better prices execute first; within a
//!   price level, earlier arrivals execute first. Trades always execute at the
//!   resting order's price.
//!
//! - **Limit and market orders**: Limit orders rest after matching; market
//!   orders consume whatever liquidity is available and never rest.
//!
//! - **O(log L) operations**: Both sides of the book are ordered price
//!   ladders, so best-price retrieval, insertion, and level retirement are
//!   logarithmic in the number of price levels. Order lookup and cancellation
//!   are O(1) in the number of live orders via an id index.
//!
//! - **Trade notifications**: An optional listener receives every executed
//!   trade synchronously, in strict matching order.
//!
//! - **Performance metrics**: Built-in counters and latency percentiles for
//!   add, cancel, and match operations.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: The ladders, the per-level FIFO queues, and the id
//!    index stay mutually consistent after every operation.
//! 2. **Performance**: Hot-path operations avoid per-order allocation; order
//!    records live in an arena and level queues link records in place.
//! 3. **Determinism**: Matching priority is queue position, never timestamp
//!    comparison, so results do not depend on clock resolution.
//!
//! The engine is a single-writer state machine: all mutating operations take
//! `&mut self` and run to completion. Callers that need concurrent access
//! must serialize externally, for example behind a single writer thread fed
//! by a command queue.
//!
//! ## Example
//!
//! ```
//! use matchbook::{OrderBook, Side};
//!
//! let mut book = OrderBook::new("BTCUSD");
//! book.add_limit_order(1, Side::Sell, 10_000, 50).unwrap();
//! book.add_limit_order(2, Side::Buy, 10_000, 50).unwrap();
//!
//! // Both orders matched in full and left the book.
//! assert_eq!(book.total_orders(), 0);
//! assert_eq!(book.best_ask(), None);
//! ```

mod orderbook;

mod utils;

pub use orderbook::{
    LevelSnapshot, Metrics, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId,
    OrderKind, Price, Quantity, Side, Trade, TradeListener,
};
pub use utils::current_time_nanos;
