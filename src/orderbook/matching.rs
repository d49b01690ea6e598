//! Contains the core matching loop for the order book.

use super::book::OrderBook;
use super::order::{OrderHandle, OrderKind, Side};
use super::trade::Trade;
use crate::utils::{Timer, current_time_nanos};
use tracing::trace;

impl OrderBook {
    /// Match `incoming` against the opposite side until it is filled or no
    /// cross remains.
    ///
    /// Levels are swept best price first, FIFO within a level, and every
    /// trade executes at the resting order's price. A fully consumed
    /// resting order leaves both its level and the id index in the same
    /// step; a level is erased the moment its last order is consumed, so
    /// no iteration ever observes an empty level.
    pub(super) fn match_incoming(&mut self, incoming: OrderHandle) {
        let timer = Timer::start();

        let (side, kind, limit_price, original_quantity, incoming_id) = {
            let order = &self.orders[incoming];
            (
                order.side(),
                order.kind(),
                order.price(),
                order.quantity(),
                order.id(),
            )
        };

        let Self {
            ref symbol,
            ref mut bids,
            ref mut asks,
            ref mut orders,
            ref mut id_index,
            ref mut trade_listener,
            ref mut last_trade_price,
            ..
        } = *self;

        let opposite = match side {
            Side::Buy => asks,
            Side::Sell => bids,
        };

        while !orders[incoming].is_filled() {
            let (best_price, level) = match opposite.peek_best_mut() {
                Some(best) => best,
                None => break,
            };

            if kind == OrderKind::Limit {
                let crosses = match side {
                    Side::Buy => limit_price >= best_price,
                    Side::Sell => limit_price <= best_price,
                };
                if !crosses {
                    break;
                }
            }

            // Sweep the level FIFO: head is always the oldest resting order.
            while !orders[incoming].is_filled() {
                let resting = match level.front() {
                    Some(handle) => handle,
                    None => break,
                };

                let trade_quantity = orders[incoming]
                    .remaining_quantity()
                    .min(orders[resting].remaining_quantity());
                let trade_price = orders[resting].price();
                let resting_id = orders[resting].id();

                let (buy_order_id, sell_order_id) = match side {
                    Side::Buy => (incoming_id, resting_id),
                    Side::Sell => (resting_id, incoming_id),
                };

                trace!(
                    "Order book {}: trade {} x {} between buy {} and sell {}",
                    symbol, trade_quantity, trade_price, buy_order_id, sell_order_id
                );

                // Emit before any quantities change; the book is still
                // consistent at this point.
                if let Some(listener) = trade_listener.as_mut() {
                    listener(Trade {
                        buy_order_id,
                        sell_order_id,
                        price: trade_price,
                        quantity: trade_quantity,
                        timestamp: current_time_nanos(),
                    });
                }

                orders[incoming].reduce_quantity(trade_quantity);
                orders[resting].reduce_quantity(trade_quantity);
                level.reduce_volume(trade_quantity);
                *last_trade_price = Some(trade_price);

                if orders[resting].is_filled() {
                    level.remove(orders, resting);
                    id_index.remove(&resting_id);
                    orders.remove(resting);
                }
            }

            let retired = level.is_empty();
            if retired {
                opposite.erase_empty(best_price);
            }
        }

        let filled = original_quantity - self.orders[incoming].remaining_quantity();
        if filled > 0 {
            self.metrics.record_match(timer.elapsed_ns(), filled);
        }
    }
}
