//! Order book operations: submitting and cancelling orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, Price, Quantity, Side};
use crate::utils::Timer;
use tracing::trace;

impl OrderBook {
    /// Add a limit order to the book.
    ///
    /// The order first matches against the opposite side; any unfilled
    /// remainder rests at `price`. Returns `Ok(true)` if a remainder was
    /// inserted into the book and `Ok(false)` if the order was fully
    /// consumed by matching.
    ///
    /// Rejects zero quantity, non-positive prices, and ids that are already
    /// live, without touching the book.
    pub fn add_limit_order(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<bool, OrderBookError> {
        let timer = Timer::start();
        let result = self.add_limit_inner(id, side, price, quantity);
        self.metrics.record_add(timer.elapsed_ns());
        result
    }

    fn add_limit_inner(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<bool, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(quantity));
        }
        if price <= 0 {
            return Err(OrderBookError::InvalidPrice(price));
        }
        if self.id_index.contains_key(&id) {
            return Err(OrderBookError::DuplicateOrderId(id));
        }

        trace!(
            "Order book {}: adding limit order {} {} {} x {}",
            self.symbol, id, side, price, quantity
        );

        let handle = self.orders.insert(Order::limit(id, side, price, quantity));
        self.id_index.insert(id, handle);

        self.match_incoming(handle);

        if self.orders[handle].is_filled() {
            self.id_index.remove(&id);
            self.orders.remove(handle);
            return Ok(false);
        }

        match side {
            Side::Buy => self
                .bids
                .entry_or_create(price)
                .push_back(&mut self.orders, handle),
            Side::Sell => self
                .asks
                .entry_or_create(price)
                .push_back(&mut self.orders, handle),
        }
        Ok(true)
    }

    /// Add a market order, executing immediately at the best available
    /// prices.
    ///
    /// Returns the filled quantity, in `[0, quantity]`. Market orders never
    /// rest: any remainder after matching is discarded, and an empty
    /// opposite side simply fills nothing.
    pub fn add_market_order(
        &mut self,
        id: OrderId,
        side: Side,
        quantity: Quantity,
    ) -> Result<Quantity, OrderBookError> {
        let timer = Timer::start();
        let result = self.add_market_inner(id, side, quantity);
        self.metrics.record_add(timer.elapsed_ns());
        result
    }

    fn add_market_inner(
        &mut self,
        id: OrderId,
        side: Side,
        quantity: Quantity,
    ) -> Result<Quantity, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(quantity));
        }
        if self.id_index.contains_key(&id) {
            return Err(OrderBookError::DuplicateOrderId(id));
        }

        trace!(
            "Order book {}: adding market order {} {} x {}",
            self.symbol, id, side, quantity
        );

        // The record is registered only for the duration of the matching
        // pass; market orders are gone before the call returns.
        let handle = self.orders.insert(Order::market(id, side, quantity));
        self.id_index.insert(id, handle);

        self.match_incoming(handle);

        let filled = quantity - self.orders[handle].remaining_quantity();
        self.id_index.remove(&id);
        self.orders.remove(handle);

        Ok(filled)
    }

    /// Cancel a resting order by id.
    ///
    /// Returns `true` if the order existed and was removed, unlinking it
    /// from its price level and dropping the level if it became empty.
    /// Cancelling an unknown id returns `false` and is not an error.
    pub fn cancel_order(&mut self, id: OrderId) -> bool {
        let timer = Timer::start();
        let result = self.cancel_inner(id);
        self.metrics.record_cancel(timer.elapsed_ns());
        result
    }

    fn cancel_inner(&mut self, id: OrderId) -> bool {
        let handle = match self.id_index.remove(&id) {
            Some(handle) => handle,
            None => return false,
        };

        let (side, price) = {
            let order = &self.orders[handle];
            (order.side(), order.price())
        };

        trace!(
            "Order book {}: cancelling order {} at price {}",
            self.symbol, id, price
        );

        let ladder = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };

        let became_empty = match ladder.level_mut(price) {
            Some(level) => {
                level.remove(&mut self.orders, handle);
                level.is_empty()
            }
            None => false,
        };
        if became_empty {
            ladder.erase_empty(price);
        }

        self.orders.remove(handle);
        true
    }
}
