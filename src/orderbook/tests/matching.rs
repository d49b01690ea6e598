#[cfg(test)]
mod tests {
    use crate::{OrderBook, Side, Trade};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Helper to build a book that records every trade it emits
    fn recording_book() -> (OrderBook, Rc<RefCell<Vec<Trade>>>) {
        let trades = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&trades);
        let book = OrderBook::with_trade_listener("BTCUSD", move |trade| {
            sink.borrow_mut().push(trade);
        });
        (book, trades)
    }

    #[test]
    fn test_full_cross_consumes_both_orders() {
        let (mut book, trades) = recording_book();

        assert!(book.add_limit_order(1, Side::Sell, 10_000, 50).unwrap());
        assert!(!book.add_limit_order(2, Side::Buy, 10_000, 50).unwrap());

        let trades = trades.borrow();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].buy_order_id, 2);
        assert_eq!(trades[0].sell_order_id, 1);
        assert_eq!(trades[0].price, 10_000);
        assert_eq!(trades[0].quantity, 50);
        assert!(trades[0].timestamp > 0);

        assert_eq!(book.total_orders(), 0);
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_non_crossing_limit_rests_without_trades() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_100, 50).unwrap();
        assert!(book.add_limit_order(2, Side::Buy, 10_000, 50).unwrap());

        assert!(trades.borrow().is_empty());
        assert_eq!(book.total_orders(), 2);
        assert_eq!(book.best_bid(), Some(10_000));
        assert_eq!(book.best_ask(), Some(10_100));
    }

    #[test]
    fn test_trade_executes_at_resting_price() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 30).unwrap();
        // Aggressive buy above the resting ask: price improvement goes to
        // the aggressor
        assert!(book.add_limit_order(2, Side::Buy, 10_050, 100).unwrap());

        let trades = trades.borrow();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, 10_000);
        assert_eq!(trades[0].quantity, 30);

        // The remainder rests at the aggressor's own limit price
        assert_eq!(book.best_bid(), Some(10_050));
        assert_eq!(book.bid_volume(10_050), 70);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.total_orders(), 1);
    }

    #[test]
    fn test_time_priority_within_level() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 50).unwrap();
        book.add_limit_order(2, Side::Sell, 10_000, 50).unwrap();
        book.add_limit_order(3, Side::Sell, 10_000, 50).unwrap();

        assert!(!book.add_limit_order(4, Side::Buy, 10_000, 150).unwrap());

        let trades = trades.borrow();
        let sellers: Vec<u64> = trades.iter().map(|trade| trade.sell_order_id).collect();
        assert_eq!(sellers, vec![1, 2, 3]);
        assert!(trades.iter().all(|trade| trade.buy_order_id == 4));
        assert!(trades.iter().all(|trade| trade.quantity == 50));
        assert!(trades.iter().all(|trade| trade.price == 10_000));
    }

    #[test]
    fn test_sweep_multiple_levels_best_price_first() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_200, 10).unwrap();
        book.add_limit_order(2, Side::Sell, 10_000, 10).unwrap();
        book.add_limit_order(3, Side::Sell, 10_100, 10).unwrap();

        assert!(!book.add_limit_order(4, Side::Buy, 10_200, 30).unwrap());

        let trades = trades.borrow();
        let prices: Vec<i64> = trades.iter().map(|trade| trade.price).collect();
        assert_eq!(prices, vec![10_000, 10_100, 10_200]);

        assert_eq!(book.ask_depth(), 0);
        assert_eq!(book.total_orders(), 0);
    }

    #[test]
    fn test_limit_stops_at_its_price() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 50).unwrap();
        book.add_limit_order(2, Side::Sell, 10_100, 50).unwrap();

        // Crosses the first level only; the remainder rests as a bid
        assert!(book.add_limit_order(3, Side::Buy, 10_050, 75).unwrap());

        let trades = trades.borrow();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, 10_000);
        assert_eq!(trades[0].quantity, 50);

        assert_eq!(book.best_bid(), Some(10_050));
        assert_eq!(book.bid_volume(10_050), 25);
        assert_eq!(book.best_ask(), Some(10_100));
        assert_eq!(book.ask_volume(10_100), 50);
        assert_eq!(book.total_orders(), 2);
    }

    #[test]
    fn test_sell_aggressor_sweeps_bids_descending() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Buy, 10_000, 10).unwrap();
        book.add_limit_order(2, Side::Buy, 10_100, 10).unwrap();
        book.add_limit_order(3, Side::Buy, 9_900, 10).unwrap();

        assert!(!book.add_limit_order(4, Side::Sell, 9_900, 30).unwrap());

        let trades = trades.borrow();
        let prices: Vec<i64> = trades.iter().map(|trade| trade.price).collect();
        assert_eq!(prices, vec![10_100, 10_000, 9_900]);
        assert!(trades.iter().all(|trade| trade.sell_order_id == 4));

        assert_eq!(book.bid_depth(), 0);
    }

    #[test]
    fn test_partial_fill_of_resting_order_updates_volume() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 100).unwrap();
        assert!(!book.add_limit_order(2, Side::Buy, 10_000, 40).unwrap());

        assert_eq!(trades.borrow().len(), 1);

        // The resting order is still live with its reduced remainder
        assert_eq!(book.total_orders(), 1);
        assert_eq!(book.ask_volume(10_000), 60);
        let resting = book.get_order(1).unwrap();
        assert_eq!(resting.remaining_quantity(), 60);
        assert_eq!(resting.quantity(), 100);
    }

    #[test]
    fn test_market_order_sweeps_at_any_price() {
        let (mut book, trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 10).unwrap();
        book.add_limit_order(2, Side::Sell, 10_500, 10).unwrap();

        let filled = book.add_market_order(3, Side::Buy, 20).unwrap();
        assert_eq!(filled, 20);

        let trades = trades.borrow();
        let prices: Vec<i64> = trades.iter().map(|trade| trade.price).collect();
        assert_eq!(prices, vec![10_000, 10_500]);

        assert_eq!(book.total_orders(), 0);
    }

    #[test]
    fn test_market_order_partial_fill_discards_remainder() {
        let (mut book, _trades) = recording_book();

        book.add_limit_order(1, Side::Sell, 10_000, 5).unwrap();

        let filled = book.add_market_order(2, Side::Buy, 10).unwrap();
        assert_eq!(filled, 5);

        // The market order never rests
        assert_eq!(book.total_orders(), 0);
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_last_trade_price_tracks_executions() {
        let (mut book, _trades) = recording_book();

        assert_eq!(book.last_trade_price(), None);

        book.add_limit_order(1, Side::Sell, 10_000, 10).unwrap();
        book.add_limit_order(2, Side::Buy, 10_000, 10).unwrap();
        assert_eq!(book.last_trade_price(), Some(10_000));

        book.add_limit_order(3, Side::Sell, 10_200, 10).unwrap();
        book.add_market_order(4, Side::Buy, 10).unwrap();
        assert_eq!(book.last_trade_price(), Some(10_200));
    }

    #[test]
    fn test_matching_without_listener() {
        let mut book = OrderBook::new("BTCUSD");

        book.add_limit_order(1, Side::Sell, 10_000, 50).unwrap();
        assert!(!book.add_limit_order(2, Side::Buy, 10_000, 50).unwrap());

        assert_eq!(book.total_orders(), 0);
    }
}
