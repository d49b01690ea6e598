#[cfg(test)]
mod tests {
    use crate::orderbook::ladder::Ladder;
    use crate::orderbook::order::{Order, Side};
    use slab::Slab;

    // Helper to rest an order at a price on the ladder
    fn rest_order(
        orders: &mut Slab<Order>,
        ladder: &mut Ladder,
        side: Side,
        id: u64,
        price: i64,
        quantity: u64,
    ) {
        let handle = orders.insert(Order::limit(id, side, price, quantity));
        ladder.entry_or_create(price).push_back(orders, handle);
    }

    #[test]
    fn test_empty_ladder() {
        let ladder = Ladder::new(Side::Buy);

        assert_eq!(ladder.depth(), 0);
        assert_eq!(ladder.best_price(), None);
        assert_eq!(ladder.volume_at(10_000), 0);
    }

    #[test]
    fn test_bid_ladder_best_is_highest_price() {
        let mut orders = Slab::new();
        let mut ladder = Ladder::new(Side::Buy);

        rest_order(&mut orders, &mut ladder, Side::Buy, 1, 10_000, 10);
        rest_order(&mut orders, &mut ladder, Side::Buy, 2, 10_100, 5);
        rest_order(&mut orders, &mut ladder, Side::Buy, 3, 9_900, 15);

        assert_eq!(ladder.best_price(), Some(10_100));
        assert_eq!(ladder.depth(), 3);
    }

    #[test]
    fn test_ask_ladder_best_is_lowest_price() {
        let mut orders = Slab::new();
        let mut ladder = Ladder::new(Side::Sell);

        rest_order(&mut orders, &mut ladder, Side::Sell, 1, 10_500, 10);
        rest_order(&mut orders, &mut ladder, Side::Sell, 2, 10_400, 5);
        rest_order(&mut orders, &mut ladder, Side::Sell, 3, 10_600, 15);

        assert_eq!(ladder.best_price(), Some(10_400));
    }

    #[test]
    fn test_peek_best_mut_matches_best_price() {
        let mut orders = Slab::new();
        let mut ladder = Ladder::new(Side::Buy);

        rest_order(&mut orders, &mut ladder, Side::Buy, 1, 10_000, 10);
        rest_order(&mut orders, &mut ladder, Side::Buy, 2, 10_100, 5);

        let (price, level) = ladder.peek_best_mut().unwrap();
        assert_eq!(price, 10_100);
        assert_eq!(level.total_volume(), 5);
    }

    #[test]
    fn test_entry_or_create_reuses_existing_level() {
        let mut orders = Slab::new();
        let mut ladder = Ladder::new(Side::Sell);

        rest_order(&mut orders, &mut ladder, Side::Sell, 1, 10_000, 10);
        rest_order(&mut orders, &mut ladder, Side::Sell, 2, 10_000, 20);

        assert_eq!(ladder.depth(), 1);
        assert_eq!(ladder.volume_at(10_000), 30);
        assert_eq!(ladder.level(10_000).unwrap().order_count(), 2);
    }

    #[test]
    fn test_erase_empty_removes_level() {
        let mut orders = Slab::new();
        let mut ladder = Ladder::new(Side::Sell);

        rest_order(&mut orders, &mut ladder, Side::Sell, 1, 10_000, 10);

        let handle = ladder.level(10_000).unwrap().front().unwrap();
        ladder
            .level_mut(10_000)
            .unwrap()
            .remove(&mut orders, handle);
        ladder.erase_empty(10_000);

        assert_eq!(ladder.depth(), 0);
        assert!(ladder.level(10_000).is_none());
    }

    #[test]
    fn test_iter_best_first_ordering() {
        let mut orders = Slab::new();

        let mut bids = Ladder::new(Side::Buy);
        rest_order(&mut orders, &mut bids, Side::Buy, 1, 9_900, 10);
        rest_order(&mut orders, &mut bids, Side::Buy, 2, 10_100, 10);
        rest_order(&mut orders, &mut bids, Side::Buy, 3, 10_000, 10);

        let bid_prices: Vec<i64> = bids.iter_best_first().map(|(price, _)| price).collect();
        assert_eq!(bid_prices, vec![10_100, 10_000, 9_900]);

        let mut asks = Ladder::new(Side::Sell);
        rest_order(&mut orders, &mut asks, Side::Sell, 4, 10_300, 10);
        rest_order(&mut orders, &mut asks, Side::Sell, 5, 10_200, 10);
        rest_order(&mut orders, &mut asks, Side::Sell, 6, 10_400, 10);

        let ask_prices: Vec<i64> = asks.iter_best_first().map(|(price, _)| price).collect();
        assert_eq!(ask_prices, vec![10_200, 10_300, 10_400]);
    }
}
