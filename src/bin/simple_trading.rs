//! Demonstration of the order book: building a book, crossing the spread,
//! market orders, cancellation, and a bulk throughput run.

use matchbook::{OrderBook, Side};

fn print_book_state(book: &OrderBook) {
    println!("\n--- Order Book State ---");

    match book.best_bid() {
        Some(bid) => println!("Best Bid: ${:.2}", bid as f64 / 100.0),
        None => println!("Best Bid: -"),
    }
    match book.best_ask() {
        Some(ask) => println!("Best Ask: ${:.2}", ask as f64 / 100.0),
        None => println!("Best Ask: -"),
    }
    if let Some(spread) = book.spread() {
        println!("Spread: ${:.2}", spread as f64 / 100.0);
    }

    println!("Bid Depth: {} levels", book.bid_depth());
    println!("Ask Depth: {} levels", book.ask_depth());
    println!("Total Orders: {}", book.total_orders());
    println!("------------------------\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Order Book Demo ===\n");

    let mut book = OrderBook::with_trade_listener("DEMO", |trade| {
        println!("TRADE EXECUTED:");
        println!("  Buy Order ID: {}", trade.buy_order_id);
        println!("  Sell Order ID: {}", trade.sell_order_id);
        println!("  Price: ${:.2}", trade.price as f64 / 100.0);
        println!("  Quantity: {}\n", trade.quantity);
    });

    // Scenario 1: build the initial book
    println!("=== Scenario 1: Building Order Book ===");

    book.add_limit_order(1, Side::Buy, 10_000, 100)?; // $100.00
    book.add_limit_order(2, Side::Buy, 9_950, 150)?; // $99.50
    book.add_limit_order(3, Side::Buy, 9_900, 200)?; // $99.00

    book.add_limit_order(4, Side::Sell, 10_050, 100)?; // $100.50
    book.add_limit_order(5, Side::Sell, 10_100, 150)?; // $101.00
    book.add_limit_order(6, Side::Sell, 10_150, 200)?; // $101.50

    print_book_state(&book);

    // Scenario 2: aggressive buy order crosses the spread
    println!("=== Scenario 2: Aggressive Buy Order ===");
    println!("Adding buy order at $101.00 for 250 shares");
    println!("(Should match against sells at $100.50 and $101.00)\n");

    book.add_limit_order(7, Side::Buy, 10_100, 250)?;

    print_book_state(&book);

    // Scenario 3: market order
    println!("=== Scenario 3: Market Order ===");
    println!("Submitting market sell for 50 shares\n");

    let filled = book.add_market_order(8, Side::Sell, 50)?;
    println!("Market order filled: {} shares", filled);

    print_book_state(&book);

    // Scenario 4: order cancellation
    println!("=== Scenario 4: Order Cancellation ===");
    println!("Cancelling order ID 3\n");

    if book.cancel_order(3) {
        println!("Order 3 cancelled successfully");
    }

    print_book_state(&book);

    // Scenario 5: high-volume run
    println!("=== Scenario 5: Performance Test ===");
    println!("Adding 10,000 orders...\n");

    let mut quiet_book = OrderBook::new("PERF");
    for i in 0..10_000u64 {
        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
        let price = if side == Side::Buy {
            9_000 + (i as i64 % 500)
        } else {
            10_500 + (i as i64 % 500)
        };
        quiet_book.add_limit_order(100 + i, side, price, 100)?;
    }

    print_book_state(&quiet_book);
    println!("{}", quiet_book.metrics().summary());

    Ok(())
}
