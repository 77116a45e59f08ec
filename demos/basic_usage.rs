// ============================================================================
// Basic Usage Example
// ============================================================================

use stock_valuation::numeric::{Price, Shares, Worth};
use stock_valuation::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Stock Valuation Example ===\n");

    // Full-precision holding
    let mut holding = ValuationCalculator::new(
        Price::from_integer(10).unwrap(),
        Shares::from_integer(5).unwrap(),
    )
    .unwrap();
    println!("price={} shares={}", holding.price(), holding.shares());
    println!("worth={}\n", holding.worth());

    // Solve for shares from a target worth
    holding.set_worth(Worth::from_integer(125)).unwrap();
    println!("after set_worth(125): shares={}", holding.shares());

    // Cent-rounded prices
    let config = ValuationConfig::cents()
        .with_initial_price("123".parse().unwrap())
        .with_initial_shares(Shares::from_integer(3).unwrap());
    let mut rounded = ValuationCalculator::from_config(&config).unwrap();
    rounded.set_price("10.126".parse().unwrap()).unwrap();
    println!("\nrounded price={} worth={}", rounded.price(), rounded.worth());

    let snapshot = rounded.snapshot();
    println!(
        "snapshot at {}: {} x {} = {}",
        snapshot.taken_at(),
        snapshot.shares(),
        snapshot.price(),
        snapshot.worth()
    );

    // Zero price cannot be inverted
    rounded.set_price(Price::ZERO).unwrap();
    match rounded.set_worth(Worth::from_integer(100)) {
        Ok(()) => println!("\nunexpected success"),
        Err(e) => println!("\nset_worth at zero price failed: {}", e),
    }
}
