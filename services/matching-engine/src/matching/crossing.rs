//! Crossing detection logic
//!
//! Determines whether the book's best resting price satisfies an incoming
//! limit order.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming limit order can match against a resting order
///
/// For a buy order the resting ask must be at or below the limit; for a
/// sell order the resting bid must be at or above it. Equal prices cross.
pub fn incoming_can_match(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::BUY => resting_price <= incoming_price,
        Side::SELL => resting_price >= incoming_price,
    }
}
