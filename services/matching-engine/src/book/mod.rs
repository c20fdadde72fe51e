//! Order book infrastructure module
//!
//! Contains price levels, the bid and ask side books, and the dual-queue
//! book facade the engine dispatches on.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::PriceLevel;

use types::order::{LimitOrder, Side};

/// Common interface over one side of the book
///
/// The matching algorithms are written once against this seam; the two
/// concrete side books differ only in which end of the price range is
/// "best" (lowest ask vs highest bid).
pub trait BookQueue {
    /// Best resting order without removing it
    fn peek(&self) -> Option<&LimitOrder>;

    /// Remove and return the best resting order
    fn pop(&mut self) -> Option<LimitOrder>;

    /// Insert an order at its price-time position
    fn insert(&mut self, order: LimitOrder);

    /// Check if the side holds no orders
    fn is_empty(&self) -> bool;

    /// All resting orders in priority order (best first)
    fn snapshot(&self) -> Vec<LimitOrder>;
}

/// The two-sided book for a single asset
///
/// Owns both side queues; the engine borrows one side at a time, so a
/// matching pass against the opposite queue and the subsequent resting
/// insert on the order's own side are sequential borrows.
#[derive(Debug, Clone, Default)]
pub struct Book {
    bids: BidBook,
    asks: AskBook,
}

impl Book {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// Queue where orders of the given side rest
    pub fn side_mut(&mut self, side: Side) -> &mut dyn BookQueue {
        match side {
            Side::BUY => &mut self.bids,
            Side::SELL => &mut self.asks,
        }
    }

    /// Queue an order of the given side matches against
    pub fn opposite_mut(&mut self, side: Side) -> &mut dyn BookQueue {
        self.side_mut(side.opposite())
    }

    /// The bid (buy) side
    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    /// The ask (sell) side
    pub fn asks(&self) -> &AskBook {
        &self.asks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};

    const T0: i64 = 1708123456789000000;

    fn limit(side: Side, price: u64, qty: &str, submitted_at: i64) -> LimitOrder {
        LimitOrder::new(
            side,
            Price::from_u64(price),
            Quantity::from_str(qty).unwrap(),
            submitted_at,
        )
    }

    #[test]
    fn test_side_dispatch() {
        let mut book = Book::new();
        book.side_mut(Side::BUY)
            .insert(limit(Side::BUY, 99, "1.0", T0));
        book.side_mut(Side::SELL)
            .insert(limit(Side::SELL, 101, "2.0", T0));

        assert_eq!(book.bids().snapshot().len(), 1);
        assert_eq!(book.asks().snapshot().len(), 1);
    }

    #[test]
    fn test_opposite_dispatch() {
        let mut book = Book::new();
        book.side_mut(Side::SELL)
            .insert(limit(Side::SELL, 101, "2.0", T0));

        // A buy order matches against the ask side
        let best = book.opposite_mut(Side::BUY).peek().unwrap();
        assert_eq!(best.side, Side::SELL);
        assert!(book.opposite_mut(Side::SELL).is_empty());
    }
}
