//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point,
//! ordered by submission time to enforce strict time priority.

use std::collections::VecDeque;
use types::order::LimitOrder;

/// A price level containing orders at a specific price
///
/// Orders are kept sorted by `submitted_at` ascending. Insertion scans from
/// the back, so a freshly submitted order (newest timestamp) appends in
/// O(1), while the remainder of a partially consumed front order returns to
/// the front of its level — the same position a fresh insert of an order
/// with that timestamp would take.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Queue of orders at this price level (earliest submission first)
    orders: VecDeque<LimitOrder>,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
        }
    }

    /// Insert an order at its time-priority position
    pub fn insert(&mut self, order: LimitOrder) {
        let position = self
            .orders
            .iter()
            .rposition(|resting| resting.submitted_at <= order.submitted_at)
            .map(|index| index + 1)
            .unwrap_or(0);
        self.orders.insert(position, order);
    }

    /// Peek at the front order without removing it
    pub fn peek_front(&self) -> Option<&LimitOrder> {
        self.orders.front()
    }

    /// Pop the front order from the queue
    pub fn pop_front(&mut self) -> Option<LimitOrder> {
        self.orders.pop_front()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate orders in time-priority order
    pub fn iter(&self) -> impl Iterator<Item = &LimitOrder> {
        self.orders.iter()
    }
}
