//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::Price;
use types::order::LimitOrder;

use super::price_level::PriceLevel;
use super::BookQueue;

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is first.
/// At each price level, orders execute in submission-time order.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    /// Price levels keyed ascending; the best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Get the best bid price (highest)
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl BookQueue for BidBook {
    fn peek(&self) -> Option<&LimitOrder> {
        // BTreeMap iter is ascending, so the last level is the best bid
        self.levels
            .values()
            .next_back()
            .and_then(PriceLevel::peek_front)
    }

    fn pop(&mut self) -> Option<LimitOrder> {
        let mut entry = self.levels.last_entry()?;
        let order = entry.get_mut().pop_front();
        // Remove empty price levels to keep the book clean
        if entry.get().is_empty() {
            entry.remove();
        }
        order
    }

    fn insert(&mut self, order: LimitOrder) {
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .insert(order);
    }

    fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn snapshot(&self) -> Vec<LimitOrder> {
        self.levels
            .values()
            .rev() // Reverse to get highest prices first
            .flat_map(|level| level.iter().copied())
            .collect()
    }
}
