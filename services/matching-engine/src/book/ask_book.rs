//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::Price;
use types::order::LimitOrder;

use super::price_level::PriceLevel;
use super::BookQueue;

/// Ask (sell) side order book
///
/// Orders are sorted by price ascending, so the lowest ask is first.
/// At each price level, orders execute in submission-time order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    /// Price levels sorted ascending (lowest price first)
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Get the best ask price (lowest)
    pub fn best_ask_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl BookQueue for AskBook {
    fn peek(&self) -> Option<&LimitOrder> {
        // BTreeMap iter is ascending, so the first level is the best ask
        self.levels.values().next().and_then(PriceLevel::peek_front)
    }

    fn pop(&mut self) -> Option<LimitOrder> {
        let mut entry = self.levels.first_entry()?;
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
            .flat_map(|level| level.iter().copied())
            .collect()
    }
}
