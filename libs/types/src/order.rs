//! Order variants and sides
//!
//! The two order kinds differ only in data shape (a market order carries no
//! price), so they are modeled as a tagged sum type and dispatched by
//! pattern matching in the matching algorithms. Orders are immutable once
//! constructed; a partial fill produces a copy with the quantity replaced.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A market order: executes against the best available resting prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub id: OrderId,
    pub side: Side,
    pub quantity: Quantity,
    pub submitted_at: i64, // Unix nanos
}

impl MarketOrder {
    /// Create a new market order with a fresh id
    pub fn new(side: Side, quantity: Quantity, submitted_at: i64) -> Self {
        Self {
            id: OrderId::new(),
            side,
            quantity,
            submitted_at,
        }
    }

    /// Copy of this order with the quantity replaced
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self { quantity, ..*self }
    }

    /// Convert into a limit order at the given price
    ///
    /// Used when an unfilled market remainder is rested on the book at the
    /// last traded price. Id and submission time are preserved, so the
    /// converted order keeps its time priority.
    pub fn to_limit(&self, price: Price) -> LimitOrder {
        LimitOrder {
            id: self.id,
            side: self.side,
            price,
            quantity: self.quantity,
            submitted_at: self.submitted_at,
        }
    }
}

/// A limit order: executes only at its limit price or better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub submitted_at: i64, // Unix nanos
}

impl LimitOrder {
    /// Create a new limit order with a fresh id
    pub fn new(side: Side, price: Price, quantity: Quantity, submitted_at: i64) -> Self {
        Self {
            id: OrderId::new(),
            side,
            price,
            quantity,
            submitted_at,
        }
    }

    /// Copy of this order with the quantity replaced
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self { quantity, ..*self }
    }
}

/// An incoming order, market or limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Order {
    Market(MarketOrder),
    Limit(LimitOrder),
}

impl Order {
    /// The order's unique id
    pub fn id(&self) -> OrderId {
        match self {
            Order::Market(order) => order.id,
            Order::Limit(order) => order.id,
        }
    }

    /// The order's side
    pub fn side(&self) -> Side {
        match self {
            Order::Market(order) => order.side,
            Order::Limit(order) => order.side,
        }
    }

    /// The order's (remaining) quantity
    pub fn quantity(&self) -> Quantity {
        match self {
            Order::Market(order) => order.quantity,
            Order::Limit(order) => order.quantity,
        }
    }

    /// Submission timestamp in Unix nanos
    pub fn submitted_at(&self) -> i64 {
        match self {
            Order::Market(order) => order.submitted_at,
            Order::Limit(order) => order.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1708123456789000000;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::BUY.opposite(), Side::SELL);
        assert_eq!(Side::SELL.opposite(), Side::BUY);
    }

    #[test]
    fn test_with_quantity_preserves_identity() {
        let order = LimitOrder::new(
            Side::SELL,
            Price::from_u64(100),
            Quantity::from_str("5.0").unwrap(),
            T0,
        );
        let reduced = order.with_quantity(Quantity::from_str("2.0").unwrap());

        assert_eq!(reduced.id, order.id);
        assert_eq!(reduced.price, order.price);
        assert_eq!(reduced.submitted_at, order.submitted_at);
        assert_eq!(reduced.quantity, Quantity::from_str("2.0").unwrap());
        // original is untouched
        assert_eq!(order.quantity, Quantity::from_str("5.0").unwrap());
    }

    #[test]
    fn test_market_to_limit_conversion() {
        let market = MarketOrder::new(Side::BUY, Quantity::from_str("3.0").unwrap(), T0);
        let limit = market.to_limit(Price::from_u64(100));

        assert_eq!(limit.id, market.id);
        assert_eq!(limit.side, Side::BUY);
        assert_eq!(limit.price, Price::from_u64(100));
        assert_eq!(limit.quantity, market.quantity);
        assert_eq!(limit.submitted_at, T0);
    }

    #[test]
    fn test_order_accessors() {
        let market = Order::Market(MarketOrder::new(
            Side::SELL,
            Quantity::from_str("1.0").unwrap(),
            T0,
        ));
        assert_eq!(market.side(), Side::SELL);
        assert_eq!(market.quantity(), Quantity::from_str("1.0").unwrap());
        assert_eq!(market.submitted_at(), T0);
    }

    #[test]
    fn test_order_serialization_is_tagged() {
        let order = Order::Limit(LimitOrder::new(
            Side::BUY,
            Price::from_str("99.5").unwrap(),
            Quantity::from_str("2.0").unwrap(),
            T0,
        ));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "limit");
        assert_eq!(json["side"], "buy");

        let deserialized: Order = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, order);
    }
}
