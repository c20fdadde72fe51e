//! Executed trade records
//!
//! A transaction is produced only by a successful match between an incoming
//! order and a resting limit order. Records are immutable and live forever
//! in the append-only ledger.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An atomic exchange between a seller and a buyer
///
/// The price is always the resting order's price (price-time priority
/// favors the order that was already in the book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub seller: OrderId,
    pub buyer: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    pub executed_at: i64, // Unix nanos
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(
        seller: OrderId,
        buyer: OrderId,
        price: Price,
        quantity: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            seller,
            buyer,
            price,
            quantity,
            executed_at,
        }
    }

    /// Notional value (price × quantity)
    pub fn trade_value(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1708123456789000000;

    #[test]
    fn test_transaction_creation() {
        let seller = OrderId::new();
        let buyer = OrderId::new();
        let tx = Transaction::new(
            seller,
            buyer,
            Price::from_u64(100),
            Quantity::from_str("2.5").unwrap(),
            T0,
        );

        assert_eq!(tx.seller, seller);
        assert_eq!(tx.buyer, buyer);
        assert_eq!(tx.executed_at, T0);
    }

    #[test]
    fn test_trade_value() {
        let tx = Transaction::new(
            OrderId::new(),
            OrderId::new(),
            Price::from_u64(100),
            Quantity::from_str("2.5").unwrap(),
            T0,
        );

        assert_eq!(tx.trade_value(), Decimal::from(250));
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = Transaction::new(
            OrderId::new(),
            OrderId::new(),
            Price::from_str("99.9999").unwrap(),
            Quantity::from_str("0.0001").unwrap(),
            T0,
        );

        let json = serde_json::to_string(&tx).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, tx);
    }
}
