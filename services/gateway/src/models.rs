use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::order::{Order, Side};
use types::transaction::Transaction;

/// Requested order kind; a market order carries no price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Market,
    Limit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOrderRequest {
    pub side: Side,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub message: &'static str,
    pub order: Order,
    pub trades: Vec<Transaction>,
}
