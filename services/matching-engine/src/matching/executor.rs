//! Market and limit execution
//!
//! Both algorithms consume the opposite side's queue in priority order,
//! record each trade in the ledger the moment it happens, and report the
//! incoming order's unfilled remainder.

use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::{LimitOrder, MarketOrder, Order, Side};
use types::transaction::Transaction;

use crate::book::BookQueue;
use crate::ledger::TransactionLedger;
use crate::matching::crossing;

/// How much of the incoming order was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    /// The entire quantity traded
    Full,
    /// Some quantity traded, some remains
    Partial,
    /// Nothing traded
    NoFill,
}

/// Outcome of one matching pass
///
/// `residual` carries the incoming order with its quantity reduced to
/// whatever remains unfilled: zero after a full fill, the original
/// quantity after no fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub fill_state: FillState,
    pub trades: Vec<Transaction>,
    pub residual: Order,
}

/// Arrange seller and buyer ids from the incoming/resting pair
///
/// The seller is whichever party is on the sell side.
fn arrange_seller_buyer(
    incoming: OrderId,
    resting: OrderId,
    incoming_side: Side,
) -> (OrderId, OrderId) {
    match incoming_side {
        Side::SELL => (incoming, resting),
        Side::BUY => (resting, incoming),
    }
}

fn classify(trades: &[Transaction], remaining: Quantity) -> FillState {
    if trades.is_empty() {
        FillState::NoFill
    } else if !remaining.is_zero() {
        FillState::Partial
    } else {
        FillState::Full
    }
}

/// Consume one resting order against the remaining demand
///
/// Records the trade, re-inserts the resting remainder when the resting
/// order outsizes the demand, and returns the demand left afterwards.
#[allow(clippy::too_many_arguments)]
fn fill_against(
    resting: LimitOrder,
    demand: Quantity,
    seller: OrderId,
    buyer: OrderId,
    queue: &mut dyn BookQueue,
    ledger: &mut TransactionLedger,
    trades: &mut Vec<Transaction>,
    timestamp: i64,
) -> Quantity {
    if resting.quantity > demand {
        // More supply than demand: trade the full demand at the resting
        // price and return the remainder of the resting order to the book
        let trade = Transaction::new(seller, buyer, resting.price, demand, timestamp);
        ledger.record(trade);
        trades.push(trade);

        let leftover = resting.quantity.saturating_sub(demand);
        queue.insert(resting.with_quantity(leftover));
        Quantity::zero()
    } else {
        // Resting order exhausted: trade its full quantity and keep going
        let trade = Transaction::new(seller, buyer, resting.price, resting.quantity, timestamp);
        ledger.record(trade);
        trades.push(trade);

        demand.saturating_sub(resting.quantity)
    }
}

/// Execute a market order against the opposite side's queue
///
/// Runs until demand is exhausted or the queue empties. Trades are
/// appended to the ledger in loop order, which is price-time priority
/// order.
pub fn execute_market(
    incoming: MarketOrder,
    queue: &mut dyn BookQueue,
    ledger: &mut TransactionLedger,
    timestamp: i64,
) -> Execution {
    let mut demand = incoming.quantity;
    let mut trades = Vec::new();

    while !demand.is_zero() {
        let Some(resting) = queue.pop() else {
            break;
        };
        let (seller, buyer) = arrange_seller_buyer(incoming.id, resting.id, incoming.side);
        demand = fill_against(
            resting, demand, seller, buyer, queue, ledger, &mut trades, timestamp,
        );
    }

    Execution {
        fill_state: classify(&trades, demand),
        trades,
        residual: Order::Market(incoming.with_quantity(demand)),
    }
}

/// Execute a limit order against the opposite side's queue
///
/// Identical loop to market execution, except the queue's top is only
/// peeked until the price check passes: when the best resting price no
/// longer satisfies the limit, the loop stops without disturbing the book.
pub fn execute_limit(
    incoming: LimitOrder,
    queue: &mut dyn BookQueue,
    ledger: &mut TransactionLedger,
    timestamp: i64,
) -> Execution {
    let mut remaining = incoming.quantity;
    let mut trades = Vec::new();

    while !remaining.is_zero() {
        let Some(best) = queue.peek() else {
            break;
        };
        if !crossing::incoming_can_match(incoming.side, incoming.price, best.price) {
            break;
        }
        let Some(resting) = queue.pop() else {
            break;
        };
        let (seller, buyer) = arrange_seller_buyer(incoming.id, resting.id, incoming.side);
        remaining = fill_against(
            resting, remaining, seller, buyer, queue, ledger, &mut trades, timestamp,
        );
    }

    Execution {
        fill_state: classify(&trades, remaining),
        trades,
        residual: Order::Limit(incoming.with_quantity(remaining)),
    }
}
