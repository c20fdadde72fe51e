//! Exchange core
//!
//! Owns the book and the ledger, serializes every match-and-rest sequence
//! behind one lock, and applies the resting policy to whatever the matching
//! pass leaves unfilled.

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use types::order::{LimitOrder, Order};
use types::transaction::Transaction;

use crate::book::{Book, BookQueue};
use crate::ledger::TransactionLedger;
use crate::matching::{execute_limit, execute_market, Execution, FillState};

/// Rejection of an order submission
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// A market-order remainder cannot be priced because the asset has
    /// never traded. Distinct from a no-fill: the order is not rested.
    #[error("cannot price market order: no prior trades")]
    NoReferencePrice,
}

/// Book contents for external display, ordered by each side's priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSnapshot {
    pub sell_side: Vec<LimitOrder>,
    pub buy_side: Vec<LimitOrder>,
}

/// Single-asset exchange: book, ledger, and the matching entry point
///
/// All mutable state lives behind one mutex so a full match-and-rest
/// sequence completes before the next begins, no matter how many
/// submissions arrive concurrently. Partial interleaving of two matches
/// would break price-time priority and could hand the same resting
/// liquidity to two takers.
pub struct Exchange {
    state: Mutex<BookState>,
}

struct BookState {
    book: Book,
    ledger: TransactionLedger,
}

impl Exchange {
    /// Create a new exchange with an empty book and ledger
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BookState {
                book: Book::new(),
                ledger: TransactionLedger::new(),
            }),
        }
    }

    /// Submit an order for matching
    ///
    /// The single entry point. Matches the order against the opposite
    /// side's queue, then rests any remainder on the order's own side — a
    /// market remainder is first converted to a limit order at the last
    /// traded price. With no reference price available the submission is
    /// rejected whole: no trades, no resting, book unchanged.
    ///
    /// `timestamp` is the caller's clock reading in Unix nanos; every
    /// trade produced by this call is stamped with it.
    pub fn submit_order(&self, order: Order, timestamp: i64) -> Result<Execution, SubmitError> {
        let mut state = self.state.lock();
        let BookState { book, ledger } = &mut *state;

        let side = order.side();
        let execution = match order {
            Order::Market(market) => {
                execute_market(market, book.opposite_mut(side), ledger, timestamp)
            }
            Order::Limit(limit) => execute_limit(limit, book.opposite_mut(side), ledger, timestamp),
        };

        if execution.fill_state == FillState::Full {
            return Ok(execution);
        }

        // Partial or no fill: the remainder becomes a resting limit order
        match execution.residual {
            Order::Limit(limit) => book.side_mut(side).insert(limit),
            Order::Market(market) => {
                let Some(last) = ledger.last() else {
                    return Err(SubmitError::NoReferencePrice);
                };
                book.side_mut(side).insert(market.to_limit(last.price));
            }
        }

        Ok(execution)
    }

    /// Current book contents, both sides in priority order
    pub fn book_snapshot(&self) -> BookSnapshot {
        let state = self.state.lock();
        BookSnapshot {
            sell_side: state.book.asks().snapshot(),
            buy_side: state.book.bids().snapshot(),
        }
    }

    /// Full trade history in chronological order
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.state.lock().ledger.history().to_vec()
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}
