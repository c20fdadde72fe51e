//! Append-only transaction ledger
//!
//! Records every executed trade in execution order. The most recent entry
//! doubles as the reference price when a market-order remainder has to be
//! converted into a limit order.

use types::transaction::Transaction;

/// Append-only record of executed trades
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Append a transaction
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// The most recently recorded transaction, if any
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Full history in chronological (append) order
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check whether nothing has traded yet
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
