use crate::state::AppState;
use axum::{Json, extract::State};
use matching_engine::BookSnapshot;
use types::transaction::Transaction;

/// Current book contents, both sides in priority order
///
/// Reads acquire the same exclusive section as matching, so the snapshot
/// is consistent with completed submissions.
pub async fn get_book(State(state): State<AppState>) -> Json<BookSnapshot> {
    Json(state.exchange.book_snapshot())
}

/// Full trade history in chronological order
pub async fn get_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(state.exchange.transaction_history())
}
