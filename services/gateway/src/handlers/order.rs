use crate::error::AppError;
use crate::models::{OrderKind, SubmitOrderRequest, SubmitOrderResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use matching_engine::FillState;
use std::time::{SystemTime, UNIX_EPOCH};
use types::numeric::{Price, Quantity};
use types::order::{LimitOrder, MarketOrder, Order};

pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>, AppError> {
    let submitted_at = now_nanos();
    let order = build_order(payload, submitted_at)?;

    let execution = state.exchange.submit_order(order, submitted_at)?;

    let message = match execution.fill_state {
        FillState::Full => "fully executed",
        FillState::Partial => "partially executed, remainder resting",
        FillState::NoFill => "no match, order resting",
    };

    Ok(Json(SubmitOrderResponse {
        success: true,
        message,
        order: execution.residual,
        trades: execution.trades,
    }))
}

/// Validate the raw payload and build a well-typed order
///
/// The matching core assumes well-formed input, so every rule is enforced
/// here: positive quantity, and a positive price on limit orders.
fn build_order(payload: SubmitOrderRequest, submitted_at: i64) -> Result<Order, AppError> {
    let quantity = Quantity::try_new(payload.quantity)
        .filter(|quantity| !quantity.is_zero())
        .ok_or_else(|| AppError::BadRequest("quantity must be positive".into()))?;

    match payload.kind {
        OrderKind::Market => Ok(Order::Market(MarketOrder::new(
            payload.side,
            quantity,
            submitted_at,
        ))),
        OrderKind::Limit => {
            let raw = payload
                .price
                .ok_or_else(|| AppError::BadRequest("limit orders require a price".into()))?;
            let price = Price::try_new(raw)
                .ok_or_else(|| AppError::BadRequest("price must be positive".into()))?;
            Ok(Order::Limit(LimitOrder::new(
                payload.side,
                price,
                quantity,
                submitted_at,
            )))
        }
    }
}

fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or(0)
}
