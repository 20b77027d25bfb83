use chrono::Utc;

use crate::{
    error::{ServiceError, ServiceResult},
    models::{CreateOrderRequest, NewOrder, Order, OrderAction, OrderStatus},
    repositories::{daily_report_repository, order_repository, user_repository},
    AppState,
};

use super::{daily_report_service, market_shares_service};

/// Request fields after presence checks.
#[derive(Debug)]
struct ValidOrder {
    executor_id: i64,
    ticker: String,
    quantity: i64,
    action: OrderAction,
    value: f64,
    account_id: Option<i64>,
}

fn missing_fields(missing: &[&str]) -> ServiceError {
    ServiceError::Validation(format!(
        "Missing required parameters for creating order: {}.",
        missing.join(", ")
    ))
}

fn validate(req: CreateOrderRequest) -> ServiceResult<ValidOrder> {
    let mut missing: Vec<&str> = vec![];

    if req.executor_id.is_none() {
        missing.push("executorId");
    }
    let ticker = req.ticker.map(|t| t.trim().to_string()).unwrap_or_default();
    if ticker.is_empty() {
        missing.push("ticker");
    }
    if req.quantity.is_none() {
        missing.push("quantity");
    }
    if req.action.is_none() {
        missing.push("action");
    }
    if req.value.is_none() {
        missing.push("value");
    }

    let fields = (req.executor_id, req.quantity, req.action, req.value);
    let (Some(executor_id), Some(quantity), Some(action), Some(value)) = fields else {
        return Err(missing_fields(&missing));
    };
    if !missing.is_empty() {
        return Err(missing_fields(&missing));
    }

    if quantity <= 0 {
        return Err(ServiceError::Validation("Quantity must be greater than zero.".into()));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::Validation("Enter a valid order value.".into()));
    }
    if !(value * quantity as f64).is_finite() {
        return Err(ServiceError::Validation("Order liquidity is out of range.".into()));
    }
    let action: OrderAction = action.parse().map_err(ServiceError::Validation)?;

    Ok(ValidOrder {
        executor_id,
        ticker,
        quantity,
        action,
        value,
        account_id: req.account_id,
    })
}

/// Places an order: resolves executor and share, appends the daily report, then
/// writes the order. Nothing is written unless both lookups succeed.
///
/// The two writes land in different stores. If the order write fails after the
/// report was appended, the report is deleted again; if that delete also fails
/// the orphaned report is only logged.
pub async fn create_order(state: &AppState, req: CreateOrderRequest) -> ServiceResult<i64> {
    let req = validate(req)?;

    let Some(executor) = user_repository::find_by_id(&state.db, req.executor_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "Executor with id {} not found.",
            req.executor_id
        )));
    };

    let Some(market_share) = market_shares_service::get_market_shares_by_ticker(state, &req.ticker).await? else {
        return Err(ServiceError::NotFound(format!(
            "Market share with ticker {} not found.",
            req.ticker
        )));
    };

    let now = Utc::now();
    let order = NewOrder {
        executor,
        account_id: req.account_id,
        market_share,
        created_at: now,
        quantity: req.quantity,
        updated_at: now,
        action: req.action,
        value: req.value,
        status: OrderStatus::Pending,
    };

    let report_id = daily_report_service::add_new_report(state, &order).await?;

    let order_id = match order_repository::insert(&state.db, &order).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(report_id, "order write failed after report append, discarding report");
            if let Err(undo) = daily_report_repository::delete(&state.reports_db, report_id).await {
                tracing::error!(report_id, "could not discard report: {undo}");
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        order_id,
        executor_id = order.executor.id,
        ticker = %order.market_share.ticker,
        action = %order.action,
        "order placed"
    );

    Ok(order_id)
}

pub async fn get_order(state: &AppState, id: i64) -> ServiceResult<Order> {
    order_repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Order with id {id} not found.")))
}

pub async fn get_all_orders(state: &AppState) -> ServiceResult<Vec<Order>> {
    Ok(order_repository::find_all(&state.db).await?)
}

pub async fn get_orders_by_user_id(state: &AppState, user_id: i64) -> ServiceResult<Vec<Order>> {
    Ok(order_repository::find_by_executor(&state.db, user_id).await?)
}

pub async fn get_orders_by_account_id(state: &AppState, account_id: i64) -> ServiceResult<Vec<Order>> {
    Ok(order_repository::find_by_account(&state.db, account_id).await?)
}

/// Moves an order to `next` if the transition table allows it. Re-entering the
/// current state is a no-op that leaves `updatedAt` alone.
pub async fn transition_order(state: &AppState, id: i64, next: OrderStatus) -> ServiceResult<Order> {
    let current = get_order(state, id).await?;

    if !current.status.can_transition_to(next) {
        return Err(ServiceError::Validation(format!(
            "Order with id {id} is {} and cannot become {next}.",
            current.status
        )));
    }
    if current.status == next {
        return Ok(current);
    }

    let now = Utc::now();
    if order_repository::update_status(&state.db, id, current.status, next, now).await? {
        tracing::info!(order_id = id, from = %current.status, to = %next, "order status changed");
        return Ok(Order {
            status: next,
            updated_at: now,
            ..current
        });
    }

    // status changed underneath us
    let latest = get_order(state, id).await?;
    if latest.status == next {
        return Ok(latest);
    }
    Err(ServiceError::Validation(format!(
        "Order with id {id} is {} and cannot become {next}.",
        latest.status
    )))
}

pub async fn cancel_order(state: &AppState, id: i64) -> ServiceResult<Order> {
    transition_order(state, id, OrderStatus::Cancelled).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateOrderRequest {
        CreateOrderRequest {
            executor_id: Some(1),
            ticker: Some("PETR4".into()),
            quantity: Some(10),
            action: Some("buy".into()),
            value: Some(150.0),
            account_id: Some(2),
        }
    }

    #[test]
    fn accepts_complete_request() {
        let v = validate(full_request()).unwrap();
        assert_eq!(v.executor_id, 1);
        assert_eq!(v.ticker, "PETR4");
        assert_eq!(v.action, OrderAction::Buy);
        assert_eq!(v.account_id, Some(2));
    }

    #[test]
    fn reports_every_missing_field() {
        let err = validate(CreateOrderRequest::default()).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ServiceError::Validation(_)));
        for field in ["executorId", "ticker", "quantity", "action", "value"] {
            assert!(msg.contains(field), "{msg} should mention {field}");
        }
    }

    #[test]
    fn blank_ticker_counts_as_missing() {
        let req = CreateOrderRequest {
            ticker: Some("   ".into()),
            ..full_request()
        };
        assert!(validate(req).unwrap_err().to_string().contains("ticker"));
    }

    #[test]
    fn zero_value_is_present_but_zero_quantity_is_rejected() {
        let zero_value = CreateOrderRequest {
            value: Some(0.0),
            ..full_request()
        };
        assert!(validate(zero_value).is_ok());

        let zero_qty = CreateOrderRequest {
            quantity: Some(0),
            ..full_request()
        };
        assert!(matches!(validate(zero_qty), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn overflowing_liquidity_is_rejected() {
        let req = CreateOrderRequest {
            quantity: Some(1000),
            value: Some(1e307),
            ..full_request()
        };
        assert!(matches!(validate(req), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let req = CreateOrderRequest {
            action: Some("short".into()),
            ..full_request()
        };
        assert!(matches!(validate(req), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn account_id_is_optional() {
        let req = CreateOrderRequest {
            account_id: None,
            ..full_request()
        };
        assert_eq!(validate(req).unwrap().account_id, None);
    }
}
