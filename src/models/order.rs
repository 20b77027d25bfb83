use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MarketShare, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum OrderAction {
    Buy,
    Sell,
    Hold,
}

impl OrderAction {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderAction::Buy => "BUY",
            OrderAction::Sell => "SELL",
            OrderAction::Hold => "HOLD",
        }
    }
}

impl FromStr for OrderAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(OrderAction::Buy),
            "SELL" => Ok(OrderAction::Sell),
            "HOLD" => Ok(OrderAction::Hold),
            other => Err(format!("Unknown order action '{other}'.")),
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Allowed moves. Re-entering `Cancelled` is accepted so cancellation stays idempotent;
    /// every other move out of a terminal state is rejected.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Pending, OrderStatus::Completed)
                | (OrderStatus::Cancelled, OrderStatus::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted order. `value` is the total order value, not the unit price.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub executor_id: i64,
    pub account_id: Option<i64>,
    pub share_id: i64,
    pub created_at: DateTime<Utc>,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
    pub action: OrderAction,
    pub value: f64,
    pub status: OrderStatus,
}

impl Order {
    pub fn unit_price(&self) -> Option<f64> {
        unit_price(self.value, self.quantity)
    }
}

pub fn unit_price(value: f64, quantity: i64) -> Option<f64> {
    if quantity == 0 {
        return None;
    }
    Some(value / quantity as f64)
}

/// An order that has been validated and resolved but not yet written.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub executor: User,
    pub account_id: Option<i64>,
    pub market_share: MarketShare,
    pub created_at: DateTime<Utc>,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
    pub action: OrderAction,
    pub value: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub executor_id: Option<i64>,
    pub ticker: Option<String>,
    pub quantity: Option<i64>,
    pub action: Option<String>,
    pub value: Option<f64>,
    pub account_id: Option<i64>,
}
