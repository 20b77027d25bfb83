use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NewOrder;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: i64,
    pub ticker: String,
    pub created_at: DateTime<Utc>,
    pub quantity: i64,
    pub liquidity: f64,
}

/// Report fields as written; also the body of the administrative update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyReport {
    pub ticker: String,
    pub created_at: DateTime<Utc>,
    pub quantity: i64,
    pub liquidity: f64,
}

impl NewDailyReport {
    /// liquidity = value * quantity of the originating order
    pub fn from_order(order: &NewOrder) -> Self {
        Self {
            ticker: order.market_share.ticker.clone(),
            created_at: order.created_at,
            quantity: order.quantity,
            liquidity: order.value * order.quantity as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{MarketShare, OrderAction, OrderStatus, User};

    #[test]
    fn report_is_derived_from_order() {
        let now = Utc::now();
        let order = NewOrder {
            executor: User {
                id: 1,
                document: "123".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
            },
            account_id: Some(4),
            market_share: MarketShare {
                id: 9,
                ticker: "PETR4".into(),
                name: "Petrobras".into(),
                current_value: 30.0,
            },
            created_at: now,
            quantity: 10,
            updated_at: now,
            action: OrderAction::Buy,
            value: 150.0,
            status: OrderStatus::Pending,
        };

        let report = NewDailyReport::from_order(&order);
        assert_eq!(report.ticker, "PETR4");
        assert_eq!(report.created_at, now);
        assert_eq!(report.quantity, 10);
        assert_eq!(report.liquidity, 1500.0);
    }
}
