use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MarketShare {
    pub id: i64,
    pub ticker: String,
    pub name: String,
    pub current_value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketShareInput {
    pub ticker: String,
    pub name: String,
    #[serde(alias = "currentValue")]
    pub current_value: f64,
}

/// One row of the share catalog: the share plus the unit price of its most recent order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub ticker: String,
    pub last_price: Option<f64>,
}
