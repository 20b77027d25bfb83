use serde::Serialize;

use super::MarketShare;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub user_id: i64,

    // reserved: nothing populates holdings yet
    #[sqlx(skip)]
    pub shares: Vec<MarketShare>,
}
