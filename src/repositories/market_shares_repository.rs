use sqlx::SqlitePool;

use crate::models::{MarketShare, MarketShareInput};

pub async fn insert(db: &SqlitePool, share: &MarketShareInput) -> Result<i64, sqlx::Error> {
    let res = sqlx::query("INSERT INTO shares (ticker, name, current_value) VALUES (?, ?, ?)")
        .bind(&share.ticker)
        .bind(&share.name)
        .bind(share.current_value)
        .execute(db)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<MarketShare>, sqlx::Error> {
    sqlx::query_as::<_, MarketShare>("SELECT id, ticker, name, current_value FROM shares ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<MarketShare>, sqlx::Error> {
    sqlx::query_as::<_, MarketShare>("SELECT id, ticker, name, current_value FROM shares WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Exact match on ticker.
pub async fn find_by_ticker(db: &SqlitePool, ticker: &str) -> Result<Option<MarketShare>, sqlx::Error> {
    sqlx::query_as::<_, MarketShare>("SELECT id, ticker, name, current_value FROM shares WHERE ticker = ?")
        .bind(ticker)
        .fetch_optional(db)
        .await
}

pub async fn update(db: &SqlitePool, id: i64, share: &MarketShareInput) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("UPDATE shares SET ticker = ?, name = ?, current_value = ? WHERE id = ?")
        .bind(&share.ticker)
        .bind(&share.name)
        .bind(share.current_value)
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM shares WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
