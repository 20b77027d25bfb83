use sqlx::SqlitePool;

use crate::models::{DailyReport, NewDailyReport};

pub async fn insert(db: &SqlitePool, report: &NewDailyReport) -> Result<i64, sqlx::Error> {
    let res = sqlx::query("INSERT INTO daily_reports (ticker, createdAt, quantity, liquidity) VALUES (?, ?, ?, ?)")
        .bind(&report.ticker)
        .bind(report.created_at)
        .bind(report.quantity)
        .bind(report.liquidity)
        .execute(db)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<DailyReport>, sqlx::Error> {
    sqlx::query_as::<_, DailyReport>(
        "SELECT id, ticker, createdAt AS created_at, quantity, liquidity FROM daily_reports ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<DailyReport>, sqlx::Error> {
    sqlx::query_as::<_, DailyReport>(
        "SELECT id, ticker, createdAt AS created_at, quantity, liquidity FROM daily_reports WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn find_by_ticker(db: &SqlitePool, ticker: &str) -> Result<Vec<DailyReport>, sqlx::Error> {
    sqlx::query_as::<_, DailyReport>(
        "SELECT id, ticker, createdAt AS created_at, quantity, liquidity
         FROM daily_reports WHERE ticker = ? ORDER BY id",
    )
    .bind(ticker)
    .fetch_all(db)
    .await
}

pub async fn update(db: &SqlitePool, id: i64, report: &NewDailyReport) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        "UPDATE daily_reports SET ticker = ?, createdAt = ?, quantity = ?, liquidity = ? WHERE id = ?",
    )
    .bind(&report.ticker)
    .bind(report.created_at)
    .bind(report.quantity)
    .bind(report.liquidity)
    .bind(id)
    .execute(db)
    .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM daily_reports WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
