use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use sqlx::SqlitePool;

use crate::models::{NewOrder, Order, OrderStatus};

pub async fn insert(db: &SqlitePool, order: &NewOrder) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO orders (executor_id, account_id, share_id, createdAt, quantity, updatedAt, action, value, status)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(order.executor.id)
    .bind(order.account_id)
    .bind(order.market_share.id)
    .bind(order.created_at)
    .bind(order.quantity)
    .bind(order.updated_at)
    .bind(order.action)
    .bind(order.value)
    .bind(order.status)
    .execute(db)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, executor_id, account_id, share_id, createdAt AS created_at, quantity,
                updatedAt AS updated_at, action, value, status
         FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, executor_id, account_id, share_id, createdAt AS created_at, quantity,
                updatedAt AS updated_at, action, value, status
         FROM orders ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_executor(db: &SqlitePool, executor_id: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, executor_id, account_id, share_id, createdAt AS created_at, quantity,
                updatedAt AS updated_at, action, value, status
         FROM orders WHERE executor_id = ? ORDER BY id",
    )
    .bind(executor_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_account(db: &SqlitePool, account_id: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, executor_id, account_id, share_id, createdAt AS created_at, quantity,
                updatedAt AS updated_at, action, value, status
         FROM orders WHERE account_id = ? ORDER BY id",
    )
    .bind(account_id)
    .fetch_all(db)
    .await
}

/// Most recent order for a share by `createdAt` (ties broken by id), read as the
/// first row of the share's orders newest-first.
pub async fn find_latest_for_share(db: &SqlitePool, share_id: i64) -> Result<Option<Order>, sqlx::Error> {
    let mut rows = sqlx::query_as::<_, Order>(
        "SELECT id, executor_id, account_id, share_id, createdAt AS created_at, quantity,
                updatedAt AS updated_at, action, value, status
         FROM orders WHERE share_id = ? ORDER BY createdAt DESC, id DESC",
    )
    .bind(share_id)
    .fetch(db);

    rows.try_next().await
}

/// Compare-and-set on status. Returns false when the order is missing or no
/// longer in `from`.
pub async fn update_status(
    db: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
    updated_at: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("UPDATE orders SET status = ?, updatedAt = ? WHERE id = ? AND status = ?")
        .bind(to)
        .bind(updated_at)
        .bind(id)
        .bind(from)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
