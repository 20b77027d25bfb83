use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::Account;

pub async fn insert<'e, E>(db: E, user_id: i64) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query("INSERT INTO accounts (user_id) VALUES (?)")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT id, user_id FROM accounts ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT id, user_id FROM accounts WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_by_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT id, user_id FROM accounts WHERE user_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(db)
        .await
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM accounts WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
