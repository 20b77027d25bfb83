use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::{User, UserInput};

pub async fn insert<'e, E>(db: E, user: &UserInput) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query("INSERT INTO users (document, first_name, last_name) VALUES (?, ?, ?)")
        .bind(&user.document)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(db)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, document, first_name, last_name FROM users ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, document, first_name, last_name FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Returns false when no row has that id.
pub async fn update(db: &SqlitePool, id: i64, user: &UserInput) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("UPDATE users SET document = ?, first_name = ?, last_name = ? WHERE id = ?")
        .bind(&user.document)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
