use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_opts = SqlitePoolOptions::new().max_connections(max_connections.max(1));

    // an in-memory database lives only as long as its single connection
    if url.contains(":memory:") {
        pool_opts = pool_opts
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_opts.connect_with(opts).await
}

/// Opens the primary store (users, accounts, shares, orders) and ensures its schema.
pub async fn open_primary(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(url, max_connections).await?;
    ensure_schema(&pool).await?;
    tracing::info!("primary database ready");
    Ok(pool)
}

/// Opens the reporting store (daily_reports) and ensures its schema.
pub async fn open_reports(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(url, max_connections).await?;
    ensure_report_schema(&pool).await?;
    tracing::info!("reporting database ready");
    Ok(pool)
}

pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            document TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )",
    )
    .execute(db)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id)
        )",
    )
    .execute(db)
    .await?;

    // shares: ticker is the lookup key for order placement
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS shares (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ticker TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            current_value REAL NOT NULL
        )",
    )
    .execute(db)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            executor_id INTEGER NOT NULL,
            account_id INTEGER,
            share_id INTEGER NOT NULL,
            createdAt TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            updatedAt TEXT NOT NULL,
            action TEXT NOT NULL,
            value REAL NOT NULL,
            status TEXT NOT NULL,
            FOREIGN KEY (executor_id) REFERENCES users(id),
            FOREIGN KEY (share_id) REFERENCES shares(id)
        )",
    )
    .execute(db)
    .await?;

    // orders: catalog reads the latest order per share
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_share_created ON orders (share_id, createdAt DESC)")
        .execute(db)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_executor ON orders (executor_id)")
        .execute(db)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_account ON orders (account_id)")
        .execute(db)
        .await?;

    Ok(())
}

pub async fn ensure_report_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS daily_reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ticker TEXT NOT NULL,
            createdAt TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            liquidity REAL NOT NULL
        )",
    )
    .execute(db)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_daily_reports_ticker ON daily_reports (ticker)")
        .execute(db)
        .await?;

    Ok(())
}

/// Round-trips a trivial statement on both stores.
pub async fn ping(db: &SqlitePool, reports_db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(db).await?;
    sqlx::query("SELECT 1").execute(reports_db).await?;
    Ok(())
}
