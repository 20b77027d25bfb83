use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub report_database_url: String,
    pub db_max_connections: u32,

    pub host: String,
    pub port: u16,
    pub report_port: u16,
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://database.sqlite?mode=rwc".to_string());

    let report_database_url = env::var("REPORT_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://database-etl.sqlite?mode=rwc".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    Settings {
        database_url,
        report_database_url,
        db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
        host,
        port: parse_or("SERVER_PORT", 3000),
        report_port: parse_or("SERVER_PORT_ETL", 4000),
    }
}
