//! Library entrypoint for RustBroker.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

use sqlx::SqlitePool;

pub mod config;
pub mod error;
pub mod models;

// Kept at crate root so controllers can reach it as `crate::render`.
#[path = "views/render.rs"]
pub mod render;

pub mod repositories;
pub mod services;

pub mod controllers;
pub mod routes;

/// Shared handles for every request. Built by `connect`, which returns only once
/// both pools are open and their schema exists.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub reports_db: SqlitePool,
    pub settings: config::Settings,
}

impl AppState {
    pub async fn connect(settings: config::Settings) -> Result<Self, sqlx::Error> {
        let db = services::db_init::open_primary(&settings.database_url, settings.db_max_connections).await?;
        let reports_db =
            services::db_init::open_reports(&settings.report_database_url, settings.db_max_connections).await?;

        Ok(Self {
            db,
            reports_db,
            settings,
        })
    }
}
