pub mod entities;

mod idea_repository;

pub use idea_repository::IdeaRepository;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::time::Duration;

pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opt).await
}

pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let migration = include_str!("../../../../migrations/001_initial.sql");

    for statement in migration.split(';') {
        let statement = statement.trim();
        if !statement.is_empty() {
            // Statements are IF NOT EXISTS style, safe to re-run on every
            // start; individual failures are ignored.
            let _ = db
                .execute(Statement::from_string(
                    sea_orm::DatabaseBackend::Postgres,
                    statement.to_string(),
                ))
                .await;
        }
    }

    Ok(())
}
