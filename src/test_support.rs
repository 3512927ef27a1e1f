// src/test_support.rs
// DOCUMENTATION: Shared helpers for database-backed tests
// PURPOSE: Integration tests run only when TEST_DATABASE_URL points at a
// disposable PostgreSQL database; without it they return early and pass.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

/// Connect to the test database and bring its schema up to date.
/// Returns None when TEST_DATABASE_URL is unset or unreachable.
pub async fn database_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .ok()?;
    sqlx::migrate!("./migrations").run(&pool).await.ok()?;
    Some(pool)
}

/// A short unique name so repeated test runs never collide on unique columns
pub fn unique(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &suffix[..12])
}
