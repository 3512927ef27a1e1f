// src/db/user_repository.rs
// DOCUMENTATION: User database operations
// PURPOSE: Create and look up user records

use crate::errors::CampError;
use crate::models::User;
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    /// A unique violation on username or email surfaces as Conflict so the
    /// registration handler can bounce the form instead of 500ing.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, CampError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                CampError::Conflict("A user with that username or email already exists".into())
            }
            _ => {
                log::error!("Failed to create user: {}", e);
                CampError::DatabaseError(e.to_string())
            }
        })?;

        log::info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Look up a user by username (login path)
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, CampError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", username, e);
            CampError::DatabaseError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn duplicate_username_conflicts_without_second_row() {
        let Some(pool) = test_support::database_pool().await else {
            return;
        };

        let username = test_support::unique("camper");
        UserRepository::create(
            &pool,
            &username,
            &format!("{}@example.com", username),
            "not-a-real-hash",
        )
        .await
        .unwrap();

        let second = UserRepository::create(
            &pool,
            &username,
            &format!("{}-other@example.com", username),
            "not-a-real-hash",
        )
        .await;
        assert!(matches!(second, Err(CampError::Conflict(_))));

        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(&username)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}
