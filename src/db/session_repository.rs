// src/db/session_repository.rs
// DOCUMENTATION: Server-side session storage
// PURPOSE: Sessions live in PostgreSQL, keyed by the opaque cookie token

use crate::errors::CampError;
use crate::models::{Flash, Session, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Session lifetime, matching the original one-week cookie
const SESSION_LIFETIME_DAYS: i64 = 7;

pub struct SessionRepository;

impl SessionRepository {
    /// Create a session, optionally bound to a user, optionally seeded with flash
    pub async fn create(
        pool: &PgPool,
        user_id: Option<Uuid>,
        flash: Flash,
    ) -> Result<Session, CampError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, flash_success, flash_error, expires_at)
            VALUES ($1, $2, $3, NOW() + make_interval(days => $4::int))
            RETURNING id, user_id, flash_success, flash_error, expires_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(&flash.success)
        .bind(&flash.error)
        .bind(SESSION_LIFETIME_DAYS as i32)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create session: {}", e);
            CampError::DatabaseError(e.to_string())
        })?;

        Ok(session)
    }

    /// Fetch an unexpired session by its token
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Session>, CampError> {
        sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, flash_success, flash_error, expires_at, created_at
            FROM sessions
            WHERE id = $1 AND expires_at > NOW()
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch session {}: {}", id, e);
            CampError::DatabaseError(e.to_string())
        })
    }

    /// Resolve the logged-in user of an unexpired session, if any
    pub async fn find_user(pool: &PgPool, session_id: Uuid) -> Result<Option<User>, CampError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.created_at, u.updated_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(session_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to resolve session {}: {}", session_id, e);
            CampError::DatabaseError(e.to_string())
        })
    }

    /// Detach the user from a session (logout) and leave a goodbye flash
    /// The session row survives so the flash can be rendered once.
    pub async fn detach_user(
        pool: &PgPool,
        session_id: Uuid,
        flash_success: &str,
    ) -> Result<(), CampError> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET user_id = NULL, flash_success = $2
            WHERE id = $1 AND expires_at > NOW()
            "#,
        )
        .bind(session_id)
        .bind(flash_success)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to detach user from session {}: {}", session_id, e);
            CampError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Store flash messages on a session without touching the other slot
    pub async fn set_flash(
        pool: &PgPool,
        session_id: Uuid,
        flash: &Flash,
    ) -> Result<(), CampError> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET flash_success = COALESCE($2, flash_success),
                flash_error = COALESCE($3, flash_error)
            WHERE id = $1 AND expires_at > NOW()
            "#,
        )
        .bind(session_id)
        .bind(&flash.success)
        .bind(&flash.error)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to set flash on session {}: {}", session_id, e);
            CampError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Consume flash messages: read them and clear them in one transaction
    /// Flash is one-shot by definition, so the clear happens before render.
    pub async fn take_flash(pool: &PgPool, session_id: Uuid) -> Result<Flash, CampError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open transaction: {}", e);
            CampError::DatabaseError(e.to_string())
        })?;

        let row: Option<(Option<String>, Option<String>)> = sqlx::query_as(
            r#"
            SELECT flash_success, flash_error
            FROM sessions
            WHERE id = $1 AND expires_at > NOW()
            FOR UPDATE
            "#,
        )
        .bind(session_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            log::error!("Failed to read flash for session {}: {}", session_id, e);
            CampError::DatabaseError(e.to_string())
        })?;

        let flash = match row {
            Some((success, error)) => Flash { success, error },
            None => return Ok(Flash::default()),
        };

        if !flash.is_empty() {
            sqlx::query("UPDATE sessions SET flash_success = NULL, flash_error = NULL WHERE id = $1")
                .bind(session_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    log::error!("Failed to clear flash for session {}: {}", session_id, e);
                    CampError::DatabaseError(e.to_string())
                })?;
        }

        tx.commit().await.map_err(|e| {
            log::error!("Commit failed consuming flash: {}", e);
            CampError::DatabaseError(e.to_string())
        })?;

        Ok(flash)
    }

    /// Drop a session row entirely (used when rotating sessions at login)
    pub async fn delete(pool: &PgPool, session_id: Uuid) -> Result<(), CampError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete session {}: {}", session_id, e);
                CampError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn detach_user_skips_expired_sessions() {
        let Some(pool) = test_support::database_pool().await else {
            return;
        };

        let (id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO sessions (expires_at) VALUES (NOW() - INTERVAL '1 hour') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        SessionRepository::detach_user(&pool, id, "Goodbye!")
            .await
            .unwrap();

        // An expired session must not pick up the goodbye flash
        let (flash,): (Option<String>,) =
            sqlx::query_as("SELECT flash_success FROM sessions WHERE id = $1")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert!(flash.is_none());
    }
}
