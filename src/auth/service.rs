// src/auth/service.rs
// DOCUMENTATION: Credential verification and session lifecycle
// PURPOSE: Register, login and logout against the users/sessions tables

use crate::db::{SessionRepository, UserRepository};
use crate::errors::CampError;
use crate::models::{Flash, LoginRequest, RegisterRequest, Session, User};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AuthService;

impl AuthService {
    /// Hash a plaintext password with bcrypt
    pub fn hash_password(password: &str) -> Result<String, CampError> {
        hash(password, DEFAULT_COST).map_err(|e| {
            log::error!("bcrypt hashing failed: {}", e);
            CampError::InternalError
        })
    }

    /// Check a plaintext password against a stored bcrypt hash
    pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, CampError> {
        verify(password, password_hash).map_err(|e| {
            log::error!("bcrypt verification failed: {}", e);
            CampError::InternalError
        })
    }

    /// Create a user and establish a logged-in session for them
    /// Duplicate username/email surfaces as CampError::Conflict.
    pub async fn register(
        pool: &PgPool,
        req: &RegisterRequest,
    ) -> Result<(User, Session), CampError> {
        let password_hash = Self::hash_password(&req.password)?;
        let user = UserRepository::create(
            pool,
            req.username.trim(),
            req.email.trim().to_lowercase().as_str(),
            &password_hash,
        )
        .await?;

        let session = SessionRepository::create(
            pool,
            Some(user.id),
            Flash {
                success: Some("Welcome to YelpCamp!".into()),
                error: None,
            },
        )
        .await?;

        Ok((user, session))
    }

    /// Verify credentials and establish a fresh session
    /// Returns Ok(None) on invalid credentials so the handler can bounce the
    /// form with a flash instead of surfacing a hard error. The old session
    /// (if any) is dropped so login always rotates the token.
    pub async fn login(
        pool: &PgPool,
        req: &LoginRequest,
        old_session_id: Option<Uuid>,
    ) -> Result<Option<(User, Session)>, CampError> {
        let Some(user) = UserRepository::find_by_username(pool, req.username.trim()).await? else {
            return Ok(None);
        };

        if !Self::verify_password(&req.password, &user.password_hash)? {
            log::info!("Failed login attempt for {}", user.username);
            return Ok(None);
        }

        if let Some(old_id) = old_session_id {
            SessionRepository::delete(pool, old_id).await?;
        }

        let session = SessionRepository::create(
            pool,
            Some(user.id),
            Flash {
                success: Some("Welcome back!".into()),
                error: None,
            },
        )
        .await?;

        log::info!("User {} logged in", user.username);
        Ok(Some((user, session)))
    }

    /// Destroy the login state of a session, keeping the row for the flash
    pub async fn logout(pool: &PgPool, session_id: Uuid) -> Result<(), CampError> {
        SessionRepository::detach_user(pool, session_id, "Goodbye!").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = AuthService::hash_password("hunter2hunter2").unwrap();
        assert!(AuthService::verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = AuthService::hash_password("hunter2hunter2").unwrap();
        let b = AuthService::hash_password("hunter2hunter2").unwrap();
        assert_ne!(a, b);
    }
}
