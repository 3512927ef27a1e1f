// src/models/user.rs
// DOCUMENTATION: User identity models
// PURPOSE: Database entity plus registration/login DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// User record as stored in PostgreSQL
/// The password hash is opaque to everything except the auth service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for POST /register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Request DTO for POST /login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Public user DTO exposed via API
/// Never carries the email or password hash.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Convert database User into API response
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_valid_input() {
        let req = RegisterRequest {
            username: "camper42".into(),
            email: "camper@example.com".into(),
            password: "correct horse battery".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_request_rejects_malformed_email() {
        let req = RegisterRequest {
            username: "camper42".into(),
            email: "not-an-email".into(),
            password: "correct horse battery".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn register_request_rejects_short_password() {
        let req = RegisterRequest {
            username: "camper42".into(),
            email: "camper@example.com".into(),
            password: "short".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn response_hides_credentials() {
        let user = User {
            id: Uuid::new_v4(),
            username: "camper42".into(),
            email: "camper@example.com".into(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(user.to_response()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("email").is_none());
        assert_eq!(json["username"], "camper42");
    }
}
