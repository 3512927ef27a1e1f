// src/models/session.rs
// DOCUMENTATION: Server-side session state
// PURPOSE: Session row shape, one-shot flash messages, page render wrapper

use crate::models::UserResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Session record as stored in PostgreSQL
/// The id doubles as the opaque token carried in the session cookie.
/// `user_id` is NULL for anonymous sessions (e.g. a failed login that only
/// needs somewhere to park a flash message).
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub flash_success: Option<String>,
    pub flash_error: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// One-time notifications, cleared after being rendered once
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

/// Wrapper serialized by every page-rendering GET
/// DOCUMENTATION: Carries the payload a template would render plus the
/// request-scoped session data (current user and consumed flash messages).
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    #[serde(flatten)]
    pub body: T,
    pub current_user: Option<UserResponse>,
    pub flash: Flash,
}

impl<T: Serialize> Page<T> {
    pub fn new(body: T, current_user: Option<UserResponse>, flash: Flash) -> Self {
        Page {
            body,
            current_user,
            flash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_flattens_body_fields() {
        let page = Page::new(
            json!({ "title": "Misty Pines" }),
            None,
            Flash {
                success: Some("Welcome back!".into()),
                error: None,
            },
        );
        let rendered = serde_json::to_value(&page).unwrap();
        assert_eq!(rendered["title"], "Misty Pines");
        assert_eq!(rendered["flash"]["success"], "Welcome back!");
        assert!(rendered["current_user"].is_null());
    }

    #[test]
    fn flash_default_is_empty() {
        assert!(Flash::default().is_empty());
    }
}
