// src/auth/middleware.rs
// DOCUMENTATION: Request-scoped session extractors
// PURPOSE: Login-required guard and per-request session context.
// The original leaned on ambient middleware state (req.user / res.locals);
// here that state is explicit extractor output passed into each handler.

use crate::db::SessionRepository;
use crate::errors::CampError;
use crate::models::{Flash, UserResponse};
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// Name of the cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "camp_session";

/// Build the session cookie for a token
/// HttpOnly per OWASP; Lax keeps the redirect flows working.
pub fn session_cookie(session_id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::days(7))
        .finish()
}

/// Extract the session token from the request cookie, if present and well-formed
pub fn session_id_from_request(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

fn pool_from_request(req: &HttpRequest) -> Result<web::Data<PgPool>, CampError> {
    req.app_data::<web::Data<PgPool>>().cloned().ok_or_else(|| {
        log::error!("PgPool missing from app data");
        CampError::InternalError
    })
}

/// 303 See Other to `location`
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Flash a message and redirect, creating an anonymous session when the
/// requester has none to hang the flash on.
pub async fn flash_redirect(
    pool: &PgPool,
    req: &HttpRequest,
    flash: Flash,
    location: &str,
) -> Result<HttpResponse, CampError> {
    if let Some(session_id) = session_id_from_request(req) {
        if SessionRepository::get(pool, session_id).await?.is_some() {
            SessionRepository::set_flash(pool, session_id, &flash).await?;
            return Ok(see_other(location));
        }
    }

    let session = SessionRepository::create(pool, None, flash).await?;
    let mut response = see_other(location);
    response
        .add_cookie(&session_cookie(session.id))
        .map_err(|e| {
            log::error!("Failed to attach session cookie: {}", e);
            CampError::InternalError
        })?;
    Ok(response)
}

/// Login-required guard
/// DOCUMENTATION: Resolves the session cookie to a logged-in user. On failure
/// it parks a flash error on the session (when one exists) and fails with
/// `Unauthenticated`, which renders as a 303 redirect to /login.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub session_id: Uuid,
}

impl FromRequest for CurrentUser {
    type Error = CampError;
    type Future = Pin<Box<dyn Future<Output = Result<CurrentUser, CampError>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            // No cookie means no session; skip the database entirely
            let Some(session_id) = session_id_from_request(&req) else {
                return Err(CampError::Unauthenticated);
            };

            let pool = pool_from_request(&req)?;

            match SessionRepository::find_user(pool.get_ref(), session_id).await? {
                Some(user) => Ok(CurrentUser {
                    id: user.id,
                    username: user.username,
                    session_id,
                }),
                None => {
                    let flash = Flash {
                        success: None,
                        error: Some("You must be signed in".into()),
                    };
                    // Best effort: the redirect happens either way
                    if let Err(e) =
                        SessionRepository::set_flash(pool.get_ref(), session_id, &flash).await
                    {
                        log::warn!("Could not flash session {}: {}", session_id, e);
                    }
                    Err(CampError::Unauthenticated)
                }
            }
        })
    }
}

/// Per-request session context for page-rendering GETs
/// DOCUMENTATION: Optional current user plus flash messages, which are
/// consumed (cleared) by this extractor - flash is displayed exactly once.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub current_user: Option<UserResponse>,
    pub flash: Flash,
}

impl SessionContext {
    /// Wrap a page body with the session data every render carries
    pub fn render<T: Serialize>(&self, body: T) -> crate::models::Page<T> {
        crate::models::Page::new(body, self.current_user.clone(), self.flash.clone())
    }
}

impl FromRequest for SessionContext {
    type Error = CampError;
    type Future = Pin<Box<dyn Future<Output = Result<SessionContext, CampError>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let Some(session_id) = session_id_from_request(&req) else {
                return Ok(SessionContext {
                    current_user: None,
                    flash: Flash::default(),
                });
            };

            let pool = pool_from_request(&req)?;
            let current_user = SessionRepository::find_user(pool.get_ref(), session_id)
                .await?
                .map(|u| u.to_response());
            let flash = SessionRepository::take_flash(pool.get_ref(), session_id).await?;

            Ok(SessionContext {
                current_user,
                flash,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn session_cookie_is_hardened() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(CookieDuration::days(7)));
    }

    #[test]
    fn session_id_parses_from_cookie() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .cookie(session_cookie(id))
            .to_http_request();
        assert_eq!(session_id_from_request(&req), Some(id));
    }

    #[test]
    fn garbage_cookie_yields_no_session() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "not-a-uuid"))
            .to_http_request();
        assert_eq!(session_id_from_request(&req), None);
    }

    #[test]
    fn missing_cookie_yields_no_session() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(session_id_from_request(&req), None);
    }

    #[test]
    fn see_other_sets_location() {
        let resp = see_other("/campgrounds");
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/campgrounds")
        );
    }
}
