// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for registration, login and logout
// PURPOSE: Credential flows with flash + redirect semantics

use crate::auth::{
    flash_redirect, see_other, session_cookie, session_id_from_request, AuthService,
    SessionContext,
};
use crate::errors::CampError;
use crate::models::{Flash, LoginRequest, RegisterRequest};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// GET /register
/// Registration form payload
pub async fn render_register(ctx: SessionContext) -> Result<impl Responder, CampError> {
    Ok(HttpResponse::Ok().json(ctx.render(json!({ "page": "register" }))))
}

/// POST /register
/// Create a user and log them straight in
/// Duplicate username/email bounces back to the form with a flash error and
/// creates no record.
pub async fn register(
    pool: web::Data<PgPool>,
    http_req: HttpRequest,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, CampError> {
    if let Err(e) = req.validate() {
        return Err(CampError::ValidationError(e.to_string()));
    }

    match AuthService::register(pool.get_ref(), &req).await {
        Ok((_user, session)) => {
            let mut response = see_other("/campgrounds");
            response
                .add_cookie(&session_cookie(session.id))
                .map_err(|e| {
                    log::error!("Failed to attach session cookie: {}", e);
                    CampError::InternalError
                })?;
            Ok(response)
        }
        Err(CampError::Conflict(message)) => {
            flash_redirect(
                pool.get_ref(),
                &http_req,
                Flash {
                    success: None,
                    error: Some(message),
                },
                "/register",
            )
            .await
        }
        Err(e) => Err(e),
    }
}

/// GET /login
/// Login form payload
pub async fn render_login(ctx: SessionContext) -> Result<impl Responder, CampError> {
    Ok(HttpResponse::Ok().json(ctx.render(json!({ "page": "login" }))))
}

/// POST /login
/// Verify credentials and rotate the session
pub async fn login(
    pool: web::Data<PgPool>,
    http_req: HttpRequest,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, CampError> {
    if let Err(e) = req.validate() {
        return Err(CampError::ValidationError(e.to_string()));
    }

    let old_session_id = session_id_from_request(&http_req);

    match AuthService::login(pool.get_ref(), &req, old_session_id).await? {
        Some((_user, session)) => {
            let mut response = see_other("/campgrounds");
            response
                .add_cookie(&session_cookie(session.id))
                .map_err(|e| {
                    log::error!("Failed to attach session cookie: {}", e);
                    CampError::InternalError
                })?;
            Ok(response)
        }
        None => {
            // flash_redirect parks the error on the caller's session, or on a
            // fresh anonymous one when they have none
            flash_redirect(
                pool.get_ref(),
                &http_req,
                Flash {
                    success: None,
                    error: Some("Invalid username or password".into()),
                },
                "/login",
            )
            .await
        }
    }
}

/// GET /logout
/// Drop the login state, keep the session row for the goodbye flash
pub async fn logout(
    pool: web::Data<PgPool>,
    http_req: HttpRequest,
) -> Result<HttpResponse, CampError> {
    if let Some(session_id) = session_id_from_request(&http_req) {
        AuthService::logout(pool.get_ref(), session_id).await?;
    }

    Ok(see_other("/campgrounds"))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::get().to(render_register))
        .route("/register", web::post().to(register))
        .route("/login", web::get().to(render_login))
        .route("/login", web::post().to(login))
        .route("/logout", web::get().to(logout));
}
