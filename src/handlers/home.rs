// src/handlers/home.rs
// DOCUMENTATION: Home page and catch-all 404
// PURPOSE: Public landing payload plus unmatched-route handling

use crate::auth::SessionContext;
use crate::errors::CampError;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /
/// Public home page payload
pub async fn home(ctx: SessionContext) -> Result<impl Responder, CampError> {
    Ok(HttpResponse::Ok().json(ctx.render(json!({ "page": "home" }))))
}

/// Default service for unmatched routes
pub async fn not_found() -> Result<HttpResponse, CampError> {
    Err(CampError::NotFound("Page Not Found".into()))
}

/// Configuration for the home route
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn unmatched_routes_render_404_envelope() {
        let app =
            test::init_service(App::new().default_service(web::route().to(not_found))).await;

        let req = test::TestRequest::get().uri("/no/such/page").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Page Not Found");
    }
}
