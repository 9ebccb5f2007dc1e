pub(crate) mod error;
pub(crate) mod menu_management;
pub(crate) mod ordering;

use std::sync::Arc;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use handlebars::RenderError;
use log::error;
use crate::server::controller::error::CustomError;
use crate::server::state::{AppState, Session, SESSION_COOKIE};

/// The caller's session, a new one when the request carries no known cookie.
async fn session_for(req: &HttpRequest, data: &AppState) -> (String, Arc<Session>) {
    let cookie = req.cookie(SESSION_COOKIE);
    data.session(cookie.as_ref().map(|c| c.value())).await
}

/// Html page response, (re)setting the session cookie.
fn html(session_id: String, rendered: Result<String, RenderError>) -> Result<HttpResponse, CustomError> {
    let body = rendered.map_err(|e| {
        error!("failed to render page, {}", e);
        CustomError::RenderFailed
    })?;
    let cookie = Cookie::build(SESSION_COOKIE, session_id)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .cookie(cookie)
        .body(body))
}
