//! Route guard for the admin screens.

use std::future::{Ready, ready};

use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use bloggy_shared::ErrorResponse;
use thiserror::Error;

use crate::state::AppState;

/// Where signed-out visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Proof that the session was signed in when the request arrived.
///
/// Use this in handlers to guard a route:
/// ```ignore
/// async fn dashboard(_guard: AdminGuard) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

/// Signed-out requests are redirected rather than refused.
#[derive(Debug, Error)]
#[error("Sign in required")]
pub struct RedirectToLogin;

impl ResponseError for RedirectToLogin {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LOGIN_PATH))
            .json(ErrorResponse::new(303, "See Other").with_detail("Sign in to continue."))
    }
}

impl FromRequest for AdminGuard {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(actix_web::error::ErrorInternalServerError(
                "Server configuration error",
            )));
        };

        if state.session.is_authenticated() {
            ready(Ok(AdminGuard))
        } else {
            tracing::debug!(path = %req.path(), "Redirecting signed-out request to login");
            ready(Err(RedirectToLogin.into()))
        }
    }
}
