//! Login, logout and session status.

use actix_web::{HttpResponse, web};

use bloggy_shared::dto::{LoginRequest, SessionResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /login
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        authenticated: state.session.is_authenticated(),
    })
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    if !state.session.login(&body.password).await? {
        return Err(AppError::Unauthorized);
    }

    Ok(HttpResponse::Ok().json(SessionResponse {
        authenticated: true,
    }))
}

/// POST /logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.session.logout().await?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        authenticated: false,
    }))
}
