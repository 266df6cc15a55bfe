//! Admin dashboard and post management. Every handler is guarded.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use bloggy_core::domain::{PostChanges, PostFields, PostStats};
use bloggy_shared::ActionResponse;
use bloggy_shared::dto::{CreatePostRequest, DashboardResponse, DeletedResponse, UpdatePostRequest};

use super::presenters;
use crate::middleware::auth::AdminGuard;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Re-read the list even if it is already loaded.
    #[serde(default)]
    pub refresh: bool,
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Blog post {raw} not found")))
}

/// GET /admin
pub async fn dashboard(
    _guard: AdminGuard,
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let view = if query.refresh {
        state.admin.mount().await
    } else {
        state.admin.open().await
    };
    let notes = state.admin.take_notifications().await;

    presenters::screen(view, notes, |posts| DashboardResponse {
        stats: presenters::stats_response(PostStats::from_posts(&posts)),
        posts: posts.iter().map(presenters::post_response).collect(),
    })
}

/// POST /admin/posts
pub async fn create(
    _guard: AdminGuard,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate().map_err(AppError::Validation)?;

    let post = state
        .admin
        .create(PostFields {
            title: req.title,
            content: req.content,
            cover_image: req.cover_image,
            category: req.category,
            author: req.author,
        })
        .await?;

    Ok(HttpResponse::Created().json(ActionResponse::new(
        presenters::post_response(&post),
        "Blog created",
    )))
}

/// PUT /admin/posts/{id}
pub async fn update(
    _guard: AdminGuard,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    req.validate().map_err(AppError::Validation)?;

    let post = state
        .admin
        .update(
            id,
            PostChanges {
                title: req.title,
                content: req.content,
                cover_image: req.cover_image,
                category: req.category,
                author: req.author,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ActionResponse::new(
        presenters::post_response(&post),
        "Blog updated",
    )))
}

/// DELETE /admin/posts/{id}
pub async fn delete(
    _guard: AdminGuard,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.admin.delete(id).await?;

    Ok(HttpResponse::Ok().json(ActionResponse::new(
        DeletedResponse { id: id.to_string() },
        "Blog deleted",
    )))
}
