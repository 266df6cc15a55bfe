//! Reader-facing screens: feed, category and single post.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use bloggy_core::controllers::{CategoryController, FeedController, PostController};
use bloggy_shared::dto::CategoryPageResponse;

use super::presenters;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /
pub async fn feed(state: web::Data<AppState>) -> HttpResponse {
    let controller = FeedController::new(state.repo.clone());
    let view = controller.mount().await;
    let notes = controller.take_notifications().await;

    presenters::screen(view, notes, |posts| {
        posts.iter().map(presenters::post_card).collect::<Vec<_>>()
    })
}

/// GET /category/{category}
pub async fn category(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let controller = CategoryController::new(state.repo.clone());
    let view = controller.mount(&path).await;
    let notes = controller.take_notifications().await;

    presenters::screen(view, notes, |page| CategoryPageResponse {
        category: page.filter.term().to_string(),
        display_name: page.filter.display_name(),
        posts: page.posts.iter().map(presenters::post_card).collect(),
    })
}

/// GET /blog/{id} and GET /{id}
pub async fn post(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path)
        .map_err(|_| AppError::NotFound(format!("Blog post {} not found", path.as_str())))?;

    let controller = PostController::new(state.repo.clone(), state.sanitizer.clone());
    let view = controller.mount(id).await;
    let notes = controller.take_notifications().await;

    Ok(presenters::screen(view, notes, |post| {
        presenters::post_response(&post)
    }))
}

/// Fallback for every unmatched route.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("No page at {}", req.path())))
}
