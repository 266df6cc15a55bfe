//! Domain → wire conversions and view-state rendering.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use bloggy_core::controllers::{Notification, NotificationVariant, ViewState};
use bloggy_core::domain::{Post, PostStats};
use bloggy_core::error::PostError;
use bloggy_shared::ScreenResponse;
use bloggy_shared::dto::{NotificationDto, PostCardResponse, PostResponse, StatsResponse};

pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        created_at: post.created_at.to_rfc3339(),
        published_on: post.published_on(),
        title: post.title.clone(),
        content: post.content.clone(),
        cover_image: post.cover_image.clone(),
        category: post.category.clone(),
        author: post.author.clone(),
    }
}

pub fn post_card(post: &Post) -> PostCardResponse {
    PostCardResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        excerpt: post.excerpt(),
        cover_image: post.cover_image.clone(),
        category: post.category.clone(),
        author: post.author.clone(),
        published_on: post.published_on(),
        href: format!("/blog/{}", post.id),
    }
}

pub fn stats_response(stats: PostStats) -> StatsResponse {
    StatsResponse {
        total_posts: stats.total_posts,
        categories: stats.categories,
        authors: stats.authors,
    }
}

pub fn notification(note: Notification) -> NotificationDto {
    let variant = match note.variant {
        NotificationVariant::Default => "default",
        NotificationVariant::Destructive => "destructive",
    };
    NotificationDto {
        variant: variant.to_string(),
        title: note.title,
        description: note.description,
    }
}

fn failure_status(err: &PostError) -> StatusCode {
    match err {
        PostError::NotFound(_) => StatusCode::NOT_FOUND,
        PostError::TransportFailure(_) => StatusCode::BAD_GATEWAY,
        PostError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a screen's state and drained notifications as a JSON response.
pub fn screen<T, D: Serialize>(
    view: ViewState<T>,
    notes: Vec<Notification>,
    present: impl FnOnce(T) -> D,
) -> HttpResponse {
    let (status, body) = match view {
        ViewState::Loading => (StatusCode::OK, ScreenResponse::loading()),
        ViewState::Loaded(data) => (StatusCode::OK, ScreenResponse::loaded(present(data))),
        ViewState::Failed(err) => (failure_status(&err), ScreenResponse::failed(err.to_string())),
    };

    let body = body.with_notifications(notes.into_iter().map(notification).collect());
    HttpResponse::build(status).json(body)
}
