//! PostgreSQL store implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use bloggy_core::domain::{CategoryFilter, Post, PostChanges, PostFields};
use bloggy_core::error::StoreError;
use bloggy_core::ports::{ListQuery, Order, PostStore};

use super::entity::post::{self, Entity as PostEntity};

/// Post store over a sea-orm connection.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn store_err(err: DbErr) -> StoreError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

/// Lowercased `%term%` with LIKE metacharacters escaped by `\`.
pub(crate) fn like_pattern(filter: &CategoryFilter) -> String {
    format!("%{}%", filter.like_escaped().to_lowercase())
}

pub(crate) fn list_select(query: &ListQuery) -> Select<PostEntity> {
    let mut select = PostEntity::find();

    if let Some(filter) = &query.category {
        let lowered = Expr::expr(Func::lower(Expr::col(post::Column::Category)));
        select = select.filter(lowered.like(LikeExpr::new(like_pattern(filter)).escape('\\')));
    }

    match query.order {
        Order::NewestFirst => select.order_by_desc(post::Column::CreatedAt),
        Order::OldestFirst => select.order_by_asc(post::Column::CreatedAt),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, StoreError> {
        tracing::debug!(category = ?query.category, "Selecting posts");

        let rows = list_select(query).all(&self.db).await.map_err(store_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?
            .map(Into::into)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        let model = post::ActiveModel::for_insert(fields)
            .insert(&self.db)
            .await
            .map_err(store_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let model = post::ActiveModel::for_update(id, changes)
            .update(&self.db)
            .await
            .map_err(store_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
