//! Post entity for SeaORM, mapped onto the `blogs` table.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, NotSet, Set};

use bloggy_core::domain::{Post, PostChanges, PostFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at.into(),
            title: model.title,
            content: model.content,
            cover_image: model.cover_image,
            category: model.category,
            author: model.author,
        }
    }
}

impl ActiveModel {
    /// A new row. The id is assigned here; `created_at` comes from the column default.
    pub fn for_insert(fields: PostFields) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            created_at: NotSet,
            title: Set(fields.title),
            content: Set(fields.content),
            cover_image: Set(fields.cover_image),
            category: Set(fields.category),
            author: Set(fields.author),
        }
    }

    /// A partial update of row `id`. Absent fields stay `NotSet`.
    pub fn for_update(id: Uuid, changes: PostChanges) -> Self {
        Self {
            id: ActiveValue::Unchanged(id),
            created_at: NotSet,
            title: set_if(changes.title),
            content: set_if(changes.content),
            cover_image: set_if(changes.cover_image),
            category: set_if(changes.category),
            author: set_if(changes.author),
        }
    }
}

fn set_if(value: Option<String>) -> ActiveValue<String> {
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}
