use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATED_AT_INDEX: &str = "idx_blogs_created_at";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Blogs::Title).text().not_null())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::CoverImage).text().not_null())
                    .col(ColumnDef::new(Blogs::Category).text().not_null())
                    .col(ColumnDef::new(Blogs::Author).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CREATED_AT_INDEX)
                    .table(Blogs::Table)
                    .col(Blogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(CREATED_AT_INDEX).table(Blogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    CreatedAt,
    Title,
    Content,
    CoverImage,
    Category,
    Author,
}
