use axum::async_trait;
use sea_orm_migration::prelude::*;

use super::m_20240312_000001_create_profile_table::Profile;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m_20240312_000003_create_profile_posts_table"
    }
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfilePosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProfilePosts::Id).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-profile_posts-id")
                            .from(ProfilePosts::Table, ProfilePosts::Id)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(ProfilePosts::Post).text().not_null())
                    .col(ColumnDef::new(ProfilePosts::Pics).string().not_null())
                    .col(ColumnDef::new(ProfilePosts::Date).big_integer().not_null())
                    .col(
                        ColumnDef::new(ProfilePosts::PostsId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-profile_posts-id-date")
                    .table(ProfilePosts::Table)
                    .col(ProfilePosts::Id)
                    .col(ProfilePosts::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfilePosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProfilePosts {
    Table,
    Id,
    Post,
    Pics,
    Date,
    PostsId,
}
