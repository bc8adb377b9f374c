use axum::async_trait;
use sea_orm_migration::prelude::*;

use super::m_20240312_000001_create_profile_table::Profile;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m_20240312_000004_create_profile_images_table"
    }
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileImages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProfileImages::Id).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-profile_images-id")
                            .from(ProfileImages::Table, ProfileImages::Id)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(ProfileImages::Image).string().not_null())
                    .col(ColumnDef::new(ProfileImages::Date).big_integer().not_null())
                    .col(
                        ColumnDef::new(ProfileImages::ImagesId)
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
                    .name("idx-profile_images-id-date")
                    .table(ProfileImages::Table)
                    .col(ProfileImages::Id)
                    .col(ProfileImages::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileImages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProfileImages {
    Table,
    Id,
    Image,
    Date,
    ImagesId,
}
