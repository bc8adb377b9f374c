use axum::async_trait;
use sea_orm_migration::prelude::*;

use super::m_20240312_000001_create_profile_table::Profile;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m_20240312_000002_create_profile_details_table"
    }
}

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileDetails::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-profile_details-id")
                            .from(ProfileDetails::Table, ProfileDetails::Id)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(ProfileDetails::Certificate).string())
                    .col(ColumnDef::new(ProfileDetails::School).string())
                    .col(ColumnDef::new(ProfileDetails::Place).string())
                    .col(ColumnDef::new(ProfileDetails::AboutMe).text())
                    .col(ColumnDef::new(ProfileDetails::Links).string())
                    .col(ColumnDef::new(ProfileDetails::ProfilePic).string())
                    .col(ColumnDef::new(ProfileDetails::ProfileBackground).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProfileDetails {
    Table,
    Id,
    Certificate,
    School,
    Place,
    AboutMe,
    Links,
    ProfilePic,
    ProfileBackground,
}
