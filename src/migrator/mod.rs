use axum::async_trait;
use sea_orm_migration::prelude::*;

mod m_20240312_000001_create_profile_table;
mod m_20240312_000002_create_profile_details_table;
mod m_20240312_000003_create_profile_posts_table;
mod m_20240312_000004_create_profile_images_table;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m_20240312_000001_create_profile_table::Migration),
            Box::new(m_20240312_000002_create_profile_details_table::Migration),
            Box::new(m_20240312_000003_create_profile_posts_table::Migration),
            Box::new(m_20240312_000004_create_profile_images_table::Migration),
        ]
    }
}
