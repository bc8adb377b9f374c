use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = ProfilePost)]
#[sea_orm(table_name = "profile_posts")]
pub struct Model {
    /// Owning profile.
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub post: String,
    /// Stored image filename, empty for text-only posts.
    pub pics: String,
    /// Creation time in epoch milliseconds.
    pub date: i64,
    #[sea_orm(primary_key)]
    pub posts_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::Id",
        to = "super::profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
