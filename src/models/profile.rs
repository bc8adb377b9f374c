use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = Profile)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub e_mail: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile_details::Entity")]
    ProfileDetails,
    #[sea_orm(has_many = "super::profile_posts::Entity")]
    ProfilePosts,
    #[sea_orm(has_many = "super::profile_images::Entity")]
    ProfileImages,
}

impl Related<super::profile_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileDetails.def()
    }
}

impl Related<super::profile_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfilePosts.def()
    }
}

impl Related<super::profile_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileImages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
