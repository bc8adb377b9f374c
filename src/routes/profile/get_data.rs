use crate::{
    models::{prelude::*, profile, profile_details},
    routes::ErrorResponseBody,
    utils::{build_err_resp, parse_id},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// A profile joined with its details row.
#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ProfileDataResponseBody {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub certificate: Option<String>,
    pub school: Option<String>,
    pub place: Option<String>,
    pub about_me: Option<String>,
    pub links: Option<String>,
    pub profile_pic: Option<String>,
    pub profile_background: Option<String>,
}

/// Get the combined profile data, or `null` when there is no such profile.
#[utoipa::path(get, path = "/data/{id}", tag = "profile",
    params(("id" = String, Path, description = "Profile id.")),
    responses(
        (status = 200, description = "Profile data, or null.", body = ProfileDataResponseBody),
    )
)]
pub async fn get_data(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let id = parse_id(&id)?;

    let row = Profile::find_by_id(id)
        .select_only()
        .columns([
            profile::Column::Id,
            profile::Column::FirstName,
            profile::Column::LastName,
            profile::Column::EMail,
        ])
        .columns([
            profile_details::Column::Certificate,
            profile_details::Column::School,
            profile_details::Column::Place,
            profile_details::Column::AboutMe,
            profile_details::Column::Links,
            profile_details::Column::ProfilePic,
            profile_details::Column::ProfileBackground,
        ])
        .join(JoinType::InnerJoin, profile::Relation::ProfileDetails.def())
        .into_model::<ProfileDataResponseBody>()
        .one(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch profile data", e))?;

    Ok(Json(row))
}
