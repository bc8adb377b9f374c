use crate::{
    models::{prelude::*, profile, profile_details},
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::{build_err_resp, build_resp, RecordId},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateDataRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub certificate: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, rename = "linkedIn")]
    pub linked_in: Option<String>,
    #[schema(value_type = i32)]
    pub id: RecordId,
}

/// Echo of the values written, so the client can refresh without a re-fetch.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataResponseBody {
    pub new_name: Option<String>,
    pub new_last_name: Option<String>,
    pub new_cert: Option<String>,
    pub new_school: Option<String>,
    pub new_place: Option<String>,
    pub new_about: Option<String>,
    pub new_link: Option<String>,
}

/// Update the name fields and the extended details of a profile.
#[utoipa::path(post, path = "/update-data", tag = "profile", request_body = UpdateDataRequest, responses(
    (status = 200, description = "Updated values in the `message` envelope, or the generic error payload."),
))]
pub async fn post_update_data(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<UpdateDataRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let id = i32::from(body.id);

    let txn = data
        .db
        .begin()
        .await
        .map_err(|e| build_err_resp("Failed to start transaction", e))?;

    ProfileDetails::update_many()
        .col_expr(profile_details::Column::Certificate, Expr::value(body.certificate.clone()))
        .col_expr(profile_details::Column::School, Expr::value(body.school.clone()))
        .col_expr(profile_details::Column::Place, Expr::value(body.place.clone()))
        .col_expr(profile_details::Column::AboutMe, Expr::value(body.about.clone()))
        .col_expr(profile_details::Column::Links, Expr::value(body.linked_in.clone()))
        .filter(profile_details::Column::Id.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to update profile details", e))?;

    Profile::update_many()
        .col_expr(profile::Column::FirstName, Expr::value(body.first_name.clone()))
        .col_expr(profile::Column::LastName, Expr::value(body.last_name.clone()))
        .filter(profile::Column::Id.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to update profile", e))?;

    txn.commit()
        .await
        .map_err(|e| build_err_resp("Failed to commit profile update", e))?;

    Ok(build_resp(
        StatusCode::OK,
        UpdateDataResponseBody {
            new_name: body.first_name,
            new_last_name: body.last_name,
            new_cert: body.certificate,
            new_school: body.school,
            new_place: body.place,
            new_about: body.about,
            new_link: body.linked_in,
        },
    ))
}
