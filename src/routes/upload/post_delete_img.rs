use super::PictureSlot;
use crate::{
    constants::MSG_UPDATED,
    models::{prelude::*, profile_details},
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::{build_err_resp, build_resp, RecordId},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteImageRequest {
    /// `"profile_background"`, anything else means the profile picture.
    #[serde(default)]
    pub what: String,
    /// Filename as the client knows it. The stored row decides what is removed.
    #[serde(default)]
    pub name: String,
    #[schema(value_type = i32)]
    pub id: RecordId,
}

/// Clear the profile or background picture and delete its file.
#[utoipa::path(post, path = "/delete-img", tag = "upload", request_body = DeleteImageRequest, responses(
    (status = 200, description = "`Updated` in the `message` envelope, or the generic error payload."),
))]
pub async fn post_delete_img(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<DeleteImageRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let profile_id = i32::from(body.id);
    let slot = PictureSlot::from_field(&body.what);

    let cleared = clear_picture(&data.db, profile_id, slot)
        .await
        .map_err(|e| build_err_resp("Failed to clear picture", e))?;

    if let Some(cleared) = cleared {
        data.store
            .discard_unreferenced(&data.db, profile_id, &cleared)
            .await;
    }

    Ok(build_resp(StatusCode::OK, MSG_UPDATED))
}

/// Nulls the slot and returns the name it held.
async fn clear_picture(
    db: &DatabaseConnection,
    profile_id: i32,
    slot: PictureSlot,
) -> Result<Option<String>, DbErr> {
    let txn = db.begin().await?;

    let details = ProfileDetails::find_by_id(profile_id).one(&txn).await?;

    ProfileDetails::update_many()
        .col_expr(slot.column(), Expr::value(Option::<String>::None))
        .filter(profile_details::Column::Id.eq(profile_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(details.and_then(|details| slot.current(details)))
}
