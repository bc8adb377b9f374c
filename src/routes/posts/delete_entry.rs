use crate::{
    models::prelude::*,
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::{build_err_resp, build_resp, RecordId},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Body shared by post and image deletion.
///
/// `profileID` and `name` are accepted for older clients; the file removed is
/// the one recorded on the deleted row.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteEntryRequest {
    #[serde(rename = "profileID")]
    #[schema(value_type = i32)]
    pub profile_id: RecordId,
    /// `posts_id` or `images_id` of the row.
    #[schema(value_type = i32)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

/// Delete a post and its image file, if any.
#[utoipa::path(post, path = "/delete-post", tag = "posts", request_body = DeleteEntryRequest, responses(
    (status = 200, description = "Deleted post id in the `message` envelope, or the generic error payload."),
))]
pub async fn post_delete_post(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<DeleteEntryRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let txn = data
        .db
        .begin()
        .await
        .map_err(|e| build_err_resp("Failed to start transaction", e))?;

    let post = ProfilePosts::find_by_id(i32::from(body.id))
        .one(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to fetch post", e))?;

    ProfilePosts::delete_by_id(i32::from(body.id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete post", e))?;

    txn.commit()
        .await
        .map_err(|e| build_err_resp("Failed to commit post deletion", e))?;

    if let Some(post) = post {
        data.store
            .discard_unreferenced(&data.db, post.id, &post.pics)
            .await;
    }

    Ok(build_resp(StatusCode::OK, body.id))
}

/// Delete a standalone image and its file.
#[utoipa::path(post, path = "/delete_imgpost", tag = "posts", request_body = DeleteEntryRequest, responses(
    (status = 200, description = "Deleted image id in the `message` envelope, or the generic error payload."),
))]
pub async fn post_delete_imgpost(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<DeleteEntryRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let txn = data
        .db
        .begin()
        .await
        .map_err(|e| build_err_resp("Failed to start transaction", e))?;

    let image = ProfileImages::find_by_id(i32::from(body.id))
        .one(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to fetch image", e))?;

    ProfileImages::delete_by_id(i32::from(body.id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete image", e))?;

    txn.commit()
        .await
        .map_err(|e| build_err_resp("Failed to commit image deletion", e))?;

    if let Some(image) = image {
        data.store
            .discard_unreferenced(&data.db, image.id, &image.image)
            .await;
    }

    Ok(build_resp(StatusCode::OK, body.id))
}
