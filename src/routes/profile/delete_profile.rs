use crate::{
    constants::MSG_PROFILE_DELETED,
    models::{prelude::*, profile_images, profile_posts},
    routes::ErrorResponseBody,
    utils::{build_err_resp, build_msg_resp, parse_id},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use std::sync::Arc;

/// Delete a profile, everything it owns, and its image directory.
///
/// Dependent rows are removed in the same transaction as the profile, so the
/// cascade does not rely on the database enforcing foreign keys.
#[utoipa::path(delete, path = "/delete/{id}", tag = "profile",
    params(("id" = String, Path, description = "Profile id.")),
    responses(
        (status = 200, description = "Deletion confirmation, or the generic error payload."),
    )
)]
pub async fn delete_profile(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let id = parse_id(&id)?;

    let txn = data
        .db
        .begin()
        .await
        .map_err(|e| build_err_resp("Failed to start transaction", e))?;

    ProfilePosts::delete_many()
        .filter(profile_posts::Column::Id.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete posts", e))?;

    ProfileImages::delete_many()
        .filter(profile_images::Column::Id.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete images", e))?;

    ProfileDetails::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete profile details", e))?;

    Profile::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| build_err_resp("Failed to delete profile", e))?;

    txn.commit()
        .await
        .map_err(|e| build_err_resp("Failed to commit profile deletion", e))?;

    data.store.discard_profile_dir(id).await;

    Ok(build_msg_resp(MSG_PROFILE_DELETED))
}
