use super::PictureSlot;
use crate::{
    models::{prelude::*, profile_details},
    routes::{extractors::ImageUpload, ApiResponse, ErrorResponseBody},
    utils::{build_err_resp, build_resp},
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::Arc;

/// Replace the profile picture.
///
/// Multipart fields: `image`, `id`, `oldName`. Answers with the new filename.
/// The file removed afterwards is the one the row pointed at, not `oldName`.
#[utoipa::path(post, path = "/upload-profile", tag = "upload", responses(
    (status = 200, description = "New filename in the `message` envelope, or the generic error payload."),
))]
pub async fn post_upload_profile(
    State(data): State<Arc<AppState>>,
    upload: ImageUpload,
) -> Result<(StatusCode, Json<ApiResponse<String>>), (StatusCode, Json<ErrorResponseBody>)> {
    replace_picture(&data, upload, PictureSlot::Profile).await
}

/// Replace the background picture. Same form as `/upload-profile`.
#[utoipa::path(post, path = "/upload-background", tag = "upload", responses(
    (status = 200, description = "New filename in the `message` envelope, or the generic error payload."),
))]
pub async fn post_upload_background(
    State(data): State<Arc<AppState>>,
    upload: ImageUpload,
) -> Result<(StatusCode, Json<ApiResponse<String>>), (StatusCode, Json<ErrorResponseBody>)> {
    replace_picture(&data, upload, PictureSlot::Background).await
}

/// New file is on disk already; point the row at it, then drop the old file.
async fn replace_picture(
    data: &AppState,
    upload: ImageUpload,
    slot: PictureSlot,
) -> Result<(StatusCode, Json<ApiResponse<String>>), (StatusCode, Json<ErrorResponseBody>)> {
    let profile_id = upload.profile_id;
    let Some(image) = upload.stored else {
        return Err(build_err_resp("Rejected picture upload", "no image part in form"));
    };

    let previous = match swap_picture(&data.db, profile_id, slot, &image).await {
        Ok(previous) => previous,
        Err(e) => {
            data.store.discard(profile_id, &image).await;
            return Err(build_err_resp("Failed to update picture", e));
        }
    };

    if let Some(previous) = previous.filter(|previous| *previous != image) {
        data.store
            .discard_unreferenced(&data.db, profile_id, &previous)
            .await;
    }

    Ok(build_resp(StatusCode::OK, image))
}

/// Stores `image` in the slot and returns the name it replaced.
async fn swap_picture(
    db: &DatabaseConnection,
    profile_id: i32,
    slot: PictureSlot,
    image: &str,
) -> Result<Option<String>, DbErr> {
    let txn = db.begin().await?;

    let details = ProfileDetails::find_by_id(profile_id)
        .one(&txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("profile_details {}", profile_id)))?;

    ProfileDetails::update_many()
        .col_expr(slot.column(), Expr::value(image))
        .filter(profile_details::Column::Id.eq(profile_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(slot.current(details))
}
