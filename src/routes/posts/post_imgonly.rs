use crate::{
    models::profile_images,
    routes::{extractors::ImageUpload, ErrorResponseBody},
    utils::{build_err_resp, build_resp},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ActiveModelTrait, Set};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImagePostResponseBody {
    pub id: i32,
    /// Stored image filename.
    pub post: String,
    pub date: i64,
    #[serde(rename = "imgID")]
    pub img_id: i32,
}

/// Add a standalone image to a profile.
///
/// Multipart fields: `image`, `id`.
#[utoipa::path(post, path = "/post_imgonly", tag = "posts", responses(
    (status = 200, description = "Created image in the `message` envelope, or the generic error payload."),
))]
pub async fn post_imgonly(
    State(data): State<Arc<AppState>>,
    upload: ImageUpload,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let profile_id = upload.profile_id;
    let Some(image) = upload.stored else {
        return Err(build_err_resp("Rejected image post", "no image part in form"));
    };

    let inserted = profile_images::ActiveModel {
        id: Set(profile_id),
        image: Set(image.clone()),
        date: Set(chrono::Utc::now().timestamp_millis()),
        ..Default::default()
    }
    .insert(&data.db)
    .await;

    let row = match inserted {
        Ok(row) => row,
        Err(e) => {
            data.store.discard(profile_id, &image).await;
            return Err(build_err_resp("Failed to insert image into database", e));
        }
    };

    Ok(build_resp(
        StatusCode::OK,
        ImagePostResponseBody {
            id: row.id,
            post: row.image,
            date: row.date,
            img_id: row.images_id,
        },
    ))
}
