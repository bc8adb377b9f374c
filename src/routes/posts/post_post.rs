use crate::{
    models::profile_posts,
    routes::{extractors::ImageUpload, ErrorResponseBody},
    utils::{build_err_resp, build_resp},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ActiveModelTrait, Set};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// A freshly created post, echoed back for the client's local view.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponseBody {
    pub id: i32,
    pub post: String,
    pub pics: String,
    pub date: i64,
    pub postid: i32,
}

/// Create a post with text and an image.
///
/// Multipart fields: `image` (only the first one is kept), `data`, `id`.
#[utoipa::path(post, path = "/post", tag = "posts", responses(
    (status = 200, description = "Created post in the `message` envelope, or the generic error payload."),
))]
pub async fn post_post(
    State(data): State<Arc<AppState>>,
    upload: ImageUpload,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let profile_id = upload.profile_id;
    let Some(image) = upload.stored.clone() else {
        return Err(build_err_resp("Rejected post", "no image part in form"));
    };
    let text = upload.text("data").unwrap_or_default().to_string();
    let date = chrono::Utc::now().timestamp_millis();

    let inserted = profile_posts::ActiveModel {
        id: Set(profile_id),
        post: Set(text),
        pics: Set(image.clone()),
        date: Set(date),
        ..Default::default()
    }
    .insert(&data.db)
    .await;

    let post = match inserted {
        Ok(post) => post,
        Err(e) => {
            data.store.discard(profile_id, &image).await;
            return Err(build_err_resp("Failed to insert post into database", e));
        }
    };

    Ok(build_resp(
        StatusCode::OK,
        PostResponseBody {
            id: post.id,
            post: post.post,
            pics: post.pics,
            date: post.date,
            postid: post.posts_id,
        },
    ))
}
