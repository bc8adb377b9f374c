use crate::{
    models::profile_posts,
    routes::{extractors::JsonBody, ErrorResponseBody, PostResponseBody},
    utils::{build_err_resp, build_resp, RecordId},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TextPostRequest {
    #[serde(default)]
    pub txt: String,
    #[schema(value_type = i32)]
    pub id: RecordId,
}

/// Create a post without an image.
#[utoipa::path(post, path = "/post_textonly", tag = "posts", request_body = TextPostRequest, responses(
    (status = 200, description = "Created post in the `message` envelope, or the generic error payload."),
))]
pub async fn post_textonly(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<TextPostRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let post = profile_posts::ActiveModel {
        id: Set(body.id.into()),
        post: Set(body.txt),
        pics: Set(String::new()),
        date: Set(chrono::Utc::now().timestamp_millis()),
        ..Default::default()
    }
    .insert(&data.db)
    .await
    .map_err(|e| build_err_resp("Failed to insert post into database", e))?;

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
