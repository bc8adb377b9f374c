use crate::{
    models::{prelude::*, profile_posts, profile_posts::Model as ProfilePost},
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
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// Get every post of a profile, newest first.
#[utoipa::path(get, path = "/posts/{id}", tag = "posts",
    params(("id" = String, Path, description = "Profile id.")),
    responses(
        (status = 200, description = "Posts ordered by date, newest first.", body = [ProfilePost]),
    )
)]
pub async fn get_posts(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let id = parse_id(&id)?;

    let posts = ProfilePosts::find()
        .filter(profile_posts::Column::Id.eq(id))
        .order_by_desc(profile_posts::Column::Date)
        .order_by_desc(profile_posts::Column::PostsId)
        .all(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch posts", e))?;

    Ok(Json(posts))
}
