use crate::{
    models::{prelude::*, profile_images},
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
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ImageResponseBody {
    pub image: String,
    pub date: i64,
    pub images_id: i32,
}

/// Get every standalone image of a profile, newest first.
#[utoipa::path(get, path = "/images/{id}", tag = "posts",
    params(("id" = String, Path, description = "Profile id.")),
    responses(
        (status = 200, description = "Images ordered by date, newest first.", body = [ImageResponseBody]),
    )
)]
pub async fn get_images(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let id = parse_id(&id)?;

    let images = ProfileImages::find()
        .select_only()
        .columns([
            profile_images::Column::Image,
            profile_images::Column::Date,
            profile_images::Column::ImagesId,
        ])
        .filter(profile_images::Column::Id.eq(id))
        .order_by_desc(profile_images::Column::Date)
        .order_by_desc(profile_images::Column::ImagesId)
        .into_model::<ImageResponseBody>()
        .all(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch images", e))?;

    Ok(Json(images))
}
