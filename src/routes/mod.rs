pub mod auth;
pub mod extractors;
pub mod news;
pub mod posts;
pub mod profile;
pub mod upload;
pub mod utils;

pub use self::{
    auth::{LoginRequest, LoginResponseBody, RegisterRequest},
    news::NewsRequest,
    posts::{
        DeleteEntryRequest, ImagePostResponseBody, ImageResponseBody, PostResponseBody,
        TextPostRequest,
    },
    profile::{ProfileDataResponseBody, UpdateDataRequest, UpdateDataResponseBody},
    upload::DeleteImageRequest,
    utils::{StatusRequest, StatusResponseBody},
};

use crate::{
    models::{profile_images::Model as ProfileImage, profile_posts::Model as ProfilePost},
    AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Generic failure payload, always `{"message": "Error"}`.
#[derive(Clone, Deserialize, Serialize, ToSchema, Debug)]
pub struct ErrorResponseBody {
    pub message: String,
}

/// The `{ message, status }` envelope most routes answer with.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct ApiResponse<T> {
    pub message: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        description = "profilehub's backend documentations.",
        license(name = "MIT or Apache-2.0"),
    ),
    tags(
        (
            name = "auth",
            description = "Register and login."
        ),
        (
            name = "profile",
            description = "Reading, updating and deleting profile data."
        ),
        (
            name = "posts",
            description = "Text and image posts of a profile."
        ),
        (
            name = "upload",
            description = "Profile and background pictures."
        ),
        (
            name = "news",
            description = "Proxy to the external news search."
        ),
        (
            name = "utils",
            description = "Getting server status."
        )
    ),
    paths(
        auth::post_login,
        auth::post_register,
        profile::get_data,
        profile::post_update_data,
        profile::delete_profile,
        posts::get_posts,
        posts::get_images,
        posts::post_post,
        posts::post_textonly,
        posts::post_imgonly,
        posts::post_delete_post,
        posts::post_delete_imgpost,
        upload::post_upload_profile,
        upload::post_upload_background,
        upload::post_delete_img,
        news::post_news,
        utils::get_status,
        utils::post_status,
    ),
    components(schemas(
        DeleteEntryRequest,
        DeleteImageRequest,
        ErrorResponseBody,
        ImagePostResponseBody,
        ImageResponseBody,
        LoginRequest,
        LoginResponseBody,
        NewsRequest,
        PostResponseBody,
        ProfileDataResponseBody,
        ProfileImage,
        ProfilePost,
        RegisterRequest,
        StatusRequest,
        StatusResponseBody,
        TextPostRequest,
        UpdateDataRequest,
        UpdateDataResponseBody,
    ))
)]
pub struct ApiDoc;

pub fn router(app_state: Arc<AppState>) -> Router {
    let public_dir = app_state.env.public_dir.clone();
    let body_limit = app_state.env.max_upload_bytes;

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/status", get(utils::get_status).post(utils::post_status))
        .route("/data/:id", get(profile::get_data))
        .route("/posts/:id", get(posts::get_posts))
        .route("/images/:id", get(posts::get_images))
        .route("/news", post(news::post_news))
        .route("/upload-profile", post(upload::post_upload_profile))
        .route("/upload-background", post(upload::post_upload_background))
        .route("/update-data", post(profile::post_update_data))
        .route("/post", post(posts::post_post))
        .route("/post_textonly", post(posts::post_textonly))
        .route("/post_imgonly", post(posts::post_imgonly))
        .route("/registrate", post(auth::post_register))
        .route("/login", post(auth::post_login))
        .route("/delete/:id", delete(profile::delete_profile))
        .route("/delete-img", post(upload::post_delete_img))
        .route("/delete_imgpost", post(posts::post_delete_imgpost))
        .route("/delete-post", post(posts::post_delete_post))
        .fallback_service(ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
