use crate::{
    models::{prelude::*, profile},
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::{build_err_resp, check_pass},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub pass: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseBody {
    /// Whether the credentials matched.
    pub message: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Current profile picture; present (possibly `null`) only on success.
    #[serde(rename = "imageName", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub image_name: Option<Option<String>>,
}

impl LoginResponseBody {
    fn failed() -> Self {
        Self {
            message: false,
            id: None,
            image_name: None,
        }
    }
}

/// Check name, email and password of a returning user.
#[utoipa::path(post, path = "/login", tag = "auth", request_body = LoginRequest, responses(
    (status = 200, description = "Login result.", body = LoginResponseBody),
))]
pub async fn post_login(
    State(data): State<Arc<AppState>>,
    JsonBody(query): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let (Some(name), Some(email), Some(pass)) = (&query.name, &query.email, &query.pass) else {
        return Ok((StatusCode::OK, Json(LoginResponseBody::failed())));
    };

    let user = Profile::find()
        .filter(profile::Column::FirstName.eq(name))
        .filter(profile::Column::EMail.eq(email))
        .one(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch profile from database", e))?;

    let user = match user {
        Some(user) if check_pass(&user.password, pass) => user,
        _ => return Ok((StatusCode::OK, Json(LoginResponseBody::failed()))),
    };

    let details = ProfileDetails::find_by_id(user.id)
        .one(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch profile details from database", e))?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseBody {
            message: true,
            id: Some(user.id),
            image_name: Some(details.and_then(|details| details.profile_pic)),
        }),
    ))
}
