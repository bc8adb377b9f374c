use axum::{extract::Query, response::IntoResponse, Json};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{constants::VERSION, routes::extractors::JsonBody};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct StatusResponseBody {
    pub description: String,
    pub server_time: DateTime<Local>,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
}

#[derive(Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct StatusRequest {
    /// Returned unchanged in the response.
    pub echo: Option<String>,
}

fn status_body(echo: Option<String>) -> Json<StatusResponseBody> {
    Json(StatusResponseBody {
        description: String::from("Status check successful."),
        server_time: chrono::Local::now(),
        version: String::from(VERSION),
        echo,
    })
}

#[utoipa::path(get, path = "/api/status", tag = "utils", params(StatusRequest), responses(
    (status = 200, description = "Status check successful.", body = StatusResponseBody),
))]
pub async fn get_status(Query(query): Query<StatusRequest>) -> impl IntoResponse {
    status_body(query.echo)
}

#[utoipa::path(post, path = "/api/status", tag = "utils", request_body = StatusRequest, responses(
    (status = 200, description = "Status check successful.", body = StatusResponseBody),
))]
pub async fn post_status(JsonBody(query): JsonBody<StatusRequest>) -> impl IntoResponse {
    status_body(query.echo)
}
