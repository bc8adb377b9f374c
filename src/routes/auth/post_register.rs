use crate::{
    constants::{MSG_EMAIL_TAKEN, MSG_NULL_INPUT, MSG_REGISTERED, NULL_PLACEHOLDER},
    models::{prelude::*, profile, profile_details},
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::{build_err_resp, build_msg_resp, build_resp, hash_pass},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub pass: Option<String>,
}

impl RegisterRequest {
    /// All four fields, unless one is missing or the `"null"` placeholder.
    fn fields(&self) -> Option<(&str, &str, &str, &str)> {
        Some((
            present(&self.name)?,
            present(&self.last_name)?,
            present(&self.email)?,
            present(&self.pass)?,
        ))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|value| *value != NULL_PLACEHOLDER)
}

/// Register a new profile together with its empty details row.
#[utoipa::path(post, path = "/registrate", tag = "auth", request_body = RegisterRequest, responses(
    (status = 200, description = "Registration result message, or the generic error payload."),
))]
pub async fn post_register(
    State(data): State<Arc<AppState>>,
    JsonBody(query): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let Some((first_name, last_name, email, pass)) = query.fields() else {
        return Ok(build_msg_resp(MSG_NULL_INPUT));
    };

    let email_exists = Profile::find()
        .filter(profile::Column::EMail.eq(email))
        .one(&data.db)
        .await
        .map_err(|e| build_err_resp("Failed to fetch profile from database", e))?;

    if email_exists.is_some() {
        return Ok(build_msg_resp(MSG_EMAIL_TAKEN));
    }

    let hashed_password =
        hash_pass(pass).map_err(|e| build_err_resp("Error while hashing password", e))?;

    let txn = data
        .db
        .begin()
        .await
        .map_err(|e| build_err_resp("Failed to start transaction", e))?;

    let new_profile = profile::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        e_mail: Set(email.to_string()),
        password: Set(hashed_password),
        ..Default::default()
    };

    let new_profile = match new_profile.insert(&txn).await {
        Ok(new_profile) => new_profile,
        // Lost a race against another registration with the same email.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Ok(build_msg_resp(MSG_EMAIL_TAKEN));
        }
        Err(e) => return Err(build_err_resp("Failed to insert profile into database", e)),
    };

    profile_details::ActiveModel {
        id: Set(new_profile.id),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| build_err_resp("Failed to insert profile details into database", e))?;

    txn.commit()
        .await
        .map_err(|e| build_err_resp("Failed to commit registration", e))?;

    tracing::info!("registered profile {}", new_profile.id);

    Ok(build_resp(StatusCode::OK, MSG_REGISTERED))
}
