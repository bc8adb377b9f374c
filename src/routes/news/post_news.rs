use crate::{
    routes::{extractors::JsonBody, ErrorResponseBody},
    utils::build_err_resp,
    AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct NewsRequest {
    /// Search term.
    pub what: String,
}

/// Search the external news API and relay its `results`.
///
/// The API key stays on the server. The outbound call is bounded by the
/// configured timeout, so the route always answers.
#[utoipa::path(post, path = "/news", tag = "news", request_body = NewsRequest, responses(
    (status = 200, description = "The `results` array of the news API, or the generic error payload."),
))]
pub async fn post_news(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewsRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponseBody>)> {
    let (Some(base), Some(key)) = (&data.env.news_api_url, &data.env.news_api_key) else {
        return Err(build_err_resp(
            "News proxy is not configured",
            "NEWS_API_URL and NEWS_API_KEY must be set",
        ));
    };

    debug!("searching news for {:?}", body.what);

    // Errors are stripped of their URL, which carries the API key.
    let response = data
        .http
        .get(news_url(base, key, &body.what))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| build_err_resp("News request failed", e.without_url()))?;

    let mut payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| build_err_resp("News response was not JSON", e.without_url()))?;

    Ok(Json(payload["results"].take()))
}

/// `<base><key><term>`, with the term form-encoded.
fn news_url(base: &str, key: &str, what: &str) -> String {
    let term: String = url::form_urlencoded::byte_serialize(what.as_bytes()).collect();
    format!("{}{}{}", base, key, term)
}

#[cfg(test)]
mod tests {
    use super::news_url;

    #[test]
    fn term_is_appended_after_key() {
        assert_eq!(
            news_url("https://news.example/api?apikey=", "k3y&q=", "rust"),
            "https://news.example/api?apikey=k3y&q=rust"
        );
    }

    #[test]
    fn term_cannot_inject_parameters() {
        assert_eq!(
            news_url("https://news.example/api?q=", "", "a&apikey=x y"),
            "https://news.example/api?q=a%26apikey%3Dx+y"
        );
    }
}
