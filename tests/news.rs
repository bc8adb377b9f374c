mod common;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::{spawn_app, spawn_app_with};
use serde_json::{json, Value};
use std::{collections::HashMap, net::SocketAddr, time::Duration};
use tokio::net::TcpListener;

async fn search(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "totalResults": 1,
        "results": [{
            "title": format!("about {}", query.get("q").cloned().unwrap_or_default()),
            "apikey": query.get("apikey"),
        }],
    }))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "results": [] }))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn spawn_news_api() -> SocketAddr {
    let app = Router::new()
        .route("/search", get(search))
        .route("/slow", get(slow))
        .route("/broken", get(broken));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn relays_results_of_the_news_api() {
    let addr = spawn_news_api().await;
    let app = spawn_app_with(|env| {
        env.news_api_url = Some(format!("http://{}/search?apikey=", addr));
        env.news_api_key = Some(String::from("test-key&q="));
    })
    .await;

    let resp = app.post_json("/news", json!({ "what": "rust & tokio" })).await;
    assert_eq!(
        resp,
        json!([{ "title": "about rust & tokio", "apikey": "test-key" }])
    );
}

#[tokio::test]
async fn slow_news_api_times_out_with_error_payload() {
    let addr = spawn_news_api().await;
    let app = spawn_app_with(|env| {
        env.news_api_url = Some(format!("http://{}/slow?q=", addr));
        env.news_api_key = Some(String::new());
        env.news_timeout = Duration::from_millis(200);
    })
    .await;

    let resp = tokio::time::timeout(
        Duration::from_secs(3),
        app.post_json("/news", json!({ "what": "x" })),
    )
    .await
    .expect("news route must answer before the upstream does");
    assert_eq!(resp, common::error_payload());
}

#[tokio::test]
async fn upstream_failure_gets_error_payload() {
    let addr = spawn_news_api().await;
    let app = spawn_app_with(|env| {
        env.news_api_url = Some(format!("http://{}/broken?q=", addr));
        env.news_api_key = Some(String::new());
    })
    .await;

    let resp = app.post_json("/news", json!({ "what": "x" })).await;
    assert_eq!(resp, common::error_payload());
}

#[tokio::test]
async fn unconfigured_news_gets_error_payload() {
    let app = spawn_app().await;
    let resp = app.post_json("/news", json!({ "what": "x" })).await;
    assert_eq!(resp, common::error_payload());
}
