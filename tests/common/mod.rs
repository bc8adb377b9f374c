#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use profilehub::{config::Config, migrator::Migrator, routes, AppState};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "profilehub-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _db_dir: TempDir,
    _public_dir: TempDir,
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        field: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let db_dir = tempfile::tempdir().unwrap();
    let public_dir = tempfile::tempdir().unwrap();

    let mut env = Config {
        server_address: String::from("127.0.0.1"),
        server_port: 0,
        database_url: format!(
            "sqlite://{}?mode=rwc",
            db_dir.path().join("profilehub.db").display()
        ),
        db_max_connections: 4,
        public_dir: public_dir.path().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        news_api_url: None,
        news_api_key: None,
        news_timeout: Duration::from_secs(5),
        sweep_interval: None,
        sweep_grace: Duration::from_secs(0),
        log_level: tracing::Level::DEBUG,
    };
    configure(&mut env);

    let db = Database::connect(env.database_url.clone()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let state = Arc::new(AppState::new(db, env).unwrap());
    let router = routes::router(Arc::clone(&state));

    TestApp {
        router,
        state,
        _db_dir: db_dir,
        _public_dir: public_dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    /// Sends the request and decodes the JSON answer, which must come with 200.
    pub async fn send_json(&self, request: Request<Body>) -> Value {
        let (status, body) = self.send(request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn get(&self, uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send_json(request).await
    }

    pub async fn delete(&self, uri: &str) -> Value {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send_json(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send_json(request).await
    }

    pub async fn post_multipart(&self, uri: &str, parts: &[Part<'_>]) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        self.send_json(request).await
    }

    pub async fn register(&self, name: &str, last_name: &str, email: &str, pass: &str) -> Value {
        self.post_json(
            "/registrate",
            json!({ "name": name, "lastName": last_name, "email": email, "pass": pass }),
        )
        .await
    }

    /// Registers a fresh profile and returns its id.
    pub async fn create_profile(&self, name: &str, email: &str) -> i32 {
        self.register(name, "Tester", email, "secret").await;
        let login = self
            .post_json(
                "/login",
                json!({ "name": name, "email": email, "pass": "secret" }),
            )
            .await;
        assert_eq!(login["message"], json!(true));
        login["id"].as_i64().unwrap() as i32
    }

    pub fn image_path(&self, profile_id: i32, name: &str) -> PathBuf {
        self.state.store.profile_dir(profile_id).join(name)
    }

    /// Names of the files in the profile's image directory, sorted.
    pub fn stored_files(&self, profile_id: i32) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.state.store.profile_dir(profile_id)) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                field,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        field, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn error_payload() -> Value {
    json!({ "message": "Error" })
}
