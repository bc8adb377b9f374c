mod common;

use common::spawn_app;
use rstest::rstest;
use serde_json::{json, Value};

#[rstest]
#[case(json!({ "name": "null", "lastName": "Doe", "email": "a@b.c", "pass": "x" }))]
#[case(json!({ "name": "Ana", "lastName": "null", "email": "a@b.c", "pass": "x" }))]
#[case(json!({ "name": "Ana", "lastName": "Doe", "email": "null", "pass": "x" }))]
#[case(json!({ "name": "Ana", "lastName": "Doe", "email": "a@b.c", "pass": "null" }))]
#[case(json!({ "name": "Ana", "lastName": "Doe", "email": "a@b.c" }))]
#[tokio::test]
async fn registration_rejects_null_fields(#[case] body: Value) {
    let app = spawn_app().await;

    let resp = app.post_json("/registrate", body).await;
    assert_eq!(resp, json!({ "message": "You can't insert null! Try again." }));

    let login = app
        .post_json("/login", json!({ "name": "Ana", "email": "a@b.c", "pass": "x" }))
        .await;
    assert_eq!(login, json!({ "message": false }));
}

#[tokio::test]
async fn registration_creates_empty_details() {
    let app = spawn_app().await;

    let resp = app.register("Ana", "Doe", "ana@example.com", "pw").await;
    assert_eq!(
        resp,
        json!({ "message": "Successfully registered, you can now login.", "status": 200 })
    );

    let login = app
        .post_json(
            "/login",
            json!({ "name": "Ana", "email": "ana@example.com", "pass": "pw" }),
        )
        .await;
    assert_eq!(login["message"], json!(true));
    assert_eq!(login["imageName"], Value::Null);
    let id = login["id"].as_i64().unwrap();

    let data = app.get(&format!("/data/{}", id)).await;
    assert_eq!(data["first_name"], json!("Ana"));
    assert_eq!(data["last_name"], json!("Doe"));
    assert_eq!(data["e_mail"], json!("ana@example.com"));
    for column in [
        "certificate",
        "school",
        "place",
        "about_me",
        "links",
        "profile_pic",
        "profile_background",
    ] {
        assert_eq!(data[column], Value::Null, "{} should start empty", column);
    }
    assert!(data.get("password").is_none());
}

#[tokio::test]
async fn duplicate_email_is_refused() {
    let app = spawn_app().await;

    app.register("Ana", "Doe", "same@example.com", "pw").await;
    let resp = app.register("Bob", "Roe", "same@example.com", "other").await;
    assert_eq!(
        resp,
        json!({ "message": "User with that E-mail already exists!" })
    );

    let login = app
        .post_json(
            "/login",
            json!({ "name": "Bob", "email": "same@example.com", "pass": "other" }),
        )
        .await;
    assert_eq!(login, json!({ "message": false }));
}

#[rstest]
#[case("Ana", "ana@example.com", "wrong")]
#[case("Anna", "ana@example.com", "pw")]
#[case("Ana", "other@example.com", "pw")]
#[tokio::test]
async fn login_needs_all_three_to_match(
    #[case] name: &str,
    #[case] email: &str,
    #[case] pass: &str,
) {
    let app = spawn_app().await;
    app.register("Ana", "Doe", "ana@example.com", "pw").await;

    let login = app
        .post_json("/login", json!({ "name": name, "email": email, "pass": pass }))
        .await;
    assert_eq!(login, json!({ "message": false }));
}

#[tokio::test]
async fn login_reports_current_profile_picture() {
    let app = spawn_app().await;
    let id = app.create_profile("Ana", "ana@example.com").await;

    let uploaded = app
        .post_multipart(
            "/upload-profile",
            &[
                common::Part::Text("id", &id.to_string()),
                common::Part::File {
                    field: "image",
                    file_name: "me.png",
                    bytes: b"png",
                },
            ],
        )
        .await;
    let name = uploaded["message"].as_str().unwrap().to_string();

    let login = app
        .post_json(
            "/login",
            json!({ "name": "Ana", "email": "ana@example.com", "pass": "secret" }),
        )
        .await;
    assert_eq!(
        login,
        json!({ "message": true, "id": id, "imageName": name })
    );
}

#[tokio::test]
async fn malformed_json_gets_error_payload() {
    let app = spawn_app().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/registrate")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    assert_eq!(app.send_json(request).await, common::error_payload());
}
