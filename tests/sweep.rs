mod common;

use common::{spawn_app, Part};
use profilehub::storage::{SweepReport, Sweeper};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn sweep_removes_orphans_and_keeps_referenced_files() {
    let app = spawn_app().await;
    let id = app.create_profile("Ana", "ana@example.com").await;

    let pic = app
        .post_multipart(
            "/upload-profile",
            &[
                Part::Text("id", &id.to_string()),
                Part::File {
                    field: "image",
                    file_name: "me.png",
                    bytes: b"me",
                },
            ],
        )
        .await["message"]
        .as_str()
        .unwrap()
        .to_string();
    let post = app
        .post_multipart(
            "/post",
            &[
                Part::Text("id", &id.to_string()),
                Part::Text("data", "text"),
                Part::File {
                    field: "image",
                    file_name: "p.png",
                    bytes: b"post",
                },
            ],
        )
        .await["message"]["pics"]
        .as_str()
        .unwrap()
        .to_string();
    let image = app
        .post_multipart(
            "/post_imgonly",
            &[
                Part::Text("id", &id.to_string()),
                Part::File {
                    field: "image",
                    file_name: "i.png",
                    bytes: b"img",
                },
            ],
        )
        .await["message"]["post"]
        .as_str()
        .unwrap()
        .to_string();

    std::fs::write(app.image_path(id, "stray.png"), b"stray").unwrap();
    let ghost_dir = app.state.store.profile_dir(9999);
    std::fs::create_dir_all(&ghost_dir).unwrap();
    std::fs::write(ghost_dir.join("left.png"), b"left").unwrap();
    std::fs::create_dir_all(app.state.store.root().join("not-a-profile")).unwrap();

    let report = Sweeper::new(Arc::clone(&app.state)).run().await.unwrap();
    assert_eq!(
        report,
        SweepReport {
            removed_dirs: 1,
            removed_files: 1,
        }
    );

    assert!(!ghost_dir.exists());
    assert!(!app.image_path(id, "stray.png").exists());
    for name in [&pic, &post, &image] {
        assert!(app.image_path(id, name).exists(), "{} was swept", name);
    }
    assert!(app.state.store.root().join("not-a-profile").exists());
}

#[tokio::test]
async fn grace_period_protects_fresh_files() {
    let app = common::spawn_app_with(|env| {
        env.sweep_grace = std::time::Duration::from_secs(3600);
    })
    .await;
    let id = app.create_profile("Ana", "ana@example.com").await;

    let dir = app.state.store.profile_dir(id);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("fresh.png"), b"fresh").unwrap();

    let report = Sweeper::new(Arc::clone(&app.state)).run().await.unwrap();
    assert_eq!(report, SweepReport::default());
    assert!(dir.join("fresh.png").exists());
}

#[tokio::test]
async fn text_posts_do_not_protect_anything() {
    let app = spawn_app().await;
    let id = app.create_profile("Ana", "ana@example.com").await;
    app.post_json("/post_textonly", json!({ "txt": "t", "id": id }))
        .await;

    let dir = app.state.store.profile_dir(id);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("orphan.png"), b"o").unwrap();

    let report = Sweeper::new(Arc::clone(&app.state)).run().await.unwrap();
    assert_eq!(report.removed_files, 1);
    assert!(!dir.join("orphan.png").exists());
}
