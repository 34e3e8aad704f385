//! Integration tests for file operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_file_derives_type_and_path() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "folderId": docs, "name": "archive.tar.gz" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["path"], "/Documents/archive.tar.gz");
    assert_eq!(response.body["file_type"], "gz");
    assert_eq!(response.body["file_size"], 0);
    assert_eq!(response.body["folder_id"], docs);
}

#[tokio::test]
async fn test_names_without_extension_have_null_type() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    for name in [".gitignore", "notes.", "README"] {
        let response = app
            .request(
                "POST",
                "/api/files",
                Some(json!({ "folderId": docs, "name": name })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{name}");
        assert!(response.body["file_type"].is_null(), "{name}");
    }
}

#[tokio::test]
async fn test_explicit_type_and_size() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({
                "folderId": docs,
                "name": "cv.pdf",
                "fileType": "resume",
                "fileSize": 2048.9
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["file_type"], "resume");
    assert_eq!(response.body["file_size"], 2048);

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "folderId": docs, "name": "photo.jpg", "fileType": null })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["file_type"].is_null());
}

#[tokio::test]
async fn test_duplicate_file_conflict() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let body = json!({ "folderId": docs, "name": "cv.pdf" });

    let first = app.request("POST", "/api/files", Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", "/api/files", Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.body["error"],
        "A file with this name already exists here"
    );
}

#[tokio::test]
async fn test_missing_folder_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "folderId": 404, "name": "cv.pdf" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Folder not found");
}

#[tokio::test]
async fn test_invalid_file_bodies() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;

    let cases = [
        json!({ "name": "cv.pdf" }),
        json!({ "folderId": docs, "name": "" }),
        json!({ "folderId": docs, "name": " \t " }),
        json!({ "folderId": docs, "name": "cv.pdf", "fileSize": -1 }),
        json!({ "folderId": docs, "name": "cv.pdf", "fileSize": "big" }),
        json!({ "folderId": docs, "name": "cv.pdf", "fileType": 7 }),
    ];
    for body in cases {
        let response = app.request("POST", "/api/files", Some(body.clone())).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[tokio::test]
async fn test_list_files_sorted_by_type() {
    let app = helpers::TestApp::seeded().await;
    let pictures = app
        .request("GET", "/api/folders", None)
        .await
        .body[2]["id"]
        .as_i64()
        .expect("Pictures id");

    app.request(
        "POST",
        "/api/files",
        Some(json!({ "folderId": pictures, "name": "LICENSE" })),
    )
    .await;
    app.request(
        "POST",
        "/api/files",
        Some(json!({ "folderId": pictures, "name": "banner.png" })),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/folders/{pictures}/files"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["banner.png", "logo.png", "wireframe.svg", "LICENSE"]
    );

    let response = app.request("GET", "/api/folders/999/files", None).await;
    assert_eq!(response.body, json!([]));

    let response = app.request("GET", "/api/folders/nope/files", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_file() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let created = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "folderId": docs, "name": "cv.pdf" })),
        )
        .await;
    let id = created.body["id"].as_i64().expect("file id");

    let response = app.request("GET", &format!("/api/files/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "cv.pdf");

    let response = app.request("GET", "/api/files/999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/files/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid file id");
}
