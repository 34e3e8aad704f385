//! Integration tests for folder operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_root_folder() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Documents" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Documents");
    assert_eq!(response.body["path"], "/Documents");
    assert!(response.body["parent_id"].is_null());
    assert_eq!(response.body["children"], json!([]));
    assert!(response.body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_two_folder_tree() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let invoices = app.create_folder("Invoices", Some(docs)).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.body.as_array().expect("tree array");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["id"], docs);
    let children = roots[0]["children"].as_array().expect("children");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], invoices);
    assert_eq!(children[0]["path"], "/Documents/Invoices");
    assert_eq!(children[0]["parent_id"], docs);
    assert_eq!(children[0]["children"], json!([]));
}

#[tokio::test]
async fn test_empty_tree() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/folders", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_seeded_tree_shape() {
    let app = helpers::TestApp::seeded().await;

    let response = app.request("GET", "/api/folders", None).await;

    let roots: Vec<&str> = response
        .body
        .as_array()
        .expect("tree array")
        .iter()
        .filter_map(|n| n["name"].as_str())
        .collect();
    assert_eq!(roots, vec!["Documents", "Music", "Pictures", "Work"]);

    let pictures = &response.body[2];
    let children: Vec<&str> = pictures["children"]
        .as_array()
        .expect("children")
        .iter()
        .filter_map(|n| n["name"].as_str())
        .collect();
    assert_eq!(children, vec!["Family", "Vacations"]);

    let transport = &response.body[0]["children"][0]["children"][0];
    assert_eq!(transport["path"], "/Documents/Invoices/Transport");
}

#[tokio::test]
async fn test_separators_are_sanitized() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": " 2024//Q1\\draft " })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "2024-Q1-draft");
    assert_eq!(response.body["path"], "/2024-Q1-draft");
}

#[tokio::test]
async fn test_duplicate_sibling_conflict() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    app.create_folder("Invoices", Some(docs)).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Invoices", "parentId": docs })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.code(), "CONFLICT");
    assert_eq!(
        response.body["error"],
        "A folder with this name already exists here"
    );
}

#[tokio::test]
async fn test_same_name_under_different_parents() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let pics = app.create_folder("Pictures", None).await;

    app.create_folder("2024", Some(docs)).await;
    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "2024", "parentId": pics })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["path"], "/Pictures/2024");
}

#[tokio::test]
async fn test_unknown_parent_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Orphan", "parentId": 999 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.code(), "NOT_FOUND");
    assert_eq!(response.body["error"], "Parent folder not found");
}

#[tokio::test]
async fn test_invalid_folder_bodies() {
    let app = helpers::TestApp::new();

    let cases = [
        json!({ "name": "" }),
        json!({ "name": "   " }),
        json!({ "name": "x".repeat(256) }),
        json!({ "parentId": 1 }),
        json!({ "name": "Docs", "parentId": "one" }),
        json!({ "name": 42 }),
    ];
    for body in cases {
        let response = app.request("POST", "/api/folders", Some(body.clone())).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.code(), "VALIDATION");
    }

    let response = app
        .raw_request("POST", "/api/folders", "{\"name\": ".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_folder() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    app.create_folder("Invoices", Some(docs)).await;

    let response = app
        .request("GET", &format!("/api/folders/{docs}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["path"], "/Documents");
    assert_eq!(response.body["children"], json!([]));

    let response = app.request("GET", "/api/folders/999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Folder not found");

    let response = app.request("GET", "/api/folders/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid folder id");
}

#[tokio::test]
async fn test_subfolders_are_flat() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let invoices = app.create_folder("Invoices", Some(docs)).await;
    app.create_folder("Transport", Some(invoices)).await;
    app.create_folder("Contracts", Some(docs)).await;

    let response = app
        .request("GET", &format!("/api/folders/{docs}/subfolders"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let subs = response.body.as_array().expect("array");
    let names: Vec<&str> = subs.iter().filter_map(|n| n["name"].as_str()).collect();
    assert_eq!(names, vec!["Contracts", "Invoices"]);
    assert!(subs.iter().all(|n| n["children"] == json!([])));

    let response = app.request("GET", "/api/folders/999/subfolders", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = app.request("GET", "/api/folders/x/subfolders", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
