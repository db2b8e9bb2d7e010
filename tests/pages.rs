// tests/pages.rs

//! HTML UI tests: listing, random pick, recipe pages and categories.

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::TestApp;
use recipebox::db::models::Recipe;

#[tokio::test]
async fn test_empty_db() {
    let app = TestApp::new();

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No entries."));
}

#[tokio::test]
async fn test_index_lists_recipes() {
    let app = TestApp::new();
    let id = app.insert(Recipe::new("Listed"));

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("No entries."));
    assert!(body.contains("Listed"));
    assert!(body.contains(&format!("href=\"/{id}\"")));
}

#[tokio::test]
async fn test_random_with_no_data() {
    let app = TestApp::new();

    let (status, _) = app.get("/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_with_data() {
    let app = TestApp::new();
    app.insert(Recipe::new("Goulash"));

    let (status, body) = app.get("/random").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Goulash</h1>"));
}

#[tokio::test]
async fn test_with_quantity() {
    let app = TestApp::new();
    let id = app.insert(Recipe::new("with quantity").with_quantity(1));

    let (status, body) = app.get(&format!("/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("with quantity (1)"));
}

#[tokio::test]
async fn test_without_quantity() {
    let app = TestApp::new();
    let id = app.insert(Recipe::new("without quantity"));

    let (status, body) = app.get(&format!("/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>without quantity</h1>"));
}

#[tokio::test]
async fn test_missing_recipe_page() {
    let app = TestApp::new();

    let (status, _) = app.get("/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/favicon.ico").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_without_categories() {
    let app = TestApp::new();

    let (status, _) = app.get("/categories/None").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_with_categories() {
    let app = TestApp::new();
    app.insert(
        Recipe::new("title")
            .with_quantity(10)
            .with_category("category"),
    );

    let (status, body) = app.get("/categories/category").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("title (10)"));
}

#[tokio::test]
async fn test_category_with_spaces() {
    let app = TestApp::new();
    let id = app.insert(Recipe::new("Stew").with_category("slow cooker"));

    let (_, body) = app.get(&format!("/{id}")).await;
    assert!(body.contains("/categories/slow%20cooker"));

    let (status, body) = app.get("/categories/slow%20cooker").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Stew"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_index_repeated_page_param() {
    let app = TestApp::new();
    app.insert(Recipe::new("Listed"));

    let (status, body) = app.get("/?page=1&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Listed"));
}
