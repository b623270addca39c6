//! Integration tests for the Products domain
//!
//! These tests run against a real MongoDB via testcontainers to check:
//! - numeric id lookups against the stored `id` field
//! - `distinct` over categories, skipping non-string values
//! - `$text` search ranking and limits through the HTTP router
//!
//! They need Docker and are ignored by default:
//! `cargo test -p domain_products -- --ignored`

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use domain_products::{handlers, MongoProductRepository, ProductRepository, ProductService};
use http_body_util::BodyExt;
use mongodb::bson::{doc, Document};
use serde_json::Value;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use tower::ServiceExt;

async fn seeded_repository(mongo: &TestMongo, builder: &TestDataBuilder) -> MongoProductRepository {
    let repo = MongoProductRepository::new(mongo.connector());
    repo.init_indexes().await.unwrap();

    let products = mongo.database().collection::<Document>("products");
    products
        .insert_many(vec![
            doc! {
                "id": builder.product_id(0),
                "name": "Brass Desk Lamp",
                "description": "A warm desk lamp for late reading",
                "category": "home",
                "price": 249900,
            },
            doc! {
                "id": builder.product_id(1),
                "name": "Reading Glasses",
                "description": "Lightweight frames",
                "category": "accessories",
                "price": 799,
            },
            doc! {
                "id": builder.product_id(2),
                "name": "Lamp Oil",
                "description": "Refill for oil lamps. Lamp lamp lamp.",
                "category": "home",
                "price": 150,
            },
            doc! {
                "id": builder.product_id(3),
                "name": "Mystery Box",
                "category": 42,
                "image": ["front.jpg", "back.jpg"],
                "stock": "5",
            },
        ])
        .await
        .unwrap();

    repo
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_by_id_matches_numeric_id() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("find_by_id");
    let repo = seeded_repository(&mongo, &builder).await;

    let product = repo.find_by_id(builder.product_id(1)).await.unwrap();
    let product = assert_some(product, "seeded product should exist");
    assert_eq!(product.id, builder.product_id(1));
    assert_eq!(product.name(), Some("Reading Glasses"));
    assert!(product.object_id.is_some());

    let missing = repo.find_by_id(builder.product_id(99)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_distinct_categories_skips_non_strings() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("distinct_categories");
    let repo = seeded_repository(&mongo, &builder).await;

    let mut categories = repo.distinct_categories().await.unwrap();
    categories.sort();
    assert_eq!(categories, vec!["accessories".to_string(), "home".to_string()]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_text_search_returns_scores() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("text_search");
    let repo = seeded_repository(&mongo, &builder).await;

    let hits = repo.text_search("lamp", 5).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.score > 0.0));

    let scores: Vec<f64> = hits.iter().map(|hit| hit.score).collect();
    assert_descending(&scores, "text search");
}

// ============================================================================
// HTTP Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_http_search_respects_limit() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("http_search");
    let repo = seeded_repository(&mongo, &builder).await;
    let app = handlers::router(ProductService::new(repo));

    let (status, body) = get_json(app, "/search?q=lamp&limit=1").await;
    assert_eq!(status, StatusCode::OK);

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert!(products[0]["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_http_get_product_round_trip() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("http_get_product");
    let repo = seeded_repository(&mongo, &builder).await;
    let app = handlers::router(ProductService::new(repo));

    let id = builder.product_id(0);
    let (status, body) = get_json(app.clone(), &format!("/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["price"], 249900.0);
    assert!(body["_id"].is_string());

    let (status, _) = get_json(app, "/products/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_http_get_product_with_irregular_fields() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("http_irregular_fields");
    let repo = seeded_repository(&mongo, &builder).await;
    let app = handlers::router(ProductService::new(repo));

    let id = builder.product_id(3);
    let (status, body) = get_json(app, &format!("/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], 42);
    assert_eq!(body["image"], serde_json::json!(["front.jpg", "back.jpg"]));
    assert_eq!(body["stock"], "5");
}
