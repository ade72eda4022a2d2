//! Handler tests for the Items domain
//!
//! Routes are exercised with `oneshot()` against the in-memory repository,
//! so these cover request parsing, status codes and error bodies without a
//! database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with(repo: InMemoryItemRepository) -> Router {
    Router::new().nest("/items", handlers::router(ItemService::new(repo)))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn seed(repo: &InMemoryItemRepository, name: &str, price: f64, quantity: i32) -> Item {
    repo.create(CreateItem {
        name: name.to_string(),
        description: None,
        price,
        quantity,
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_create_item_returns_201() {
    let app = app_with(InMemoryItemRepository::new());

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({
                "name": "Laptop",
                "description": "Laptop untuk cloud computing",
                "price": 15000000,
                "quantity": 10
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item: Value = json_body(response.into_body()).await;
    assert_eq!(item["id"], 1);
    assert_eq!(item["name"], "Laptop");
    assert_eq!(item["price"], 15000000.0);
    assert_eq!(item["quantity"], 10);
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_null());
}

#[tokio::test]
async fn test_create_item_defaults_quantity_to_zero() {
    let app = app_with(InMemoryItemRepository::new());

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({ "name": "Mouse", "price": 150000 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.quantity, 0);
    assert_eq!(item.description, None);
}

#[tokio::test]
async fn test_create_item_validation_errors_are_422() {
    let cases = [
        json!({ "name": "", "price": 1 }),
        json!({ "name": "x".repeat(101), "price": 1 }),
        json!({ "name": "Laptop", "price": 0 }),
        json!({ "name": "Laptop", "price": -1 }),
        json!({ "name": "Laptop", "price": 1, "quantity": -1 }),
        json!({ "price": 1 }),
        json!({ "name": "Laptop", "price": "cheap" }),
    ];

    for body in cases {
        let app = app_with(InMemoryItemRepository::new());
        let response = app
            .oneshot(json_request("POST", "/items", body.clone()))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body: {body}"
        );
        let error: Value = json_body(response.into_body()).await;
        assert!(error["code"].is_number());
        assert!(error["message"].is_string());
    }
}

#[tokio::test]
async fn test_get_item_and_not_found_message() {
    let repo = InMemoryItemRepository::new();
    let created = seed(&repo, "Keyboard", 500000.0, 5).await;
    let app = app_with(repo);

    let response = app
        .clone()
        .oneshot(get(&format!("/items/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, created);

    let response = app.oneshot(get("/items/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
    assert_eq!(error["message"], "Item with id=999 not found");
}

#[tokio::test]
async fn test_non_integer_id_is_422() {
    let app = app_with(InMemoryItemRepository::new());
    let response = app.oneshot(get("/items/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_items_pagination_and_total() {
    let repo = InMemoryItemRepository::new();
    for i in 0..25 {
        seed(&repo, &format!("item-{i:02}"), 1.0, 1).await;
    }
    let app = app_with(repo);

    let response = app.clone().oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 25);
    assert_eq!(page.items.len(), 20);
    assert_eq!(page.items[0].id, 1);

    let response = app
        .clone()
        .oneshot(get("/items?skip=20&limit=10"))
        .await
        .unwrap();
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 25);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].id, 21);

    let response = app.oneshot(get("/items?skip=100")).await.unwrap();
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 25);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_list_items_rejects_bad_paging() {
    for uri in [
        "/items?limit=0",
        "/items?limit=101",
        "/items?skip=-1",
        "/items?skip=9223372036854775808",
        "/items?skip=18446744073709551615",
        "/items?limit=ten",
    ] {
        let app = app_with(InMemoryItemRepository::new());
        let response = app.oneshot(get(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn test_list_items_largest_skip_is_an_empty_page() {
    let repo = InMemoryItemRepository::new();
    seed(&repo, "Laptop", 15000000.0, 10).await;
    let app = app_with(repo);

    let response = app
        .oneshot(get("/items?skip=9223372036854775807"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 1);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_list_items_search() {
    let repo = InMemoryItemRepository::new();
    seed(&repo, "Laptop", 15000000.0, 10).await;
    seed(&repo, "Mouse", 150000.0, 50).await;
    repo.create(CreateItem {
        name: "Sleeve".to_string(),
        description: Some("Protects a laptop".to_string()),
        price: 90000.0,
        quantity: 3,
    })
    .await
    .unwrap();
    let app = app_with(repo);

    let response = app.clone().oneshot(get("/items?search=LAP")).await.unwrap();
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 2);
    let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Laptop", "Sleeve"]);

    let response = app.clone().oneshot(get("/items?search=")).await.unwrap();
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 3);

    let response = app.oneshot(get("/items?search=%20%20%20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page: ItemListResponse = json_body(response.into_body()).await;
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_update_item_partial() {
    let repo = InMemoryItemRepository::new();
    let created = repo
        .create(CreateItem {
            name: "Laptop".to_string(),
            description: Some("old".to_string()),
            price: 15000000.0,
            quantity: 10,
        })
        .await
        .unwrap();
    let app = app_with(repo);
    let uri = format!("/items/{}", created.id);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({ "price": 14000000 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.price, 14000000.0);
    assert_eq!(item.name, "Laptop");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.description.as_deref(), Some("old"));
    assert_eq!(item.created_at, created.created_at);
    assert!(item.updated_at.is_some());

    let response = app
        .oneshot(json_request("PUT", &uri, json!({ "description": null })))
        .await
        .unwrap();
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.description, None);
}

#[tokio::test]
async fn test_update_item_errors() {
    let repo = InMemoryItemRepository::new();
    let created = seed(&repo, "Laptop", 1.0, 1).await;
    let app = app_with(repo);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/items/999", json!({ "quantity": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/items/{}", created.id),
            json!({ "price": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_item() {
    let repo = InMemoryItemRepository::new();
    let created = seed(&repo, "Laptop", 1.0, 1).await;
    let app = app_with(repo);
    let uri = format!("/items/{}", created.id);

    let response = app
        .clone()
        .oneshot(Request::delete(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .clone()
        .oneshot(Request::delete(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_route_is_not_an_id() {
    let repo = InMemoryItemRepository::new();
    seed(&repo, "Laptop", 10.0, 2).await;
    seed(&repo, "Mouse", 4.0, 0).await;
    let app = app_with(repo);

    let response = app.oneshot(get("/items/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats: ItemStats = json_body(response.into_body()).await;
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.total_quantity, 2);
    assert_eq!(stats.total_value, 20.0);
    assert_eq!(stats.average_price, 7.0);
    assert_eq!(stats.out_of_stock_items, 1);
}

#[tokio::test]
async fn test_stats_on_empty_inventory() {
    let app = app_with(InMemoryItemRepository::new());
    let response = app.oneshot(get("/items/stats")).await.unwrap();
    let stats: ItemStats = json_body(response.into_body()).await;
    assert_eq!(stats, ItemStats::default());
}
