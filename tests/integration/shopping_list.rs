use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::{client, start};

#[tokio::test]
async fn create_and_list_items() {
    let server = start().await;

    let res = client()
        .post(server.url("/shopping-list"))
        .json(&json!({"name": "coffee", "budget": 7.25}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let item: Value = res.json().await.unwrap();
    assert_eq!(item["name"], "coffee");
    assert_eq!(item["budget"].as_f64(), Some(7.25));

    let items: Vec<Value> = client()
        .get(server.url("/shopping-list"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.last(), Some(&item));

    server.close().await.unwrap();
}

#[tokio::test]
async fn update_unknown_item_is_not_found() {
    let server = start().await;

    let res = client()
        .put(server.url("/shopping-list/500"))
        .json(&json!({"id": 500, "name": "ghost", "budget": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.close().await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let server = start().await;

    let res = client()
        .post(server.url("/shopping-list"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    server.close().await.unwrap();
}
