use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::{client, start};

#[tokio::test]
async fn lists_seeded_posts() {
    let server = start().await;

    let res = client().get(server.url("/blog-posts")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let posts: Vec<Value> = res.json().await.unwrap();
    assert!(!posts.is_empty());
    for post in &posts {
        for key in ["id", "title", "content", "author", "publishDate"] {
            assert!(post.get(key).is_some(), "missing {key}");
        }
    }

    server.close().await.unwrap();
}

#[tokio::test]
async fn create_defaults_publish_date_and_keeps_given_one() {
    let server = start().await;

    let res = client()
        .post(server.url("/blog-posts"))
        .json(&json!({"title": "Hello", "content": "First!", "author": "Ada"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let defaulted: Value = res.json().await.unwrap();
    assert!(defaulted["publishDate"].is_string());

    let res = client()
        .post(server.url("/blog-posts"))
        .json(&json!({
            "title": "Dated",
            "content": "Written earlier.",
            "author": "Ada",
            "publishDate": "2020-05-17T08:30:00Z",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let dated: Value = res.json().await.unwrap();
    assert_eq!(dated["publishDate"], "2020-05-17T08:30:00Z");
    assert_ne!(dated["id"], defaulted["id"]);

    server.close().await.unwrap();
}

#[tokio::test]
async fn create_without_author_is_rejected() {
    let server = start().await;

    let res = client()
        .post(server.url("/blog-posts"))
        .json(&json!({"title": "Anonymous", "content": "..."}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing `author` in request body");

    server.close().await.unwrap();
}

#[tokio::test]
async fn get_update_and_delete_single_post() {
    let server = start().await;
    let url = server.url("/blog-posts/1");

    let res = client().get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let original: Value = res.json().await.unwrap();

    let res = client()
        .put(&url)
        .json(&json!({"id": 1, "title": "Revised", "content": "New text", "author": "Jane Doe"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let revised: Value = client().get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(revised["id"], 1);
    assert_eq!(revised["title"], "Revised");
    assert_eq!(revised["publishDate"], original["publishDate"]);

    let res = client().delete(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client().get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.close().await.unwrap();
}
