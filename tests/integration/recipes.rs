use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::{client, start};

async fn list(server: &resource_api::server::RunningServer) -> Vec<Value> {
    let res = client().get(server.url("/recipes")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn should_list_recipes_on_get() {
    let server = start().await;

    let res = client().get(server.url("/recipes")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let body: Vec<Value> = res.json().await.unwrap();
    assert!(!body.is_empty());
    for recipe in &body {
        let recipe = recipe.as_object().unwrap();
        for key in ["name", "id", "ingredients"] {
            assert!(recipe.contains_key(key), "missing {key}");
        }
    }

    server.close().await.unwrap();
}

#[tokio::test]
async fn should_add_a_recipe_on_post() {
    let server = start().await;
    let new_recipe = json!({"name": "coffee cake", "ingredients": ["1lb coffee", "1 whole cake"]});

    let res = client()
        .post(server.url("/recipes"))
        .json(&new_recipe)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["id"].clone();
    assert!(id.is_u64());
    assert_eq!(
        body,
        json!({"id": id, "name": "coffee cake", "ingredients": ["1lb coffee", "1 whole cake"]})
    );

    let recipes = list(&server).await;
    assert!(recipes.contains(&body));
    assert_eq!(recipes.iter().filter(|r| r["id"] == id).count(), 1);

    server.close().await.unwrap();
}

#[tokio::test]
async fn should_reject_post_without_ingredients() {
    let server = start().await;
    let before = list(&server).await.len();

    let res = client()
        .post(server.url("/recipes"))
        .json(&json!({"name": "mystery"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&server).await.len(), before);

    server.close().await.unwrap();
}

#[tokio::test]
async fn should_update_recipes_on_put() {
    let server = start().await;
    let id = list(&server).await[0]["id"].clone();
    let update = json!({
        "id": id,
        "name": "pound cake",
        "ingredients": ["1lb butter", "1 whole cake"],
    });

    let res = client()
        .put(server.url(&format!("/recipes/{id}")))
        .json(&update)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let recipes = list(&server).await;
    let updated = recipes.iter().find(|r| r["id"] == id).unwrap();
    assert_eq!(updated, &update);

    server.close().await.unwrap();
}

#[tokio::test]
async fn should_reject_put_with_mismatched_id() {
    let server = start().await;
    let recipes = list(&server).await;
    let (first, second) = (&recipes[0], &recipes[1]);
    let update = json!({"id": second["id"], "name": "pound cake", "ingredients": []});

    let res = client()
        .put(server.url(&format!("/recipes/{}", first["id"])))
        .json(&update)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&server).await, recipes);

    server.close().await.unwrap();
}

#[tokio::test]
async fn should_delete_recipes_on_delete() {
    let server = start().await;
    let before = list(&server).await;
    let id = before[0]["id"].clone();

    let res = client()
        .delete(server.url(&format!("/recipes/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let after = list(&server).await;
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|r| r["id"] != id));

    let res = client()
        .delete(server.url(&format!("/recipes/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.close().await.unwrap();
}
