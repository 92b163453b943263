use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use recipe_api::ApiConfig;
use serde_json::{json, Value};

use super::make_app;
use crate::{toasts::ToastOptions, AppConfig, AppState};

async fn recipe_by_id(Path(id): Path<String>) -> Response {
    if id != "42" {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response();
    }

    Json(json!({
        "id": 42,
        "name": "Shakshuka",
        "cover_image": null,
        "description": "Eggs in sauce",
        "servings": 3,
        "instructions": ["Simmer the sauce", "Crack the eggs"],
        "ingredients": [{ "id": 1, "name": "Eggs", "quantity": "4" }],
        "tags": [{ "id": 1, "name": "vegetarian" }]
    }))
    .into_response()
}

async fn create_recipe(Json(mut body): Json<Value>) -> Response {
    if body.get("name").and_then(Value::as_str) == Some("") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "name": ["This field may not be blank."] })),
        )
            .into_response();
    }

    if let Some(object) = body.as_object_mut() {
        object.remove("ingredients");
        object.insert("cover_image".to_string(), Value::Null);
    }

    (StatusCode::CREATED, Json(body)).into_response()
}

async fn create_named(Json(body): Json<Value>) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "id": 9, "name": body.get("name").cloned().unwrap_or(Value::Null) })),
    )
        .into_response()
}

/// A stand-in for the recipes backend, serving a fixed catalogue.
pub(crate) async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/api/recipes/",
            get(|| async {
                Json(json!([
                    { "id": 42, "name": "Shakshuka", "cover_image": null, "description": "Eggs in sauce", "tags": [1] },
                    { "id": 7, "name": "Pancakes", "cover_image": null, "description": "Sunday breakfast", "tags": [2] }
                ]))
            })
            .post(create_recipe),
        )
        .route("/api/recipes/{id}/", get(recipe_by_id))
        .route(
            "/api/ingredients/",
            get(|| async { Json(json!([{ "id": 1, "name": "Eggs" }, { "id": 2, "name": "Flour" }])) })
                .post(create_named),
        )
        .route(
            "/api/tags/",
            get(|| async { Json(json!([{ "id": 1, "name": "vegetarian" }, { "id": 2, "name": "sweet" }])) })
                .post(create_named),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

/// An address nothing listens on.
pub(crate) async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/api")
}

pub(crate) fn create_test_app(base_url: String) -> (Router, AppState) {
    let config = AppConfig {
        api: ApiConfig { base_url },
        toasts: ToastOptions::default(),
        bind: SocketAddr::from(([127, 0, 0, 1], 0)),
    };
    let state = AppState::new(config).unwrap();

    (make_app(state.clone()), state)
}

pub(crate) async fn response_body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
