#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use chefgenie_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use clap::Parser;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const RECIPES: &str = r#"[
    {"title": "Chicken Stir-Fry", "description": "Quick and savory.",
     "prepTime": "10 minutes", "cookTime": "15 minutes",
     "ingredients": ["1 chicken breast", "1 cup broccoli"], "instructions": ["Slice.", "Fry."]},
    {"title": "Burnt Rice Bowl", "description": "Crispy rice.",
     "prepTime": "5 minutes", "cookTime": "20 minutes",
     "ingredients": ["2 cups rice"], "instructions": ["Toast the rice."]},
    {"title": "Broccoli Soup", "description": "Creamy and green.",
     "prepTime": "10 minutes", "cookTime": "25 minutes",
     "ingredients": ["2 heads broccoli"], "instructions": ["Simmer.", "Blend."]}
]"#;

/// Stand-in for the Gemini API. Text calls answer `recipe_text`; image calls
/// fail with a provider error when the prompt mentions "Burnt".
#[derive(Clone)]
struct FakeGemini {
    recipe_text: Arc<String>,
}

async fn model_action(
    State(gemini): State<FakeGemini>,
    Path(model_action): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if model_action.ends_with(":generateContent") {
        let text = gemini.recipe_text.as_str();
        return (
            StatusCode::OK,
            Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})),
        );
    }

    let prompt = body["instances"][0]["prompt"].as_str().unwrap_or_default();
    if prompt.contains("Burnt") {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": {"code": 503, "message": "model overloaded"}})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({"predictions": [{"bytesBase64Encoded": "AAAA", "mimeType": "image/jpeg"}]})),
    )
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts a fake Gemini upstream and returns its base URL.
pub async fn spawn_gemini(recipe_text: &str) -> String {
    let app = Router::new()
        .route("/v1beta/models/{model_action}", post(model_action))
        .with_state(FakeGemini {
            recipe_text: Arc::new(recipe_text.to_string()),
        });

    format!("http://{}", serve(app).await)
}

/// Builds the relay router against the given upstream.
pub fn relay_router(gemini_base_url: &str) -> axum::Router {
    let args = Args::try_parse_from([
        "chefgenie-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        gemini_base_url,
        "--root-path",
        "/api",
        "--metrics",
        "false",
    ])
    .unwrap();

    router(state(Arc::new(args)).unwrap()).unwrap()
}

/// Serves the relay on a local listener and returns its `{root_path}` URL.
pub async fn spawn_relay(gemini_base_url: &str) -> String {
    let addr = serve(relay_router(gemini_base_url)).await;
    format!("http://{addr}/api")
}
