use super::handlers::{
    generate_image::{__path_generate_image, generate_image},
    generate_recipes::{__path_generate_recipes, generate_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, generate_image))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/generate-image", state.args.server.root_path),
            post(generate_image),
        )
}
