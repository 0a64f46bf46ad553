use crate::application::http::health::__path_health;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefGenie API",
        description = "Generation relay for the ChefGenie recipe app"
    ),
    paths(health)
)]
pub struct ApiDoc;
