use axum::response::IntoResponse;
use axum::Json;
use utoipa::OpenApi;

use crate::api::schemas::*;

/// OpenAPI specification for the Tic-tac-toe gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tic-tac-toe Backend API",
        version = "0.1.0",
        description = "HTTP/JSON gateway for the multiplayer tic-tac-toe RPC service"
    ),
    paths(
        crate::api::handlers::games::create_game_handler,
        crate::api::handlers::games::make_move_handler,
        crate::api::handlers::games::get_game_state_handler,
        get_openapi_json
    ),
    components(schemas(
        CreateGameResponse,
        MakeMoveResponse,
        GetGameStateResponse,
        MoveBody,
        ErrorResponse
    )),
    tags(
        (name = "Games", description = "Create games, make moves and read game state"),
        (name = "Documentation", description = "API documentation endpoints")
    )
)]
pub struct ApiDoc;

/// Get OpenAPI specification in JSON format
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "Documentation",
    responses(
        (
            status = 200,
            description = "OpenAPI specification retrieved successfully",
            content_type = "application/json"
        )
    )
)]
pub async fn get_openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
