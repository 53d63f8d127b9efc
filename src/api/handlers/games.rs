use crate::api::error::ApiError;
use crate::api::schemas::{
    CreateGameResponse, ErrorResponse, GetGameStateResponse, MakeMoveResponse, MoveBody,
};
use crate::rpc::messages::{CreateGameRequest, GetGameStateRequest, MakeMoveRequest};
use crate::rpc::Tictactoe;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

/// Create a new game
///
/// Starts a game with an empty board and status "ongoing".
#[utoipa::path(
    post,
    path = "/v1/games",
    tag = "Games",
    responses(
        (status = 200, description = "Game created", body = CreateGameResponse),
        (status = 503, description = "RPC backend unreachable", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_game_handler(
    State(service): State<Arc<dyn Tictactoe>>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let response = service.create_game(CreateGameRequest {}).await?;
    Ok(Json(response))
}

/// Make a move
///
/// Writes the player's mark at (row, col). On a finished game the final
/// state is returned unchanged. Turn order is not enforced.
#[utoipa::path(
    post,
    path = "/v1/games/{game_id}/moves",
    tag = "Games",
    params(
        ("game_id" = String, Path, description = "Game identifier")
    ),
    request_body = MoveBody,
    responses(
        (status = 200, description = "Move applied", body = MakeMoveResponse),
        (status = 400, description = "Off the board or cell taken", body = ErrorResponse),
        (status = 404, description = "Game not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn make_move_handler(
    State(service): State<Arc<dyn Tictactoe>>,
    Path(game_id): Path<String>,
    body: Result<Json<MoveBody>, JsonRejection>,
) -> Result<Json<MakeMoveResponse>, ApiError> {
    let Json(body) = body?;

    let response = service
        .make_move(MakeMoveRequest {
            game_id,
            row: body.row,
            col: body.col,
            player: body.player,
        })
        .await?;
    Ok(Json(response))
}

/// Get the state of a game
#[utoipa::path(
    get,
    path = "/v1/games/{game_id}",
    tag = "Games",
    params(
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Current game state", body = GetGameStateResponse),
        (status = 404, description = "Game not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_game_state_handler(
    State(service): State<Arc<dyn Tictactoe>>,
    Path(game_id): Path<String>,
) -> Result<Json<GetGameStateResponse>, ApiError> {
    let response = service
        .get_game_state(GetGameStateRequest { game_id })
        .await?;
    Ok(Json(response))
}
