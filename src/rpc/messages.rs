//! Request and response messages of the Tictactoe service.
//!
//! The same types travel bincode-encoded over the RPC wire and as JSON
//! through the HTTP gateway, so field names are camelCase.

use crate::game::MoveOutcome;
use crate::rpc::status::RpcStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateGameRequest {}

/// Response when a game is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    /// Opaque unique game identifier
    pub game_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MakeMoveRequest {
    pub game_id: String,
    /// Row index, 0 to 2
    pub row: i32,
    /// Column index, 0 to 2
    pub col: i32,
    /// Mark written into the cell, taken verbatim
    pub player: String,
}

/// Game state after a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MakeMoveResponse {
    /// "ongoing", "draw" or "<mark>_wins"
    pub status: String,
    /// Nine cells in row-major order, empty cells as ""
    pub board: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGameStateRequest {
    pub game_id: String,
}

/// Current game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGameStateResponse {
    /// "ongoing", "draw" or "<mark>_wins"
    pub status: String,
    /// Nine cells in row-major order, empty cells as ""
    pub board: Vec<String>,
}

impl From<MoveOutcome> for MakeMoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            status: outcome.status.to_string(),
            board: outcome.board,
        }
    }
}

impl From<MoveOutcome> for GetGameStateResponse {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            status: outcome.status.to_string(),
            board: outcome.board,
        }
    }
}

/// Envelope for a call on the binary wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpcRequest {
    CreateGame(CreateGameRequest),
    MakeMove(MakeMoveRequest),
    GetGameState(GetGameStateRequest),
}

impl RpcRequest {
    pub fn method(&self) -> &'static str {
        match self {
            RpcRequest::CreateGame(_) => "CreateGame",
            RpcRequest::MakeMove(_) => "MakeMove",
            RpcRequest::GetGameState(_) => "GetGameState",
        }
    }
}

/// Envelope for a reply on the binary wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpcResponse {
    CreateGame(CreateGameResponse),
    MakeMove(MakeMoveResponse),
    GetGameState(GetGameStateResponse),
    Error(RpcStatus),
}
