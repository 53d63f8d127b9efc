use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::rpc::messages::{CreateGameResponse, GetGameStateResponse, MakeMoveResponse};

/// Body of a move request; the game id comes from the path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveBody {
    /// Row index, 0 to 2
    pub row: i32,
    /// Column index, 0 to 2
    pub col: i32,
    /// Mark written into the cell
    pub player: String,
}

/// Error payload relayed from the RPC layer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric RPC status code (3 invalid argument, 5 not found)
    pub code: i32,
    /// Human readable message
    pub message: String,
    /// Always empty; kept for client compatibility
    #[schema(value_type = Vec<Object>)]
    pub details: Vec<serde_json::Value>,
}
