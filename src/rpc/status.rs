use crate::game::GameError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// RPC error codes, numbered as in gRPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Code {
    InvalidArgument,
    NotFound,
    Internal,
    Unavailable,
}

impl Code {
    pub fn as_i32(self) -> i32 {
        match self {
            Code::InvalidArgument => 3,
            Code::NotFound => 5,
            Code::Internal => 13,
            Code::Unavailable => 14,
        }
    }
}

/// Error returned by an RPC operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, Error)]
#[display("{code}: {message}")]
pub struct RpcStatus {
    pub code: Code,
    pub message: String,
}

impl RpcStatus {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Code::Unavailable, message)
    }
}

impl From<GameError> for RpcStatus {
    fn from(err: GameError) -> Self {
        match err {
            GameError::NotFound { .. } => RpcStatus::not_found("game not found"),
            GameError::InvalidMove { .. } => RpcStatus::invalid_argument("invalid move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_errors_map_to_codes() {
        let status: RpcStatus = GameError::NotFound {
            game_id: "abc".to_string(),
        }
        .into();
        assert_eq!(status, RpcStatus::not_found("game not found"));

        let status: RpcStatus = GameError::InvalidMove { row: 3, col: 0 }.into();
        assert_eq!(status.code, Code::InvalidArgument);
        assert_eq!(status.message, "invalid move");
    }

    #[test]
    fn test_code_numbers() {
        assert_eq!(Code::InvalidArgument.as_i32(), 3);
        assert_eq!(Code::NotFound.as_i32(), 5);
        assert_eq!(Code::Internal.as_i32(), 13);
        assert_eq!(Code::Unavailable.as_i32(), 14);
    }
}
