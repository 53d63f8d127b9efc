use crate::rpc::messages::*;
use crate::rpc::status::RpcStatus;
use crate::state::GameStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// The three unary operations of the game service.
///
/// Implemented in-process by [`TictactoeService`] and remotely by
/// [`crate::rpc::RpcClient`], so the HTTP gateway can sit on either.
#[async_trait]
pub trait Tictactoe: Send + Sync + 'static {
    async fn create_game(&self, req: CreateGameRequest)
        -> Result<CreateGameResponse, RpcStatus>;

    async fn make_move(&self, req: MakeMoveRequest) -> Result<MakeMoveResponse, RpcStatus>;

    async fn get_game_state(
        &self,
        req: GetGameStateRequest,
    ) -> Result<GetGameStateResponse, RpcStatus>;
}

/// Service backed by the shared in-memory store
#[derive(Debug, Clone)]
pub struct TictactoeService {
    store: Arc<GameStore>,
}

impl TictactoeService {
    pub fn new(store: Arc<GameStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<GameStore> {
        &self.store
    }
}

#[async_trait]
impl Tictactoe for TictactoeService {
    #[instrument(skip(self, _req))]
    async fn create_game(
        &self,
        _req: CreateGameRequest,
    ) -> Result<CreateGameResponse, RpcStatus> {
        let game_id = self.store.create().await;
        Ok(CreateGameResponse { game_id })
    }

    #[instrument(skip(self))]
    async fn make_move(&self, req: MakeMoveRequest) -> Result<MakeMoveResponse, RpcStatus> {
        let outcome = self
            .store
            .make_move(&req.game_id, req.row, req.col, &req.player)
            .await?;
        Ok(outcome.into())
    }

    #[instrument(skip(self))]
    async fn get_game_state(
        &self,
        req: GetGameStateRequest,
    ) -> Result<GetGameStateResponse, RpcStatus> {
        let game = self.store.get(&req.game_id).await?;
        Ok(game.outcome().into())
    }
}

/// Route a wire request to the matching operation
pub async fn dispatch(service: &dyn Tictactoe, request: RpcRequest) -> RpcResponse {
    let result = match request {
        RpcRequest::CreateGame(req) => service.create_game(req).await.map(RpcResponse::CreateGame),
        RpcRequest::MakeMove(req) => service.make_move(req).await.map(RpcResponse::MakeMove),
        RpcRequest::GetGameState(req) => service
            .get_game_state(req)
            .await
            .map(RpcResponse::GetGameState),
    };
    result.unwrap_or_else(RpcResponse::Error)
}
